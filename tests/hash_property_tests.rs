//! Property tests for the key hashers.

use langtab::{DigestAlgorithm, DigestHasher, FoldHasher, KeyHasher, fold_key, process_csv};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fold_key_is_deterministic(input in ".*") {
        prop_assert_eq!(fold_key(&input), fold_key(&input));
    }

    #[test]
    fn fold_key_is_always_32_hex_chars(input in ".*") {
        let key = fold_key(&input);
        prop_assert_eq!(key.len(), 32);
        prop_assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fold_hasher_trait_matches_free_function(input in ".*") {
        prop_assert_eq!(FoldHasher.hash_key(&input), fold_key(&input));
    }

    #[test]
    fn md5_digest_is_deterministic_32_hex(input in ".*") {
        let hasher = DigestHasher::new(DigestAlgorithm::Md5);
        let key = hasher.hash_key(&input);
        prop_assert_eq!(key.len(), 32);
        prop_assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert_eq!(key, hasher.hash_key(&input));
    }

    #[test]
    fn sha256_digest_is_deterministic_64_hex(input in ".*") {
        let hasher = DigestHasher::new(DigestAlgorithm::Sha256);
        let key = hasher.hash_key(&input);
        prop_assert_eq!(key.len(), 64);
        prop_assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert_eq!(key, hasher.hash_key(&input));
    }

    // Processing the same sheet twice yields identical results: the pipeline
    // holds no state between calls.
    #[test]
    fn processing_is_reproducible(
        source in "[a-z]{1,12}",
        translated in "[a-z ]{0,12}",
    ) {
        let sheet = format!("en,fr\n{},{}\n", source, translated);
        prop_assert_eq!(process_csv(&sheet), process_csv(&sheet));
    }
}

#[test]
fn fold_and_digest_keys_are_not_interchangeable() {
    // Same width, different values: an explicit reason the two hashers must
    // never be mixed within one persisted key set.
    let md5 = DigestHasher::new(DigestAlgorithm::Md5);
    assert_ne!(fold_key("hello"), md5.hash_key("hello"));
}
