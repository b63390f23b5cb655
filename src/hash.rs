//! Key hashing.
//!
//! Translation keys are 32-hex-character identifiers derived from a row's
//! source text. Two hasher implementations exist behind one trait and are
//! selected explicitly by the caller; their outputs are not bit-compatible, so
//! they must never be mixed within one set of persisted keys.
//!
//! [`FoldHasher`] is the cheap, deterministic default used for translation
//! keys. [`DigestHasher`] wraps a real cryptographic digest and is meant for
//! content fingerprinting.

use std::str::FromStr;

use md5::{Digest, Md5};
use sha2::Sha256;

use crate::error::Error;

/// A deterministic string-to-hex-key function.
pub trait KeyHasher {
    /// Hashes `text` into a lowercase hexadecimal key.
    fn hash_key(&self, text: &str) -> String;
}

/// Non-cryptographic folding hasher producing 32 hex characters.
///
/// This is the hasher behind every translation key. It is pure and stable
/// across runs and platforms: the same input always yields the same key.
/// Collisions are tolerated, not prevented.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldHasher;

impl KeyHasher for FoldHasher {
    fn hash_key(&self, text: &str) -> String {
        fold_key(text)
    }
}

/// Folds a string into a 32-hex-character key.
///
/// Each character's code point is combined into a 32-bit accumulator via
/// `hash = hash * 31 + code`, wrapping on overflow. The single 32-bit value is
/// then spread into four XOR/shift-mixed segments of 8 hex digits each, so the
/// key has the same width as an MD5 digest without being one.
pub fn fold_key(text: &str) -> String {
    let mut hash: u32 = 0;
    for ch in text.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
    }

    format!(
        "{:08x}{:08x}{:08x}{:08x}",
        hash,
        hash ^ (hash >> 16),
        (hash << 8) ^ (hash >> 8),
        (hash << 16) ^ hash,
    )
}

/// Digest algorithms supported by [`DigestHasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(Error::DigestUnavailable(s.to_string())),
        }
    }
}

/// Cryptographic digest hasher over the UTF-8 bytes of the input.
///
/// Selected through an explicit capability probe rather than a silent
/// fallback: construction fails with [`Error::DigestUnavailable`] when the
/// requested algorithm is not supported, and callers choosing to continue with
/// [`FoldHasher`] do so visibly. Digest keys are suitable for content
/// fingerprinting; they are wider than fold keys for SHA-256 and must not be
/// mixed with them.
#[derive(Debug, Clone, Copy)]
pub struct DigestHasher {
    algorithm: DigestAlgorithm,
}

impl DigestHasher {
    /// Creates a hasher for the given algorithm.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Probes for an algorithm by name (`"md5"` or `"sha256"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigestUnavailable`] for any other name.
    pub fn probe(name: &str) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?))
    }

    /// The algorithm this hasher was constructed with.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl KeyHasher for DigestHasher {
    fn hash_key(&self, text: &str) -> String {
        match self.algorithm {
            DigestAlgorithm::Md5 => format!("{:x}", Md5::digest(text.as_bytes())),
            DigestAlgorithm::Sha256 => format!("{:x}", Sha256::digest(text.as_bytes())),
        }
    }
}
