//! Translation table building.
//!
//! A table maps each header language to a dictionary of translation key →
//! translated text. Keys are derived from the source text (first column), so
//! the same logical string correlates across every per-language output.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::Error,
    hash::{FoldHasher, KeyHasher},
};

/// Per-language translations, keyed by language code and then translation key.
pub type TranslationMap = HashMap<String, BTreeMap<String, String>>;

/// All translations extracted from one CSV sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationTable {
    /// Language codes in their original header order.
    pub languages: Vec<String>,

    /// Translation key → text, per language. Every language in `languages`
    /// has an entry, even when no data rows survived.
    pub translations: TranslationMap,
}

impl TranslationTable {
    /// Builds a table from a header row and its data rows, deriving keys with
    /// the default [`FoldHasher`].
    ///
    /// See [`TranslationTable::build_with_hasher`] for the full contract.
    pub fn build(header: &[String], rows: &[Vec<String>]) -> Result<Self, Error> {
        Self::build_with_hasher(header, rows, &FoldHasher)
    }

    /// Builds a table from a header row and its data rows.
    ///
    /// Header fields are language codes; the first column doubles as the
    /// source text that keys are derived from. Data rows are applied in
    /// order, atomically per row:
    ///
    /// - A row whose field count differs from the header is skipped with a
    ///   warning.
    /// - A row with empty source text is skipped with a warning.
    /// - An empty translated cell falls back to the row's source text.
    /// - A repeated source text silently overwrites the earlier row's values
    ///   for every language (last write wins).
    ///
    /// Zero surviving rows is not an error; the result is an empty table that
    /// still lists every language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewColumns`] if the header has fewer than two
    /// fields and [`Error::DuplicateLanguage`] if a language code repeats.
    pub fn build_with_hasher<H: KeyHasher>(
        header: &[String],
        rows: &[Vec<String>],
        hasher: &H,
    ) -> Result<Self, Error> {
        if header.len() < 2 {
            return Err(Error::TooFewColumns);
        }

        let mut seen = HashSet::new();
        for language in header {
            if !seen.insert(language) {
                return Err(Error::DuplicateLanguage(language.clone()));
            }
        }

        let mut translations: TranslationMap = header
            .iter()
            .map(|language| (language.clone(), BTreeMap::new()))
            .collect();

        for (index, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                warn!(
                    row = index + 1,
                    expected = header.len(),
                    found = row.len(),
                    "column count differs from header, skipping row"
                );
                continue;
            }

            let source = &row[0];
            if source.is_empty() {
                warn!(row = index + 1, "source text is empty, skipping row");
                continue;
            }

            let key = hasher.hash_key(source);
            for (language, cell) in header.iter().zip(row) {
                let value = if cell.is_empty() { source } else { cell };
                if let Some(map) = translations.get_mut(language) {
                    map.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(Self {
            languages: header.to_vec(),
            translations,
        })
    }

    /// The key → text dictionary for one language, if it exists.
    pub fn language_map(&self, language: &str) -> Option<&BTreeMap<String, String>> {
        self.translations.get(language)
    }

    /// Number of distinct translation keys in the table.
    pub fn key_count(&self) -> usize {
        self.languages
            .first()
            .and_then(|language| self.translations.get(language))
            .map_or(0, BTreeMap::len)
    }

    /// True when no data rows survived building.
    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::fold_key;

    fn header(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_build_simple_table() {
        let table =
            TranslationTable::build(&header(&["en", "fr"]), &[row(&["hello", "bonjour"])]).unwrap();

        assert_eq!(table.languages, vec!["en", "fr"]);
        let key = fold_key("hello");
        assert_eq!(table.translations["en"][&key], "hello");
        assert_eq!(table.translations["fr"][&key], "bonjour");
    }

    #[test]
    fn test_build_too_few_columns() {
        let result = TranslationTable::build(&header(&["en"]), &[row(&["hello"])]);
        assert!(matches!(result, Err(Error::TooFewColumns)));
    }

    #[test]
    fn test_build_duplicate_language() {
        let result = TranslationTable::build(&header(&["en", "en"]), &[row(&["a", "b"])]);
        assert!(matches!(result, Err(Error::DuplicateLanguage(code)) if code == "en"));
    }

    #[test]
    fn test_mismatched_row_is_skipped() {
        let table = TranslationTable::build(
            &header(&["en", "fr"]),
            &[row(&["hello", "bonjour"]), row(&["orphan"])],
        )
        .unwrap();
        assert_eq!(table.key_count(), 1);
    }

    #[test]
    fn test_empty_source_row_is_skipped() {
        let table =
            TranslationTable::build(&header(&["en", "fr"]), &[row(&["", "bonjour"])]).unwrap();
        assert!(table.is_empty());
        // Both language maps still exist.
        assert_eq!(table.languages.len(), 2);
        assert!(table.language_map("fr").unwrap().is_empty());
    }

    #[test]
    fn test_empty_cell_falls_back_to_source() {
        let table = TranslationTable::build(&header(&["en", "fr"]), &[row(&["hello", ""])]).unwrap();
        assert_eq!(table.translations["fr"][&fold_key("hello")], "hello");
    }

    #[test]
    fn test_duplicate_source_last_write_wins() {
        let table = TranslationTable::build(
            &header(&["en", "fr"]),
            &[row(&["x", "un"]), row(&["x", "deux"])],
        )
        .unwrap();
        assert_eq!(table.key_count(), 1);
        assert_eq!(table.translations["fr"][&fold_key("x")], "deux");
    }

    #[test]
    fn test_zero_rows_is_valid() {
        let table = TranslationTable::build(&header(&["en", "fr", "de"]), &[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.languages, vec!["en", "fr", "de"]);
        for language in &table.languages {
            assert!(table.language_map(language).unwrap().is_empty());
        }
    }

    #[test]
    fn test_build_with_explicit_hasher() {
        use crate::hash::{DigestAlgorithm, DigestHasher};

        let hasher = DigestHasher::new(DigestAlgorithm::Md5);
        let table = TranslationTable::build_with_hasher(
            &header(&["en", "fr"]),
            &[row(&["abc", "abc-fr"])],
            &hasher,
        )
        .unwrap();
        // RFC 1321 test vector for "abc".
        assert_eq!(
            table.translations["fr"]["900150983cd24fb0d6963f7d28e17f72"],
            "abc-fr"
        );
    }
}
