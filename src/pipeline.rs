//! The CSV processing facade.
//!
//! Ties parsing and table building into a single call that never fails
//! loudly: every parse or validation error is folded into the returned
//! [`ProcessResult`] as a human-readable message. The boundary to UI layers
//! is string-based by design.

use serde::Serialize;

use crate::{
    parse::parse_document,
    status::Status,
    table::{TranslationMap, TranslationTable},
};

/// Outcome of processing one CSV document.
///
/// On success `error` is `None` and `languages`/`translations` are populated;
/// on failure `error` carries the message and both collections are empty. A
/// fresh value is constructed per call and is never shared or mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    /// Language codes in header order. Empty on failure.
    pub languages: Vec<String>,

    /// Per-language translation dictionaries. Empty on failure.
    pub translations: TranslationMap,

    /// Human-readable failure message, if processing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResult {
    fn failure(message: String) -> Self {
        Self {
            languages: Vec::new(),
            translations: TranslationMap::new(),
            error: Some(message),
        }
    }

    /// True when processing completed without a structural error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Number of distinct translation keys extracted.
    pub fn key_count(&self) -> usize {
        self.languages
            .first()
            .and_then(|language| self.translations.get(language))
            .map_or(0, |map| map.len())
    }

    /// Converts a successful result back into a [`TranslationTable`], e.g.
    /// for rendering output files. Returns `None` on a failed result.
    pub fn into_table(self) -> Option<TranslationTable> {
        if self.error.is_some() {
            return None;
        }
        Some(TranslationTable {
            languages: self.languages,
            translations: self.translations,
        })
    }

    /// A display-ready summary of this result.
    pub fn status(&self) -> Status {
        match &self.error {
            Some(message) => Status::error(message.clone()),
            None => Status::success(format!(
                "processed {} entries across {} languages",
                self.key_count(),
                self.languages.len()
            )),
        }
    }
}

impl From<TranslationTable> for ProcessResult {
    fn from(table: TranslationTable) -> Self {
        Self {
            languages: table.languages,
            translations: table.translations,
            error: None,
        }
    }
}

/// Processes raw CSV text into per-language translation dictionaries.
///
/// The first non-comment, non-blank line is the header of language codes; the
/// first column of every data row is the source text that translation keys
/// are derived from. Malformed rows are skipped, never fatal.
///
/// This function does not return `Result`: structural failures come back as
/// the `error` field of [`ProcessResult`].
///
/// # Example
///
/// ```rust
/// use langtab::{fold_key, process_csv};
///
/// let result = process_csv("en,fr\nhello,bonjour\n");
/// assert!(result.is_success());
/// assert_eq!(result.translations["fr"][&fold_key("hello")], "bonjour");
/// ```
pub fn process_csv(raw_text: &str) -> ProcessResult {
    let rows = match parse_document(raw_text) {
        Ok(rows) => rows,
        Err(error) => return ProcessResult::failure(error.to_string()),
    };

    // parse_document guarantees a header row plus at least one data row.
    let (header, data_rows) = rows.split_at(1);
    match TranslationTable::build(&header[0], data_rows) {
        Ok(table) => ProcessResult::from(table),
        Err(error) => ProcessResult::failure(error.to_string()),
    }
}
