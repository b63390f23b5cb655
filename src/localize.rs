//! Translation lookup for application text.
//!
//! A [`Localizer`] is an explicit context object holding the active language
//! and a loaded [`TranslationTable`]; call sites receive it as a parameter.
//! There is no process-wide singleton and no hidden mutable state.

use crate::table::TranslationTable;

/// Lookup context over a loaded translation table.
#[derive(Debug, Clone)]
pub struct Localizer {
    language: String,
    table: TranslationTable,
}

impl Localizer {
    /// Creates a context with the given active language.
    ///
    /// The language does not have to exist in the table; lookups then fall
    /// back to the key itself.
    pub fn new(language: impl Into<String>, table: TranslationTable) -> Self {
        Self {
            language: language.into(),
            table,
        }
    }

    /// The active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches the active language without reloading the table.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Looks up `key` in the active language, falling back to the key itself
    /// when the language or the key is missing.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table
            .language_map(&self.language)
            .and_then(|map| map.get(key))
            .map_or(key, String::as_str)
    }

    /// Looks up `key` and substitutes `{name}` placeholders with the given
    /// parameter values.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.translate(key).to_string();
        for (name, replacement) in params {
            value = value.replace(&format!("{{{}}}", name), replacement);
        }
        value
    }
}
