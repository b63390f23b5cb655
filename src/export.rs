//! Rendering translation tables into per-language JSON files.
//!
//! Each language becomes one `<language>.json` file containing a
//! pretty-printed key-value object. Writing a batch into a directory tolerates
//! per-file failures so one bad filename does not lose the rest.

use std::{collections::BTreeMap, path::Path};

use tracing::warn;

use crate::{error::Error, status::Status, table::TranslationTable};

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    /// `<language>.json`
    pub filename: String,
    /// Pretty-printed JSON object of translation key → text.
    pub content: String,
}

/// Renders one file per language, in header order.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if a dictionary cannot be encoded, which for
/// string-to-string maps does not happen in practice.
pub fn render_language_files(table: &TranslationTable) -> Result<Vec<LanguageFile>, Error> {
    let empty = BTreeMap::new();
    let mut files = Vec::with_capacity(table.languages.len());
    for language in &table.languages {
        let map = table.language_map(language).unwrap_or(&empty);
        files.push(LanguageFile {
            filename: format!("{}.json", language),
            content: serde_json::to_string_pretty(map)?,
        });
    }
    Ok(files)
}

/// Outcome of saving a batch of files.
///
/// Cancellation (for example a caller whose directory prompt was dismissed)
/// is a distinct outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { written: usize, total: usize },
    Cancelled,
}

impl SaveOutcome {
    /// A display-ready summary of this outcome.
    pub fn status(&self) -> Status {
        match self {
            SaveOutcome::Saved { written, total } if written == total => {
                Status::success(format!("saved {} files", written))
            }
            SaveOutcome::Saved { written, total } => {
                Status::warning(format!("saved {} of {} files", written, total))
            }
            SaveOutcome::Cancelled => Status::info("save cancelled"),
        }
    }
}

/// Writes rendered files into an existing directory.
///
/// Individual file failures are logged and counted against the total rather
/// than aborting the batch.
///
/// # Errors
///
/// Returns [`Error::Io`] only when the target is not a directory.
pub fn save_to_dir<P: AsRef<Path>>(files: &[LanguageFile], dir: P) -> Result<SaveOutcome, Error> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", dir.display()),
        )));
    }

    let mut written = 0;
    for file in files {
        match std::fs::write(dir.join(&file.filename), &file.content) {
            Ok(()) => written += 1,
            Err(error) => {
                warn!(filename = %file.filename, %error, "failed to save file");
            }
        }
    }

    Ok(SaveOutcome::Saved {
        written,
        total: files.len(),
    })
}
