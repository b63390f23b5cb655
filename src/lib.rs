#![forbid(unsafe_code)]
//! Turn multi-language CSV sheets into per-language key-value translation maps.
//!
//! The input is a CSV document whose header row lists language codes and whose
//! first column holds the source text. Each data row becomes one entry per
//! language, keyed by a stable 32-hex-character hash of the source text, so
//! the same logical string correlates across every output file.
//!
//! # Quick Start
//!
//! ```rust
//! use langtab::{process_csv, render_language_files};
//!
//! let result = process_csv("en,fr\nhello,bonjour\nbye,au revoir\n");
//! assert!(result.is_success());
//! assert_eq!(result.languages, vec!["en", "fr"]);
//!
//! // Render one pretty-printed JSON file per language.
//! let table = result.into_table().expect("result is successful");
//! let files = render_language_files(&table)?;
//! assert_eq!(files[1].filename, "fr.json");
//! # Ok::<(), langtab::Error>(())
//! ```
//!
//! # Design
//!
//! - The pipeline is pure and synchronous: no I/O, no shared state, fresh
//!   result values per call.
//! - Structural problems (empty input, bad header) fail the whole run; row
//!   level problems (mismatched columns, empty source text) skip the row with
//!   a warning and keep going.
//! - [`process_csv`] reports failures as a message string inside
//!   [`ProcessResult`], never as a panic or error value, so UI layers consume
//!   a single result shape.

pub mod error;
pub mod export;
pub mod hash;
pub mod localize;
pub mod parse;
pub mod pipeline;
pub mod status;
pub mod table;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    export::{LanguageFile, SaveOutcome, render_language_files, save_to_dir},
    hash::{DigestAlgorithm, DigestHasher, FoldHasher, KeyHasher, fold_key},
    localize::Localizer,
    parse::parse_document,
    pipeline::{ProcessResult, process_csv},
    status::{Status, StatusLevel},
    table::{TranslationMap, TranslationTable},
};
