//! All error types for the langtab crate.
//!
//! These are returned from all fallible operations (parsing, table building,
//! digest selection, output rendering). Row-level problems inside a CSV sheet
//! are deliberately *not* errors; they are logged and the row is skipped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input is empty")]
    EmptyInput,

    #[error("CSV must contain a header row and at least one data row")]
    InsufficientRows,

    #[error("header must contain at least two columns")]
    TooFewColumns,

    #[error("duplicate language code `{0}` in header")]
    DuplicateLanguage(String),

    #[error("digest algorithm `{0}` is not available")]
    DigestUnavailable(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
