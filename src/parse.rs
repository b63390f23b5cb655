//! CSV document parsing.
//!
//! The input dialect is deliberately simple: lines are comma-separated, a `#`
//! at the start of a trimmed line marks a comment, blank lines are ignored,
//! and double quotes delimit fields that contain literal commas. Quotes only
//! toggle quoting state; there is no escape sequence for a literal quote
//! character inside a field.

use crate::error::Error;

/// Parses a raw CSV document into rows of trimmed fields.
///
/// Accepts both `\n` and `\r\n` line endings. Blank lines and comment lines
/// (starting with `#`) are discarded before any structural validation, so they
/// may appear anywhere in the document.
///
/// The first returned row is the header row.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if no lines remain after filtering, and
/// [`Error::InsufficientRows`] if fewer than two remain (a header row plus at
/// least one data row is required).
pub fn parse_document(text: &str) -> Result<Vec<Vec<String>>, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if lines.is_empty() {
        return Err(Error::EmptyInput);
    }
    if lines.len() < 2 {
        return Err(Error::InsufficientRows);
    }

    Ok(lines.into_iter().map(split_fields).collect())
}

/// Splits one line into fields, honoring double-quoted sections.
///
/// A `"` flips the in-quotes flag and is never part of the output; a `,`
/// outside quotes terminates the current field. Fields are trimmed after
/// extraction, so a whitespace-only cell becomes an empty string rather than
/// being dropped.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
