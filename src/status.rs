//! Status values for surfacing outcomes to a user interface.
//!
//! The core pipeline never takes display callbacks; operations return a
//! [`Status`] value and the caller owns how long and where it is shown.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusLevel::Success => "success",
            StatusLevel::Error => "error",
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
        };
        write!(f, "{}", name)
    }
}

/// A human-readable message with a severity, returned to callers instead of
/// being pushed through a notification callback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display_is_lowercase() {
        assert_eq!(StatusLevel::Success.to_string(), "success");
        assert_eq!(StatusLevel::Error.to_string(), "error");
        assert_eq!(StatusLevel::Info.to_string(), "info");
        assert_eq!(StatusLevel::Warning.to_string(), "warning");
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Status::success("ok").level, StatusLevel::Success);
        assert_eq!(Status::error("bad").level, StatusLevel::Error);
        assert_eq!(Status::info("fyi").level, StatusLevel::Info);
        assert_eq!(Status::warning("careful").level, StatusLevel::Warning);
    }

    #[test]
    fn test_level_serializes_snake_case() {
        let json = serde_json::to_string(&StatusLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
