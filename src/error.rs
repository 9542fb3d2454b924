//! Error types for the presentation layer.
//!
//! The engine itself cannot fail; everything here comes from user input or
//! the settings file.

use derive_more::{Display, Error};

/// Problems with the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// More than one positional argument was given.
    #[display("expected one trial count, got {count} arguments")]
    TooManyArguments {
        /// Number of positional arguments seen.
        count: usize,
    },

    /// The trial count is not an integer.
    #[display("trial count is not an integer: {input:?}")]
    NotAnInteger {
        /// The raw argument.
        input: String,
    },

    /// The trial count is zero or negative.
    #[display("trial count must be positive, got {value}")]
    NotPositive {
        /// The parsed value.
        value: i64,
    },
}

/// Settings file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for SettingsError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
