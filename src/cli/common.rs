//! Shared CLI error and result types.

use std::fmt;

/// Errors surfaced by CLI commands, mapped to distinct exit codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// File system or serialization failure.
    Io(String),
    /// The input was loaded but is not acceptable.
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) | Self::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("gone").exit_code(), 2);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::validation("bad slug").to_string(), "bad slug");
    }
}
