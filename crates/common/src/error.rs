//! Common error types for axe-scan.

use std::path::PathBuf;
use thiserror::Error;

/// Known domain error with a user-facing message.
///
/// The message is shown as-is (it is already localized), and the exit code
/// becomes the process exit code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AxeScanError {
    message: String,
    exit_code: u8,
}

impl AxeScanError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: 1,
        }
    }

    pub fn with_exit_code(mut self, exit_code: u8) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Common error type for axe-scan operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error(transparent)]
    Domain(#[from] AxeScanError),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Other(e.to_string())
    }
}

impl Error {
    /// The domain error inside this error, if any.
    pub fn as_domain(&self) -> Option<&AxeScanError> {
        match self {
            Error::Domain(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_defaults_to_exit_code_one() {
        let err = AxeScanError::new("aborted");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "aborted");
    }

    #[test]
    fn test_domain_error_survives_wrapping() {
        let err: Error = AxeScanError::new("no config").with_exit_code(3).into();
        assert_eq!(err.to_string(), "no config");
        assert_eq!(err.as_domain().map(|e| e.exit_code()), Some(3));
    }
}
