//! Error types for the unplan library.
//!
//! Most pattern-miss situations are documented degradations, not errors:
//! they log through the `log` facade and fall back. Only I/O, export
//! serialization, and page-source failures surface as `Error`.

use std::io;
use thiserror::Error;

/// Result type alias for unplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page source failed in a way the caller chose to surface.
    #[error("Page source error: {0}")]
    Source(String),

    /// Error serializing the result or a table (JSON, CSV, ZIP).
    #[error("Export error: {0}")]
    Export(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(format!("JSON serialization error: {}", err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(format!("CSV serialization error: {}", err))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Export(format!("Archive error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Source("no pages".to_string());
        assert_eq!(err.to_string(), "Page source error: no pages");

        let err = Error::Export("bad table".to_string());
        assert_eq!(err.to_string(), "Export error: bad table");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
