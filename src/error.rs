//! Unified error types for fichepack.
//!
//! Malformed input is never an error here: extractors skip lines that are
//! not contacts, numbers that do not validate and JSON that does not parse.
//! [`FicheError`] covers I/O failures and bad arguments such as an export
//! size that is not a number.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for fichepack operations.
///
/// # Example
///
/// ```rust
/// use fichepack::error::Result;
/// use fichepack::Fiche;
///
/// fn my_function() -> Result<Vec<Fiche>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, FicheError>;

/// The error type for all fichepack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FicheError {
    /// An I/O error occurred while reading an input or writing an export.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An export or input format was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A numeric parameter (export size, lookup limit) did not parse.
    #[error("Invalid size '{input}'. Expected a non-negative integer")]
    InvalidSize {
        /// The string that was provided
        input: String,
    },
}

impl From<std::string::FromUtf8Error> for FicheError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        FicheError::InvalidFormat {
            format: "UTF-8",
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl FicheError {
    /// Creates a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FicheError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        FicheError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid size error.
    pub fn invalid_size(input: impl Into<String>) -> Self {
        FicheError::InvalidSize {
            input: input.into(),
        }
    }

    /// Returns `true` if this is an IO error (including read errors).
    pub fn is_io(&self) -> bool {
        matches!(self, FicheError::Io(_) | FicheError::Read { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, FicheError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid size error.
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, FicheError::InvalidSize { .. })
    }
}

/// Parses a caller-supplied size parameter.
///
/// ```rust
/// use fichepack::error::parse_size;
///
/// assert_eq!(parse_size(" 250 ").unwrap(), 250);
/// assert!(parse_size("lots").unwrap_err().is_invalid_size());
/// ```
pub fn parse_size(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| FicheError::invalid_size(input))
}
