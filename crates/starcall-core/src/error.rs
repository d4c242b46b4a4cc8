//! Error types for the starcall-core library.

use thiserror::Error;

/// Main error type for the starcall library.
#[derive(Error, Debug)]
pub enum StarcallError {
    /// Dialog field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (configuration files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A dialog field that could not be recovered from the OCR text.
///
/// The extractors themselves never fail; these are only produced when a
/// caller asks for a complete set of fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No known region name or fragment was found.
    #[error("unrecognized landing region")]
    UnknownLocation,

    /// Neither a size descriptor nor an exact size was found.
    #[error("unrecognized star size")]
    UnknownSize,

    /// No "next ... to" time phrase was found.
    #[error("missing landing time")]
    MissingTime,
}

/// Result type for the starcall library.
pub type Result<T> = std::result::Result<T, StarcallError>;
