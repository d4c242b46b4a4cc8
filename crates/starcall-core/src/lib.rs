//! Core library for shooting star call extraction.
//!
//! This crate provides:
//! - OCR text normalization for the shooting star dialog
//! - Landing region, size and time extraction
//! - The `/call` command built from those fields

pub mod command;
pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;

pub use command::CallCommand;
pub use error::{ExtractionError, Result, StarcallError};
pub use extract::{
    extract_location, extract_size, extract_time, ExtractionResult, FieldExtractor,
    StarCallParser,
};
pub use models::{ExtractedFields, StarSize, StarcallConfig};
pub use normalize::{normalize, Normalizer, Replacement};
