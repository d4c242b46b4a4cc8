//! Dialog field extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, StarCallParser};
pub use rules::{
    extract_location, extract_size, extract_time, find_location, find_size, find_time,
    ExtractionMatch, FieldExtractor,
};
