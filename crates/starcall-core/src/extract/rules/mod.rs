//! Rule-based field extractors for shooting star dialogs.

pub mod location;
pub mod patterns;
pub mod size;
pub mod time;
pub mod vocabulary;

pub use location::{extract_location, find_location, LocationExtractor};
pub use size::{extract_size, find_size, SizeExtractor};
pub use time::{extract_time, find_time, parse_time_text, TimeExtractor};
pub use vocabulary::{KeyKind, LocationKey, LOCATIONS, SIZE_DESCRIPTORS};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate readings of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
