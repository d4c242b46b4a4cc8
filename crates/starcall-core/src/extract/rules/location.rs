//! Landing region extraction.

use tracing::trace;

use crate::models::SENTINEL_ERR;

use super::vocabulary::{KeyKind, LOCATIONS};
use super::{ExtractionMatch, FieldExtractor};

/// Region extractor backed by the ordered location table.
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = ExtractionMatch<&'static str>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        LOCATIONS.iter().find_map(|key| {
            let start = text.find(key.pattern)?;
            trace!("Location key {:?} matched at {}", key.pattern, start);
            Some(
                ExtractionMatch::new(key.region, confidence(key.kind), key.pattern)
                    .with_position(start, start + key.pattern.len()),
            )
        })
    }

    /// Every region with at least one matching key, in table order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for key in LOCATIONS {
            if results.iter().any(|r| r.value == key.region) {
                continue;
            }
            if let Some(start) = text.find(key.pattern) {
                results.push(
                    ExtractionMatch::new(key.region, confidence(key.kind), key.pattern)
                        .with_position(start, start + key.pattern.len()),
                );
            }
        }

        results
    }
}

fn confidence(kind: KeyKind) -> f32 {
    match kind {
        KeyKind::Name => 0.95,
        KeyKind::Fragment => 0.7,
    }
}

/// Find the landing region in cleaned dialog text.
pub fn find_location(text: &str) -> Option<&'static str> {
    LocationExtractor::new().extract(text).map(|m| m.value)
}

/// Canonical region label, or `"ERR"` when no key matches.
pub fn extract_location(text: &str) -> String {
    find_location(text).unwrap_or(SENTINEL_ERR).to_string()
}
