//! Shooting star dialog parser: normalization followed by field extraction.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{ExtractedFields, StarcallConfig};
use crate::normalize::Normalizer;

use super::rules::{FieldExtractor, LocationExtractor, SizeExtractor, TimeExtractor};

/// Result of parsing one dialog.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: ExtractedFields,
    /// Text as received from OCR.
    pub raw_text: String,
    /// Text after normalization.
    pub cleaned_text: String,
    /// Overall confidence (0.0 - 1.0); missing fields count as zero.
    pub confidence: f32,
    /// One entry per field that could not be recovered.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for OCR'd shooting star dialogs.
#[derive(Debug, Clone, Default)]
pub struct StarCallParser {
    normalizer: Normalizer,
}

impl StarCallParser {
    /// Create a parser with the built-in replacement table.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &StarcallConfig) -> Self {
        Self {
            normalizer: Normalizer::from_config(&config.normalizer),
        }
    }

    /// Add an OCR misreading repair.
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.normalizer = self.normalizer.with_replacement(from, to);
        self
    }

    /// Normalize raw OCR text.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Extract fields from already normalized text.
    pub fn extract_fields(&self, cleaned: &str) -> ExtractedFields {
        self.extract_scored(cleaned).0
    }

    /// Normalize raw OCR text and extract all three fields.
    pub fn parse(&self, raw: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing dialog from {} characters of text", raw.len());

        let cleaned_text = self.normalizer.normalize(raw);
        debug!("Cleaned text: {:?}", cleaned_text);

        let (fields, confidence) = self.extract_scored(&cleaned_text);

        let mut warnings = Vec::new();
        if fields.location.is_none() {
            warnings.push("Could not extract landing region".to_string());
        }
        if fields.size.is_none() {
            warnings.push("Could not extract star size".to_string());
        }
        if fields.time_minutes.is_none() {
            warnings.push("Could not extract landing time".to_string());
        }
        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "Extracted region {} size {} time {} with confidence {:.2}",
            fields.location_or_sentinel(),
            fields.size_or_sentinel(),
            fields.time_or_sentinel(),
            confidence
        );

        ExtractionResult {
            fields,
            raw_text: raw.to_string(),
            cleaned_text,
            confidence,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn extract_scored(&self, cleaned: &str) -> (ExtractedFields, f32) {
        let locations = LocationExtractor::new().extract_all(cleaned);
        if locations.len() > 1 {
            let regions: Vec<&str> = locations.iter().map(|m| m.value).collect();
            debug!("Several regions matched, using the first: {:?}", regions);
        }
        let location = locations.into_iter().next();
        let size = SizeExtractor::new().extract(cleaned);
        let time = TimeExtractor::new().extract(cleaned);

        let scores = [
            location.as_ref().map(|m| m.confidence),
            size.as_ref().map(|m| m.confidence),
            time.as_ref().map(|m| m.confidence),
        ];
        let confidence =
            scores.into_iter().map(|c| c.unwrap_or(0.0)).sum::<f32>() / scores.len() as f32;

        let fields = ExtractedFields {
            location: location.map(|m| m.value.to_string()),
            size: size.map(|m| m.value),
            time_minutes: time.map(|m| m.value),
        };

        (fields, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarSize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end() {
        let text = "You see a shooting star! The star looks like it will land in The Lost Grove \
                    in the next 10 to 12 minutes. The star looks to be size 4,";

        let result = StarCallParser::new().parse(text);

        assert_eq!(result.fields.location_or_sentinel(), "Lost Grove");
        assert_eq!(result.fields.size_or_sentinel(), "4");
        assert_eq!(result.fields.time_or_sentinel(), "10");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_multi_line_dialog() {
        let text = "You see a shooting star! -\nThe star looks like it will land in the Daemonheim \
                    peninsula in the next 1\nhour 50 minutes to 1 hour 52 minutes.\nThe star looks to be size 3,";

        let result = StarCallParser::new().parse(text);

        assert_eq!(
            result.fields,
            ExtractedFields {
                location: Some("Daemonheim".to_string()),
                size: Some(StarSize::Exact(3)),
                time_minutes: Some(110),
            }
        );
        assert!(!result.cleaned_text.contains('\n'));
    }

    #[test]
    fn test_ocr_noise_is_repaired() {
        let text = "You see a shooting star!\nThe star looks like itwill land in The Lost Grove \
                    in the next 10 12 mines.\nThe star looks to be size B,";

        let result = StarCallParser::new().parse(text);

        assert_eq!(result.fields.location.as_deref(), Some("Lost Grove"));
        assert_eq!(result.fields.size, Some(StarSize::Exact(8)));
        assert_eq!(result.fields.time_minutes, Some(10));
    }

    #[test]
    fn test_range_repair_before_time_extraction() {
        let result = StarCallParser::new().parse("land in Tuska in the next 120 to 30 minutes.");

        assert_eq!(result.cleaned_text, "land in Tuska in the next 12 to 30 minutes.");
        assert_eq!(result.fields.time_minutes, Some(12));
    }

    #[test]
    fn test_descriptor_size() {
        let text = "The star looks like it will land in Kandarin in the next 30 to 35 minutes. \
                    The star looks to be fairly big.";

        let fields = StarCallParser::new().parse(text).fields;
        assert_eq!(fields.location.as_deref(), Some("Kandarin"));
        assert_eq!(fields.size, Some(StarSize::Average));
        assert_eq!(fields.time_minutes, Some(30));
    }

    #[test]
    fn test_warnings_for_missing_fields() {
        let result = StarCallParser::new().parse("nothing useful here");

        assert_eq!(result.fields, ExtractedFields::default());
        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_custom_replacement() {
        let parser = StarCallParser::new().with_replacement("Tusk@", "Tuska");
        let fields = parser.parse("land in Tusk@ in the next 5 to 7 minutes").fields;

        assert_eq!(fields.location.as_deref(), Some("Tuska"));
    }

    #[test]
    fn test_extract_fields_skips_normalization() {
        let parser = StarCallParser::new();

        // Unnormalized "10 12" has no "to" after the first number.
        assert_eq!(parser.extract_fields("in the next 10 12 minutes").time_minutes, None);
        assert_eq!(
            parser.extract_fields(&parser.normalize("in the next 10 12 minutes")).time_minutes,
            Some(10)
        );
    }
}
