//! Star size extraction.
//!
//! The size sentence reads "The star looks to be <size>". Tier 1 and 2
//! telescopes give a descriptor ("very small", "average"), tier 3 gives
//! "be size <n>". Everything before `be` is ignored.

use tracing::{debug, trace};

use crate::models::{StarSize, SENTINEL_ERR};

use super::vocabulary::SIZE_DESCRIPTORS;
use super::{ExtractionMatch, FieldExtractor};

/// Word that introduces the size. The first occurrence anywhere in the text
/// is used, even inside another word.
pub const BE_KEYWORD: &str = "be";

/// Word that marks an exact (tier 3) size.
pub const SIZE_KEYWORD: &str = "size";

/// Byte offset of `size` within the window after `be` ("be size").
pub const SIZE_KEYWORD_OFFSET: usize = 1;

/// OCR reads the digit 8 as this letter.
const MISREAD_EIGHT: char = 'B';

/// Star size extractor.
pub struct SizeExtractor;

impl SizeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Read an exact size from the text following `size`.
    ///
    /// All digits after the keyword are concatenated. With no digits at all,
    /// a `B` is taken to be a misread `8`.
    fn read_exact(&self, window: &str, window_start: usize) -> Option<ExtractionMatch<StarSize>> {
        let rest_start = SIZE_KEYWORD_OFFSET + SIZE_KEYWORD.len();
        let rest = &window[rest_start..];
        let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();

        let (value, confidence) = if digits.is_empty() {
            if !rest.contains(MISREAD_EIGHT) {
                debug!("No digits after {:?}: {:?}", SIZE_KEYWORD, rest);
                return None;
            }
            trace!("Treating {:?} as a misread 8", MISREAD_EIGHT);
            (8, 0.6)
        } else {
            match digits.parse::<u32>() {
                Ok(n) => (n, 0.95),
                Err(_) => {
                    debug!("Exact size {:?} does not fit in u32", digits);
                    return None;
                }
            }
        };

        Some(
            ExtractionMatch::new(StarSize::Exact(value), confidence, window)
                .with_position(window_start, window_start + window.len()),
        )
    }
}

impl Default for SizeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SizeExtractor {
    type Output = ExtractionMatch<StarSize>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let (window_start, window) = size_window(text)?;

        if is_exact_size(window) {
            return self.read_exact(window, window_start);
        }

        SIZE_DESCRIPTORS.iter().find_map(|(phrase, size)| {
            window.find(phrase).map(|offset| {
                let start = window_start + offset;
                ExtractionMatch::new(*size, 0.9, *phrase).with_position(start, start + phrase.len())
            })
        })
    }

    /// The exact size, or every descriptor found after `be` in table order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let Some((window_start, window)) = size_window(text) else {
            return Vec::new();
        };

        if is_exact_size(window) {
            return self.read_exact(window, window_start).into_iter().collect();
        }

        SIZE_DESCRIPTORS
            .iter()
            .filter_map(|(phrase, size)| {
                window.find(phrase).map(|offset| {
                    let start = window_start + offset;
                    ExtractionMatch::new(*size, 0.9, *phrase)
                        .with_position(start, start + phrase.len())
                })
            })
            .collect()
    }
}

/// Text after the first `be`, with its byte offset in `text`.
fn size_window(text: &str) -> Option<(usize, &str)> {
    let start = text.find(BE_KEYWORD)? + BE_KEYWORD.len();
    Some((start, &text[start..]))
}

fn is_exact_size(window: &str) -> bool {
    window.find(SIZE_KEYWORD) == Some(SIZE_KEYWORD_OFFSET)
}

/// Find the star size in cleaned dialog text.
pub fn find_size(text: &str) -> Option<StarSize> {
    SizeExtractor::new().extract(text).map(|m| m.value)
}

/// Size label (`Small`, `Average`, `Big` or the exact number), or `"ERR"`.
pub fn extract_size(text: &str) -> String {
    find_size(text)
        .map(|s| s.to_string())
        .unwrap_or_else(|| SENTINEL_ERR.to_string())
}
