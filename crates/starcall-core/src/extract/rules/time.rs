//! Landing time extraction.
//!
//! The dialog gives a window such as "in the next 1 hour 50 minutes to
//! 1 hour 52 minutes". Only the start of the window is used.

use regex::Captures;
use tracing::debug;

use crate::models::SENTINEL_TIME;

use super::patterns::{DIGIT_RUN, HOURS_COMPONENT, MINUTES_COMPONENT, NEXT_TIME_PHRASE};
use super::{ExtractionMatch, FieldExtractor};

const MINUTES_PER_HOUR: u32 = 60;

/// Landing time extractor; values are total minutes.
pub struct TimeExtractor;

impl TimeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TimeExtractor {
    type Output = ExtractionMatch<u32>;

    /// Reads only the first time phrase in the text.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = NEXT_TIME_PHRASE.captures(text)?;
        read_phrase(&caps)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NEXT_TIME_PHRASE
            .captures_iter(text)
            .filter_map(|caps| read_phrase(&caps))
            .collect()
    }
}

fn read_phrase(caps: &Captures<'_>) -> Option<ExtractionMatch<u32>> {
    let full_match = caps.get(0)?;
    let time_text = caps.get(1)?.as_str();

    let Some((minutes, confidence)) = parse_time_text(time_text) else {
        debug!("No number in time phrase {:?}", time_text);
        return None;
    };

    Some(
        ExtractionMatch::new(minutes, confidence, time_text)
            .with_position(full_match.start(), full_match.end()),
    )
}

/// Convert the text between "next" and "to" into minutes.
///
/// Hours and minutes components are summed. When neither is present the
/// first run of digits is read as minutes. Returns the minutes and a
/// confidence score.
pub fn parse_time_text(time_text: &str) -> Option<(u32, f32)> {
    let hours = HOURS_COMPONENT
        .captures(time_text)
        .and_then(|c| c[1].parse::<u32>().ok());
    let minutes = MINUTES_COMPONENT
        .captures(time_text)
        .and_then(|c| c[1].parse::<u32>().ok());

    if hours.is_none() && minutes.is_none() {
        return DIGIT_RUN
            .find(time_text)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .map(|m| (m, 0.7));
    }

    let total = hours
        .unwrap_or(0)
        .saturating_mul(MINUTES_PER_HOUR)
        .saturating_add(minutes.unwrap_or(0));

    Some((total, 0.95))
}

/// Find the minutes until landing in cleaned dialog text.
pub fn find_time(text: &str) -> Option<u32> {
    TimeExtractor::new().extract(text).map(|m| m.value)
}

/// Minutes until landing as a string; `"0"` when no time phrase is found.
pub fn extract_time(text: &str) -> String {
    find_time(text)
        .map(|m| m.to_string())
        .unwrap_or_else(|| SENTINEL_TIME.to_string())
}
