//! OCR text normalization.
//!
//! Repairs the misreadings the OCR engine is known to produce for the star
//! dialog before any field is extracted. Every step is total; text without
//! the expected patterns passes through unchanged. Normalizing already
//! normalized text is a no-op.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::extract::rules::patterns::{
    DIGIT_THEN_MINUTES, DIGIT_THEN_TO, NUMBER_RANGE, NUMBER_THEN_SPACE,
};
use crate::models::NormalizerConfig;

/// Built-in misreadings, applied in order.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("itwill", "it will"),
    ("mines", "minutes"),
    ("t0", "to"),
];

/// A literal substring replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// OCR text normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    replacements: Vec<Replacement>,
}

impl Normalizer {
    /// Create a normalizer with the built-in replacement table.
    pub fn new() -> Self {
        Self {
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(from, to)| Replacement::new(*from, *to))
                .collect(),
        }
    }

    /// Create a normalizer with the built-in table followed by the
    /// configured extra replacements.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new().with_replacements(config.extra_replacements.iter().cloned())
    }

    /// Append a replacement. Empty patterns are ignored.
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.push(Replacement::new(from, to));
        self
    }

    /// Append several replacements.
    pub fn with_replacements(mut self, replacements: impl IntoIterator<Item = Replacement>) -> Self {
        for replacement in replacements {
            self.push(replacement);
        }
        self
    }

    /// Replacement table in application order.
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    fn push(&mut self, replacement: Replacement) {
        if replacement.from.is_empty() {
            debug!("Ignoring replacement with empty pattern");
            return;
        }
        self.replacements.push(replacement);
    }

    /// Normalize raw OCR text.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = join_lines(raw);

        for replacement in &self.replacements {
            if text.contains(&replacement.from) {
                debug!("Replacing {:?} with {:?}", replacement.from, replacement.to);
                text = text.replace(&replacement.from, &replacement.to);
            }
        }

        let text = space_connectors(&text);
        let text = insert_missing_to(&text);
        repair_range(&text)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize raw OCR text with the built-in replacement table.
pub fn normalize(raw: &str) -> String {
    Normalizer::new().normalize(raw)
}

fn join_lines(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Exactly one space between a digit and a following "to <digit>" or
/// "minutes".
fn space_connectors(text: &str) -> String {
    let text = replace_when_digit_follows(&DIGIT_THEN_TO, text, |caps| {
        format!("{} to ", &caps[1])
    });
    let text = DIGIT_THEN_MINUTES.replace_all(&text, "${1} minutes").into_owned();
    trace!("After connector spacing: {:?}", text);
    text
}

/// "10 12" becomes "10 to 12".
fn insert_missing_to(text: &str) -> String {
    let text = replace_when_digit_follows(&NUMBER_THEN_SPACE, text, |caps| {
        format!("{} to ", &caps[1])
    });
    trace!("After missing connector: {:?}", text);
    text
}

/// Rewrite matches of `pattern` that are directly followed by an ASCII
/// digit. The digit itself is left unconsumed, so chains such as
/// "1to2to3" are repaired in a single pass.
fn replace_when_digit_follows<F>(pattern: &Regex, text: &str, rewrite: F) -> String
where
    F: Fn(&Captures<'_>) -> String,
{
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            let digit_follows = text[end..].starts_with(|c: char| c.is_ascii_digit());
            if digit_follows {
                rewrite(caps)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Repair the first "<A> to <B>" range whose start exceeds its end.
///
/// OCR sometimes adds a spurious trailing digit to the first number
/// ("120 to 30" for "12 to 30"); `A` is divided by ten until `A <= B`
/// or only one digit is left. A one-digit start is never truncated.
/// The range is written back in canonical form.
fn repair_range(text: &str) -> String {
    let Some(caps) = NUMBER_RANGE.captures(text) else {
        return text.to_string();
    };
    let Some(whole) = caps.get(0) else {
        return text.to_string();
    };

    let (Ok(mut start), Ok(end)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
        debug!("Range {:?} is too large to repair", whole.as_str());
        return text.to_string();
    };

    if start > end {
        let original = start;
        while start > end && start >= 10 {
            start /= 10;
        }
        debug!("Repaired range start {} to {} (end {})", original, start, end);
    }

    format!(
        "{}{} to {}{}",
        &text[..whole.start()],
        start,
        end,
        &text[whole.end()..]
    )
}
