//! Regex patterns for dialog normalization and field extraction.
//!
//! Digits are matched with `[0-9]` rather than `\d` so that only ASCII
//! digits (which `str::parse` accepts) are ever captured.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digit followed by the connector word "to"; the caller checks that a
    // digit follows so that "1to2to3" is handled in one pass.
    pub static ref DIGIT_THEN_TO: Regex = Regex::new(
        r"([0-9])\s*to\s*"
    ).unwrap();

    pub static ref DIGIT_THEN_MINUTES: Regex = Regex::new(
        r"([0-9])\s*minutes"
    ).unwrap();

    // Number followed by whitespace; the caller checks for a second number.
    pub static ref NUMBER_THEN_SPACE: Regex = Regex::new(
        r"([0-9]+)\s+"
    ).unwrap();

    // "<A> to <B>"
    pub static ref NUMBER_RANGE: Regex = Regex::new(
        r"([0-9]+)\s+to\s+([0-9]+)"
    ).unwrap();

    // "in the next 1 hour 50 minutes to ..." (captures "1 hour 50 minutes")
    pub static ref NEXT_TIME_PHRASE: Regex = Regex::new(
        r"(?:in the )?next\s+(.*?)\s+to"
    ).unwrap();

    pub static ref HOURS_COMPONENT: Regex = Regex::new(
        r"([0-9]+)\s+hours?"
    ).unwrap();

    pub static ref MINUTES_COMPONENT: Regex = Regex::new(
        r"([0-9]+)\s+minutes"
    ).unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"[0-9]+"
    ).unwrap();
}
