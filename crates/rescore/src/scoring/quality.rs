//! Structural completeness heuristic: deduct from 100 for each missing
//! contact signal and for very short text, floored at 0.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::QualityPenalties;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").unwrap());

/// Loose phone shape: optional country code, optional parens, 3-3-4 digit
/// grouping with dashes or spaces.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?\d{1,3}[- ]?)?\(?\d{3}\)?[- ]?\d{3}[- ]?\d{4}").unwrap());

/// Runs against the raw (not lowercased) text, since the patterns are
/// case-insensitive where it matters.
pub fn quality_score(raw_text: &str, penalties: &QualityPenalties) -> u32 {
    let mut score: i64 = 100;
    if !EMAIL_PATTERN.is_match(raw_text) {
        score -= i64::from(penalties.missing_email);
    }
    if !PHONE_PATTERN.is_match(raw_text) {
        score -= i64::from(penalties.missing_phone);
    }
    if raw_text.len() < penalties.min_length {
        score -= i64::from(penalties.short_resume);
    }
    score.max(0) as u32
}
