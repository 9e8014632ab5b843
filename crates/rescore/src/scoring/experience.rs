//! Experience detection: extracts the strongest "years of experience" signal
//! and derives the score band and seniority label from it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::candidate::ExperienceLevel;

/// Matches "7 years", "10+ yrs", "3yr": a number directly followed by a
/// years unit, with an optional trailing "+".
static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*(years?|yrs?)").unwrap());

/// The maximum over all years-shaped mentions in the text, 0 when none parse.
pub fn detected_years(text: &str) -> u32 {
    YEARS_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Score band for detected years against an optional role requirement.
/// Falling short of a present requirement is a flat 40 no matter the gap.
///
/// Bands here (10/5) and the level thresholds below (8/3) are separate
/// ladders on purpose: the band prices depth, the label reads seniority.
pub fn experience_score(detected: u32, required: Option<u32>) -> u32 {
    if let Some(required) = required {
        if detected < required {
            return 40;
        }
    }
    if detected >= 10 {
        100
    } else if detected >= 5 {
        85
    } else {
        60
    }
}

/// Seniority label ladder, independent of the score bands.
pub fn experience_level(detected: u32) -> ExperienceLevel {
    if detected >= 8 {
        ExperienceLevel::Senior
    } else if detected >= 3 {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Junior
    }
}
