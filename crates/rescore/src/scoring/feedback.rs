//! Short natural-language explanation of a score: a critical-missing-skills
//! line when any mandatory requirement fails the matcher, then the
//! experience level. Reuses the same matcher as scoring, so a skill credited
//! via an alias is never reported missing.

use crate::models::role::RoleDefinition;
use crate::scoring::{experience, skills};

pub fn feedback(text: &str, role: &RoleDefinition) -> String {
    let missing: Vec<&str> = role
        .skills
        .iter()
        .filter(|req| req.mandatory && !skills::requirement_matches(text, req))
        .map(|req| req.name.as_str())
        .collect();

    let mut out = String::new();
    if !missing.is_empty() {
        out.push_str("CRITICAL MISSING SKILLS: ");
        out.push_str(&missing.join(", "));
        out.push_str("\n\n");
    }

    let level = experience::experience_level(experience::detected_years(text));
    out.push_str(&format!("EXPERIENCE: {level}"));
    out
}
