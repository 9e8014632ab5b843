//! Skill matching — literal whole-word presence detection and the weighted
//! skill sub-score it feeds.

use regex::RegexBuilder;

use crate::models::role::SkillRequirement;

/// Returns true when `skill` occurs in `text` as a whole word, ignoring
/// case. Boundary-anchored so "java" never hits "javascript". An empty or
/// whitespace-only surface never matches.
pub fn skill_in_text(text: &str, skill: &str) -> bool {
    let surface = skill.trim();
    if surface.is_empty() {
        return false;
    }
    let pattern = format!(r"\b{}\b", regex::escape(surface));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// A requirement is present when the primary name or any alias matches.
pub fn requirement_matches(text: &str, req: &SkillRequirement) -> bool {
    skill_in_text(text, &req.name) || req.aliases.iter().any(|alias| skill_in_text(text, alias))
}

/// Weighted skill sub-score.
///
/// Matched requirements contribute their full weight; unmatched mandatory
/// requirements subtract half theirs, so the matched/total ratio can go
/// negative. Zero total weight scores 0 rather than dividing.
pub fn skill_score(text: &str, skills: &[SkillRequirement]) -> i32 {
    let mut matched_weight = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for req in skills {
        total_weight += f64::from(req.weight);
        if requirement_matches(text, req) {
            matched_weight += f64::from(req.weight);
        } else if req.mandatory {
            matched_weight -= f64::from(req.weight) * 0.5;
        }
    }

    if total_weight == 0.0 {
        return 0;
    }
    ((matched_weight / total_weight) * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, aliases: &[&str], weight: u32, mandatory: bool) -> SkillRequirement {
        SkillRequirement {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            weight,
            mandatory,
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(skill_in_text("Experienced Javascript engineer", "javascript"));
        assert!(skill_in_text("worked with PYTHON daily", "Python"));
    }

    #[test]
    fn test_no_partial_substring_hits() {
        assert!(!skill_in_text("five years of javascript", "java"));
        assert!(skill_in_text("five years of java and javascript", "java"));
    }

    #[test]
    fn test_alias_is_equivalent_to_primary_name() {
        let postgres = req("PostgreSQL", &["Postgres"], 5, false);
        assert!(requirement_matches("tuning postgres indexes", &postgres));
        assert!(requirement_matches("tuning PostgreSQL indexes", &postgres));
        assert!(!requirement_matches("tuning mysql indexes", &postgres));
    }

    #[test]
    fn test_empty_surface_never_matches() {
        assert!(!skill_in_text("anything at all", ""));
        assert!(!skill_in_text("anything at all", "   "));
        let blank_alias = req("Rust", &[""], 5, false);
        assert!(!requirement_matches("only c code here", &blank_alias));
    }

    #[test]
    fn test_worked_scenario_rounds_to_67() {
        let skills = vec![req("Python", &[], 10, true), req("Go", &[], 5, false)];
        // mandatory matched, optional absent: 10/15 × 100 rounds to 67
        assert_eq!(skill_score("Python developer", &skills), 67);
    }

    #[test]
    fn test_missing_mandatory_strictly_lowers_score() {
        let skills = vec![req("Python", &[], 10, true), req("Go", &[], 5, false)];
        let with = skill_score("Python and Go services", &skills);
        let without = skill_score("Go services only", &skills);
        assert_eq!(with, 100);
        // 5 − 10·0.5 = 0 matched weight out of 15
        assert_eq!(without, 0);
        assert!(without < with);
    }

    #[test]
    fn test_missing_optional_costs_nothing_extra() {
        let skills = vec![req("Python", &[], 10, false)];
        assert_eq!(skill_score("Go services", &skills), 0);
    }

    #[test]
    fn test_score_can_go_negative() {
        let skills = vec![req("Rust", &[], 10, true)];
        assert_eq!(skill_score("plain prose", &skills), -50);
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        assert_eq!(skill_score("Python everywhere", &[]), 0);
        let weightless = vec![req("Python", &[], 0, true)];
        assert_eq!(skill_score("Python everywhere", &weightless), 0);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let cpp = req("C++", &[], 5, true);
        // '+' is escaped, not treated as a quantifier
        assert!(!requirement_matches("plain C programmer", &cpp));
    }
}
