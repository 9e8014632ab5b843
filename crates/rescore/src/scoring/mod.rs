//! Pure per-candidate signal computation. Everything in this module tree is
//! side-effect free and safe to run concurrently across candidates and roles.

pub mod aggregate;
pub mod education;
pub mod experience;
pub mod feedback;
pub mod quality;
pub mod skills;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::candidate::ScoreBreakdown;
use crate::models::role::RoleDefinition;

/// Scores one resume against a role snapshot.
///
/// An absent role short-circuits to a zero total with empty feedback rather
/// than erroring: scoring must never block persistence of a candidate record.
/// The experience level is still derived, since it depends on the text alone.
pub fn score_resume(
    text: &str,
    role: Option<&RoleDefinition>,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let years = experience::detected_years(text);
    let level = experience::experience_level(years);

    let Some(role) = role else {
        return ScoreBreakdown {
            skill: 0,
            experience: 0,
            education: 0,
            quality: 0,
            total: 0,
            detected_years: years,
            experience_level: level,
            feedback: String::new(),
        };
    };

    let skill = skills::skill_score(text, &role.skills);
    let experience = experience::experience_score(years, role.min_experience_years);
    let education = education::education_score(text);
    let quality = quality::quality_score(text, &config.quality);
    let total = aggregate::total_score(skill, experience, education, quality, &config.weights);

    debug!(
        role = %role.name,
        total, skill, experience, education, quality, years,
        "scored resume"
    );

    ScoreBreakdown {
        skill,
        experience,
        education,
        quality,
        total,
        detected_years: years,
        experience_level: level,
        feedback: feedback::feedback(text, role),
    }
}
