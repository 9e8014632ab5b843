//! Combines the four sub-scores into the bounded total.

use crate::config::AggregateWeights;

/// `floor(skill·w_s + experience·w_x + education·w_e + quality·w_q)`,
/// clamped to 0..=100. Skill may arrive negative when missing mandatory
/// requirements outweigh matches; the clamp absorbs it here rather than in
/// the skill sub-score.
pub fn total_score(
    skill: i32,
    experience: u32,
    education: u32,
    quality: u32,
    weights: &AggregateWeights,
) -> u32 {
    let weighted = f64::from(skill) * weights.skill
        + f64::from(experience) * weights.experience
        + f64::from(education) * weights.education
        + f64::from(quality) * weights.quality;

    (weighted.floor() as i64).clamp(0, 100) as u32
}
