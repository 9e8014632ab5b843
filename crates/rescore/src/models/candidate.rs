use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse seniority label derived from the strongest years-of-experience
/// signal in the resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Senior / Lead")]
    Senior,
    #[serde(rename = "Mid-Level")]
    Mid,
    #[serde(rename = "Junior / Entry-Level")]
    Junior,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExperienceLevel::Senior => "Senior / Lead",
            ExperienceLevel::Mid => "Mid-Level",
            ExperienceLevel::Junior => "Junior / Entry-Level",
        })
    }
}

/// Full per-component output of one scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// May go negative when missing mandatory skills outweigh matches; the
    /// aggregate clamp absorbs it.
    pub skill: i32,
    pub experience: u32,
    pub education: u32,
    pub quality: u32,
    /// Clamped to 0..=100.
    pub total: u32,
    pub detected_years: u32,
    pub experience_level: ExperienceLevel,
    pub feedback: String,
}

impl ScoreBreakdown {
    /// Collapses the breakdown into the externally surfaced score. Rank is
    /// assigned later by the ranking maintainer.
    pub fn into_score(self) -> CandidateScore {
        CandidateScore {
            total_score: self.total,
            experience_level: self.experience_level,
            feedback: self.feedback,
            rank_in_role: None,
        }
    }
}

/// What the presentation layer sees for one candidate in one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub total_score: u32,
    pub experience_level: ExperienceLevel,
    pub feedback: String,
    /// Dense 1-based rank within the role cohort, unique per role. Assigned
    /// only by rank reassignment; `None` until the first pass runs.
    pub rank_in_role: Option<u32>,
}

/// One candidate's stored row, the unit rank reassignment reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    pub role_id: Uuid,
    pub name: String,
    pub email: String,
    /// Plain UTF-8 text from the extraction collaborator, kept for rescoring.
    pub resume_text: String,
    pub score: CandidateScore,
    /// Tie-break key during ranking: earlier submission outranks later at
    /// equal score.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
