use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named competency with a relative importance weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub name: String,
    /// Alternate surface forms accepted as evidence ("PostgreSQL" → "Postgres").
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Positive relative weight within the role's skill list.
    pub weight: u32,
    /// Missing mandatory skills are penalized and called out in feedback.
    #[serde(default)]
    pub mandatory: bool,
}

/// Snapshot of a role as provided by the role-management collaborator.
/// Skill order is irrelevant to scoring but preserved for feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub min_experience_years: Option<u32>,
    #[serde(default)]
    pub skills: Vec<SkillRequirement>,
}
