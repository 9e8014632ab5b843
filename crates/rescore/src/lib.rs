//! rescore — resume-to-role scoring and ranking engine.
//!
//! Given extracted resume text and a role's weighted skill requirements, the
//! engine produces a bounded 0–100 fitness score, an experience-level label,
//! and human-readable feedback, then maintains a dense per-role ranking
//! across all candidates attached to that role.
//!
//! PDF-to-text extraction, SQL persistence, file storage, and the HTTP/auth
//! surface are collaborators owned by the surrounding service; this crate
//! consumes plain UTF-8 resume text and a [`RoleDefinition`] snapshot, and
//! talks to persistence only through the [`CandidateStore`] trait.

pub mod config;
pub mod errors;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod store;

pub use config::ScoringConfig;
pub use errors::EngineError;
pub use models::candidate::{CandidateRecord, CandidateScore, ExperienceLevel, ScoreBreakdown};
pub use models::role::{RoleDefinition, SkillRequirement};
pub use ranking::RankingMaintainer;
pub use scoring::score_resume;
pub use store::{CandidateStore, InMemoryStore, RankUpdate};
