use thiserror::Error;
use uuid::Uuid;

/// Engine-level error type. Signal computation never fails — malformed input
/// degrades to neutral defaults — so errors arise only at the store boundary
/// and from unknown entity ids.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Job role {0} not found")]
    RoleNotFound(Uuid),

    #[error("Candidate {0} not found")]
    CandidateNotFound(Uuid),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
