//! Dense per-role rank maintenance, the only stateful part of the engine.
//!
//! Rank reassignment is a read-all / recompute / write-all cycle over one
//! role's cohort, which is not atomic against a concurrent insert for the
//! same role. Every cohort rewrite therefore runs under a per-role mutex;
//! cohorts for different roles are independent and proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::errors::EngineError;
use crate::models::candidate::CandidateRecord;
use crate::models::role::RoleDefinition;
use crate::scoring::score_resume;
use crate::store::{CandidateStore, RankUpdate};

/// Serializes cohort rewrites per role and keeps ranks dense.
pub struct RankingMaintainer {
    store: Arc<dyn CandidateStore>,
    config: ScoringConfig,
    role_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl RankingMaintainer {
    pub fn new(store: Arc<dyn CandidateStore>, config: ScoringConfig) -> Self {
        Self {
            store,
            config,
            role_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The per-role serialization primitive. Entries are created on first
    /// touch and live for the process lifetime; roles are few.
    async fn role_lock(&self, role_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.role_locks.lock().await;
        locks
            .entry(role_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Persists a freshly scored record, then recomputes the whole cohort's
    /// ranks. Upsert and rerank happen under the same role lock so two
    /// simultaneous submissions to one role cannot interleave.
    pub async fn submit(&self, record: CandidateRecord) -> Result<(), EngineError> {
        let role_id = record.role_id;
        let lock = self.role_lock(role_id).await;
        let _guard = lock.lock().await;

        self.store.upsert(record).await?;
        self.reassign_ranks_locked(role_id).await
    }

    /// Recomputes the stored score for one candidate against a role snapshot,
    /// then reranks the cohort. The caller resolves the role and maps a
    /// missing role to [`EngineError::RoleNotFound`] before calling.
    pub async fn rescore(
        &self,
        candidate_id: Uuid,
        role: &RoleDefinition,
    ) -> Result<CandidateRecord, EngineError> {
        let lock = self.role_lock(role.id).await;
        let _guard = lock.lock().await;

        let Some(mut record) = self.store.get(candidate_id).await? else {
            return Err(EngineError::CandidateNotFound(candidate_id));
        };

        let previous_rank = record.score.rank_in_role;
        let breakdown = score_resume(&record.resume_text, Some(role), &self.config);
        record.score = breakdown.into_score();
        // carried until the reassignment below rewrites it
        record.score.rank_in_role = previous_rank;
        record.updated_at = Utc::now();
        let role_id = record.role_id;

        self.store.upsert(record).await?;
        self.reassign_ranks_locked(role_id).await?;

        self.store
            .get(candidate_id)
            .await?
            .ok_or(EngineError::CandidateNotFound(candidate_id))
    }

    /// Standalone reassignment, also the repair path after an interrupted
    /// write-all left stale ranks behind.
    pub async fn reassign_ranks(&self, role_id: Uuid) -> Result<(), EngineError> {
        let lock = self.role_lock(role_id).await;
        let _guard = lock.lock().await;
        self.reassign_ranks_locked(role_id).await
    }

    /// Caller must hold the role lock.
    async fn reassign_ranks_locked(&self, role_id: Uuid) -> Result<(), EngineError> {
        let mut cohort = self.store.cohort(role_id).await?;

        // Descending score; ties resolve by earliest submission, then by id,
        // so reassignment is deterministic for identical cohorts.
        cohort.sort_by(|a, b| {
            b.score
                .total_score
                .cmp(&a.score.total_score)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        let updates: Vec<RankUpdate> = cohort
            .iter()
            .enumerate()
            .map(|(position, record)| RankUpdate {
                candidate_id: record.id,
                rank: position as u32 + 1,
            })
            .collect();

        debug!(%role_id, cohort_size = updates.len(), "reassigning ranks");
        self.store.save_ranks(&updates).await
    }
}
