//! Persistence seam for candidate records. The real backend belongs to the
//! surrounding service; [`InMemoryStore`] is the reference implementation
//! used by tests and single-process deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::candidate::CandidateRecord;

/// One (candidate, rank) assignment produced by rank reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankUpdate {
    pub candidate_id: Uuid,
    pub rank: u32,
}

/// Carried as `Arc<dyn CandidateStore>` so backends swap without touching
/// the ranking logic.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// All candidates currently attached to the role, in no particular order.
    async fn cohort(&self, role_id: Uuid) -> Result<Vec<CandidateRecord>, EngineError>;

    async fn get(&self, candidate_id: Uuid) -> Result<Option<CandidateRecord>, EngineError>;

    /// Inserts or fully replaces one record.
    async fn upsert(&self, record: CandidateRecord) -> Result<(), EngineError>;

    /// Writes recomputed ranks for an entire cohort in one pass. Unknown ids
    /// are skipped: a record deleted mid-cycle is repaired by the next
    /// reassignment, not a fault.
    async fn save_ranks(&self, updates: &[RankUpdate]) -> Result<(), EngineError>;
}

/// Tokio-synchronized map store.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<Uuid, CandidateRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for InMemoryStore {
    async fn cohort(&self, role_id: Uuid) -> Result<Vec<CandidateRecord>, EngineError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.role_id == role_id)
            .cloned()
            .collect())
    }

    async fn get(&self, candidate_id: Uuid) -> Result<Option<CandidateRecord>, EngineError> {
        Ok(self.records.read().await.get(&candidate_id).cloned())
    }

    async fn upsert(&self, record: CandidateRecord) -> Result<(), EngineError> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn save_ranks(&self, updates: &[RankUpdate]) -> Result<(), EngineError> {
        let mut records = self.records.write().await;
        for update in updates {
            if let Some(record) = records.get_mut(&update.candidate_id) {
                record.score.rank_in_role = Some(update.rank);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{CandidateScore, ExperienceLevel};
    use chrono::Utc;

    fn make_record(role_id: Uuid, total: u32) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            role_id,
            name: "Test Candidate".to_string(),
            email: "test@example.com".to_string(),
            resume_text: String::new(),
            score: CandidateScore {
                total_score: total,
                experience_level: ExperienceLevel::Junior,
                feedback: String::new(),
                rank_in_role: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_cohort_filters_by_role() {
        let store = InMemoryStore::new();
        let role_a = Uuid::new_v4();
        let role_b = Uuid::new_v4();
        store.upsert(make_record(role_a, 50)).await.unwrap();
        store.upsert(make_record(role_a, 60)).await.unwrap();
        store.upsert(make_record(role_b, 70)).await.unwrap();

        assert_eq!(store.cohort(role_a).await.unwrap().len(), 2);
        assert_eq!(store.cohort(role_b).await.unwrap().len(), 1);
        assert!(store.cohort(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_record() {
        let store = InMemoryStore::new();
        let mut record = make_record(Uuid::new_v4(), 50);
        let id = record.id;
        store.upsert(record.clone()).await.unwrap();

        record.score.total_score = 90;
        store.upsert(record).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.score.total_score, 90);
    }

    #[tokio::test]
    async fn test_save_ranks_skips_unknown_ids() {
        let store = InMemoryStore::new();
        let record = make_record(Uuid::new_v4(), 50);
        let id = record.id;
        store.upsert(record).await.unwrap();

        let updates = vec![
            RankUpdate { candidate_id: id, rank: 1 },
            RankUpdate { candidate_id: Uuid::new_v4(), rank: 2 },
        ];
        store.save_ranks(&updates).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.score.rank_in_role, Some(1));
    }
}
