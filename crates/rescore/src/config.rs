use serde::{Deserialize, Serialize};

/// Relative contribution of each sub-score to the total. The canonical
/// policy is 0.6 skill / 0.2 experience / 0.1 education / 0.1 quality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
    pub quality: f64,
}

impl Default for AggregateWeights {
    fn default() -> Self {
        Self {
            skill: 0.6,
            experience: 0.2,
            education: 0.1,
            quality: 0.1,
        }
    }
}

/// Deductions applied by the quality assessor, starting from 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityPenalties {
    pub missing_email: u32,
    pub missing_phone: u32,
    pub short_resume: u32,
    /// Byte length below which a resume counts as short.
    pub min_length: usize,
}

impl Default for QualityPenalties {
    fn default() -> Self {
        Self {
            missing_email: 30,
            missing_phone: 30,
            short_resume: 20,
            min_length: 500,
        }
    }
}

/// Full scoring policy. `Default` is the production policy; tests swap in
/// alternatives without touching the matching logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: AggregateWeights,
    pub quality: QualityPenalties,
}
