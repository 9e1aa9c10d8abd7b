use serde::Serialize;

use crate::entry::WordEntry;
use crate::tier::Tier;

/// Outcome of filtering one batch of candidates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationBatchResult {
    pub accepted: Vec<WordEntry>,
    pub rejected_duplicates: usize,
    pub rejected_incomplete: usize,
}

impl GenerationBatchResult {
    pub fn candidate_count(&self) -> usize {
        self.accepted.len() + self.rejected_duplicates + self.rejected_incomplete
    }
}

/// Why a tier-generation run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Nothing to do, the tier already holds its target count
    AlreadyAtTarget,
    Completed,
    /// Consecutive-failure ceiling reached
    Exhausted,
    BudgetExceeded,
    Cancelled,
}

/// What a run reports back. Partial results are normal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub tier: Tier,
    pub generated_count: usize,
    pub final_count: usize,
    pub target_count: usize,
    pub cost_estimate: f64,
    pub batches: usize,
    pub outcome: RunOutcome,
    pub used_backup: bool,
}
