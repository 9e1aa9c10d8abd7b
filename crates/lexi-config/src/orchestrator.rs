use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_batch_size() -> usize {
    5
}

fn default_min_batch_size() -> usize {
    2
}

fn default_max_consecutive_failures() -> u32 {
    3
}

fn default_base_backoff_ms() -> u64 {
    1000
}

fn default_inter_batch_delay_ms() -> u64 {
    2000
}

fn default_avoid_list_limit() -> usize {
    30
}

fn default_recent_window() -> usize {
    50
}

fn default_daily_budget_usd() -> f64 {
    10.0
}

/// Batch loop tuning
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OrchestratorConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Floor for the batch size after failures shrink it
    #[serde(default = "default_min_batch_size")]
    pub min_batch_size: usize,
    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,
    /// Backoff after the n-th consecutive failure is `n * base_backoff_ms`
    #[serde(default = "default_base_backoff_ms")]
    pub base_backoff_ms: u64,
    /// Pause between successful batches (rate limiting)
    #[serde(default = "default_inter_batch_delay_ms")]
    pub inter_batch_delay_ms: u64,
    #[serde(default = "default_avoid_list_limit")]
    pub avoid_list_limit: usize,
    /// How many of the most recently stored words feed the avoid-list
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
    /// Cost ceiling in USD; reaching it stops further requests
    #[serde(default = "default_daily_budget_usd")]
    pub daily_budget_usd: f64,
}

impl OrchestratorConfig {
    pub fn backoff(&self, consecutive_failures: u32) -> Duration {
        Duration::from_millis(self.base_backoff_ms.saturating_mul(consecutive_failures as u64))
    }

    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            min_batch_size: default_min_batch_size(),
            max_consecutive_failures: default_max_consecutive_failures(),
            base_backoff_ms: default_base_backoff_ms(),
            inter_batch_delay_ms: default_inter_batch_delay_ms(),
            avoid_list_limit: default_avoid_list_limit(),
            recent_window: default_recent_window(),
            daily_budget_usd: default_daily_budget_usd(),
        }
    }
}
