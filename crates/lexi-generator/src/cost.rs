use lexi_config::generator::GeneratorConfig;
use serde::{Deserialize, Serialize};

use crate::client::TokenUsage;

/// Share of the limit at which a warning is logged
const WARNING_RATIO: f64 = 0.8;

/// Running token and cost totals across generation runs. Cleared only by
/// [`CostLedger::reset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLedger {
    pub input_cost_per_1k: f64,
    pub output_cost_per_1k: f64,
    pub daily_limit: f64,
    input_tokens: u64,
    output_tokens: u64,
    total_cost: f64,
    call_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub calls: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub average_cost_per_call: f64,
    pub remaining_budget: f64,
}

impl CostLedger {
    pub fn new(input_cost_per_1k: f64, output_cost_per_1k: f64, daily_limit: f64) -> Self {
        Self {
            input_cost_per_1k,
            output_cost_per_1k,
            daily_limit,
            input_tokens: 0,
            output_tokens: 0,
            total_cost: 0.0,
            call_count: 0,
        }
    }

    pub fn from_config(config: &GeneratorConfig, daily_limit: f64) -> Self {
        Self::new(config.input_cost_per_1k, config.output_cost_per_1k, daily_limit)
    }

    pub fn calculate_cost(&self, usage: &TokenUsage) -> f64 {
        let input = (usage.input_tokens as f64 / 1000.0) * self.input_cost_per_1k;
        let output = (usage.output_tokens as f64 / 1000.0) * self.output_cost_per_1k;
        input + output
    }

    /// Add one call's usage, returning that call's cost
    pub fn record(&mut self, usage: &TokenUsage) -> f64 {
        let cost = self.calculate_cost(usage);

        self.input_tokens += usage.input_tokens as u64;
        self.output_tokens += usage.output_tokens as u64;
        self.total_cost += cost;
        self.call_count += 1;

        tracing::info!(
            "Call cost ${:.4}, total ${:.4} of ${:.2}",
            cost,
            self.total_cost,
            self.daily_limit
        );

        if self.total_cost >= self.daily_limit * WARNING_RATIO {
            tracing::warn!(
                "Generation cost ${:.4} is close to the ${:.2} limit",
                self.total_cost,
                self.daily_limit
            );
        }

        cost
    }

    pub fn budget_reached(&self) -> bool {
        self.total_cost >= self.daily_limit
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn report(&self) -> CostReport {
        CostReport {
            calls: self.call_count,
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
            total_tokens: self.total_tokens(),
            total_cost: self.total_cost,
            average_cost_per_call: if self.call_count > 0 {
                self.total_cost / self.call_count as f64
            } else {
                0.0
            },
            remaining_budget: self.daily_limit - self.total_cost,
        }
    }

    /// Clear the totals; pricing and limit stay
    pub fn reset(&mut self) {
        tracing::info!("Cost ledger reset after {} calls", self.call_count);
        self.input_tokens = 0;
        self.output_tokens = 0;
        self.total_cost = 0.0;
        self.call_count = 0;
    }
}

impl Default for CostLedger {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default(), 10.0)
    }
}
