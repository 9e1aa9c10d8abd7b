use std::fs;
use std::path::Path;

use anyhow::Context;
use lexi_config::Config;
use lexi_generator::CostLedger;
use tempfile::NamedTempFile;

/// Running totals from earlier invocations. Prices and the ceiling always
/// come from the current config.
pub fn load_ledger(path: &Path, config: &Config) -> anyhow::Result<CostLedger> {
    let mut ledger = if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cost ledger {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Invalid cost ledger {}", path.display()))?
    } else {
        tracing::debug!("No cost ledger at {}, starting fresh", path.display());
        CostLedger::from_config(&config.generator, config.orchestrator.daily_budget_usd)
    };

    ledger.input_cost_per_1k = config.generator.input_cost_per_1k;
    ledger.output_cost_per_1k = config.generator.output_cost_per_1k;
    ledger.daily_limit = config.orchestrator.daily_budget_usd;

    Ok(ledger)
}

pub fn save_ledger(path: &Path, ledger: &CostLedger) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, ledger)?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write cost ledger {}", path.display()))?;

    tracing::debug!("Saved cost ledger to {}", path.display());
    Ok(())
}
