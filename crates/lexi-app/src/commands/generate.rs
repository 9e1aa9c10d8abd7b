use std::sync::Arc;

use anyhow::Context;
use lexi_generator::{OpenAiGenerator, Orchestrator, Progress};
use lexi_types::Tier;
use tokio_util::sync::CancellationToken;

use crate::ledger::{load_ledger, save_ledger};
use crate::state::AppState;

pub async fn handle_generate(
    state: &AppState,
    tier: Tier,
    batch_size: Option<usize>,
    budget: Option<f64>,
) -> anyhow::Result<()> {
    let mut config = state.config.clone();
    if let Some(batch_size) = batch_size {
        config.orchestrator.batch_size = batch_size;
    }
    if let Some(budget) = budget {
        config.orchestrator.daily_budget_usd = budget;
    }

    let ledger_path = state.ledger_path();
    let ledger = load_ledger(&ledger_path, &config)?;
    let backup = Arc::new(lexi_lang_english::backup_words());

    let mut orchestrator =
        Orchestrator::new(&config, state.store.clone(), backup).with_ledger(ledger);

    if config.generator.is_configured() {
        let generator = OpenAiGenerator::from_config(&config.generator);
        orchestrator = orchestrator.with_generator(Arc::new(generator));
    } else {
        tracing::warn!("OPENAI_API_KEY is not set, only backup words will be added");
    }

    let cancel = CancellationToken::new();
    let ctrl_c = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, stopping after the current batch");
                cancel.cancel();
            }
        }
    });

    let result = orchestrator.run(tier, &cancel, report_progress).await;
    ctrl_c.abort();

    // spending so far counts even when the run failed
    save_ledger(&ledger_path, orchestrator.ledger())?;

    let summary = result.with_context(|| format!("Generation for {tier} could not start"))?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report_progress(progress: &Progress) {
    tracing::info!(
        "[{}] batch {}: {}/{} accepted, {} generated, {} remaining, {} consecutive failures",
        progress.tier,
        progress.batch,
        progress.accepted,
        progress.requested,
        progress.generated,
        progress.remaining,
        progress.consecutive_failures
    );
}
