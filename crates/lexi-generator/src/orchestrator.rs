use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use lexi_config::Config;
use lexi_config::generator::GeneratorConfig;
use lexi_config::orchestrator::OrchestratorConfig;
use lexi_config::targets::TargetsConfig;
use lexi_core::{
    BackupWords, KnownWords, ParseError, PromptBuilder, filter_candidates, parse_response,
};
use lexi_store::{StoreError, WordStore};
use lexi_types::{RunOutcome, RunSummary, Tier, WordEntry};
use tokio_util::sync::CancellationToken;

use crate::client::{GenerateError, GenerationRequest, TextGenerator};
use crate::cost::CostLedger;

/// Where a tier-generation run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    LoadingExisting,
    RequestingBatch,
    ParsingResponse,
    Filtering,
    Persisting,
    Backoff,
    Exhausted,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::LoadingExisting => "loading existing",
            RunState::RequestingBatch => "requesting batch",
            RunState::ParsingResponse => "parsing response",
            RunState::Filtering => "filtering",
            RunState::Persisting => "persisting",
            RunState::Backoff => "backoff",
            RunState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Reported to the caller after every batch
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub tier: Tier,
    pub batch: usize,
    pub requested: usize,
    pub accepted: usize,
    pub generated: usize,
    pub remaining: usize,
    pub consecutive_failures: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to load existing vocabulary: {0}")]
    LoadExisting(#[source] StoreError),
}

/// Why a batch counted against the consecutive-failure limit
#[derive(Debug, thiserror::Error)]
enum BatchFailure {
    #[error("endpoint failure: {0}")]
    Endpoint(#[from] GenerateError),

    #[error("{0}")]
    Format(#[from] ParseError),

    #[error("only {accepted} of {requested} words were usable")]
    Sparse { accepted: usize, requested: usize },

    #[error("could not persist accepted words: {0}")]
    Persist(#[from] StoreError),
}

/// Per-run working state
struct RunContext {
    tier: Tier,
    known: KnownWords,
    /// Most recent first
    recent: VecDeque<String>,
    remaining: usize,
    generated: usize,
    batches: usize,
}

impl RunContext {
    fn still_needed(&self) -> usize {
        self.remaining.saturating_sub(self.generated)
    }

    fn remember(&mut self, accepted: &[WordEntry], window: usize) {
        for entry in accepted {
            self.recent.push_front(entry.word.clone());
        }
        self.recent.truncate(window);
    }
}

/// Drives batch requests toward a tier's target count
pub struct Orchestrator {
    generator: Option<Arc<dyn TextGenerator>>,
    store: Arc<dyn WordStore>,
    backup: Arc<BackupWords>,
    prompts: PromptBuilder,
    config: OrchestratorConfig,
    generator_config: GeneratorConfig,
    targets: TargetsConfig,
    call_timeout: Duration,
    ledger: CostLedger,
}

impl Orchestrator {
    pub fn new(config: &Config, store: Arc<dyn WordStore>, backup: Arc<BackupWords>) -> Self {
        Self {
            generator: None,
            store,
            backup,
            prompts: PromptBuilder::new(config.orchestrator.avoid_list_limit),
            config: config.orchestrator.clone(),
            generator_config: config.generator.clone(),
            targets: config.targets.clone(),
            call_timeout: Duration::from_secs(config.generator.request_timeout_seconds),
            ledger: CostLedger::from_config(
                &config.generator,
                config.orchestrator.daily_budget_usd,
            ),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Continue from a ledger carried over from earlier runs
    pub fn with_ledger(mut self, ledger: CostLedger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    pub fn reset_ledger(&mut self) {
        self.ledger.reset();
    }

    fn enter(&self, tier: Tier, state: RunState) {
        tracing::debug!("[{}] {}", tier, state);
    }

    /// Generate words for `tier` until its target is met, the failure
    /// ceiling or budget is hit, or `cancel` fires. Partial results are
    /// persisted and reported; only an unreadable store is an error.
    pub async fn run<F>(
        &mut self,
        tier: Tier,
        cancel: &CancellationToken,
        mut progress: F,
    ) -> Result<RunSummary, RunError>
    where
        F: FnMut(&Progress),
    {
        self.enter(tier, RunState::LoadingExisting);
        let existing = self.store.get_all().await.map_err(RunError::LoadExisting)?;

        let current = existing.iter().filter(|e| e.level == tier).count();
        let target = self.targets.target_for(tier) as usize;

        let mut ctx = RunContext {
            tier,
            known: existing.iter().map(|e| e.word.as_str()).collect(),
            recent: existing
                .iter()
                .rev()
                .take(self.config.recent_window)
                .map(|e| e.word.clone())
                .collect(),
            remaining: target.saturating_sub(current),
            generated: 0,
            batches: 0,
        };
        drop(existing);

        tracing::info!(
            "{}: {}/{} words, {} to generate",
            tier,
            current,
            target,
            ctx.remaining
        );

        if ctx.remaining == 0 {
            self.enter(tier, RunState::Idle);
            return Ok(self.summary(&ctx, current, target, RunOutcome::AlreadyAtTarget, false));
        }

        let mut outcome = match self.generator.clone() {
            Some(generator) => {
                self.batch_loop(generator.as_ref(), &mut ctx, cancel, &mut progress)
                    .await
            }
            None => {
                tracing::warn!("No generator configured, using backup words for {}", tier);
                RunOutcome::Exhausted
            }
        };

        let mut used_backup = false;
        if outcome == RunOutcome::Exhausted && ctx.generated == 0 {
            used_backup = true;
            self.fill_from_backup(&mut ctx).await;
            if ctx.still_needed() == 0 {
                outcome = RunOutcome::Completed;
            }
        }

        self.enter(tier, RunState::Idle);
        let summary = self.summary(&ctx, current, target, outcome, used_backup);
        tracing::info!(
            "{} run finished ({:?}): {} generated, {}/{} words, ${:.4} spent",
            tier,
            summary.outcome,
            summary.generated_count,
            summary.final_count,
            summary.target_count,
            summary.cost_estimate
        );
        Ok(summary)
    }

    async fn batch_loop<F>(
        &mut self,
        generator: &dyn TextGenerator,
        ctx: &mut RunContext,
        cancel: &CancellationToken,
        progress: &mut F,
    ) -> RunOutcome
    where
        F: FnMut(&Progress),
    {
        let mut batch_size = self.config.batch_size.max(1);
        let min_batch_size = self.config.min_batch_size.clamp(1, batch_size);
        let max_failures = self.config.max_consecutive_failures.max(1);
        let max_batches = ctx.remaining.div_ceil(batch_size) + max_failures as usize + 2;
        let mut failures: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                tracing::info!("{} run cancelled", ctx.tier);
                return RunOutcome::Cancelled;
            }

            if ctx.still_needed() == 0 {
                return RunOutcome::Completed;
            }

            if self.ledger.budget_reached() {
                tracing::warn!(
                    "Budget of ${:.2} reached, stopping {} run",
                    self.ledger.daily_limit,
                    ctx.tier
                );
                return RunOutcome::BudgetExceeded;
            }

            if ctx.batches >= max_batches {
                tracing::warn!("{} run hit the cap of {} batches", ctx.tier, max_batches);
                self.enter(ctx.tier, RunState::Exhausted);
                return RunOutcome::Exhausted;
            }

            ctx.batches += 1;
            let requested = batch_size.min(ctx.still_needed());

            let accepted = match self.run_batch(generator, ctx, requested).await {
                Ok(accepted) if accepted * 2 >= requested => Ok(accepted),
                Ok(accepted) => Err((accepted, BatchFailure::Sparse { accepted, requested })),
                Err(failure) => Err((0, failure)),
            };

            match accepted {
                Ok(accepted) => {
                    failures = 0;
                    progress(&self.progress(ctx, requested, accepted, failures));

                    if ctx.still_needed() > 0
                        && !self.pause(self.config.inter_batch_delay(), cancel).await
                    {
                        return RunOutcome::Cancelled;
                    }
                }
                Err((accepted, failure)) => {
                    failures += 1;
                    tracing::warn!(
                        "Batch {} for {} failed ({}/{}): {}",
                        ctx.batches,
                        ctx.tier,
                        failures,
                        max_failures,
                        failure
                    );
                    progress(&self.progress(ctx, requested, accepted, failures));

                    if failures >= max_failures {
                        tracing::error!(
                            "{} consecutive failures, giving up on {}",
                            failures,
                            ctx.tier
                        );
                        self.enter(ctx.tier, RunState::Exhausted);
                        return RunOutcome::Exhausted;
                    }

                    batch_size = (batch_size * 7 / 10).max(min_batch_size);
                    self.enter(ctx.tier, RunState::Backoff);
                    if !self.pause(self.config.backoff(failures), cancel).await {
                        return RunOutcome::Cancelled;
                    }
                }
            }
        }
    }

    /// One request/parse/filter/persist cycle. Returns how many words were
    /// stored.
    async fn run_batch(
        &mut self,
        generator: &dyn TextGenerator,
        ctx: &mut RunContext,
        requested: usize,
    ) -> Result<usize, BatchFailure> {
        self.enter(ctx.tier, RunState::RequestingBatch);

        let avoid = self.prompts.avoid_list(ctx.recent.iter().map(String::as_str));
        let request = GenerationRequest {
            system: self.prompts.system_prompt().to_string(),
            prompt: self.prompts.build(ctx.tier, requested, &avoid),
            temperature: self.generator_config.temperature,
            max_tokens: self.generator_config.max_tokens_for(requested),
        };

        tracing::info!(
            "Batch {}: requesting {} {} words",
            ctx.batches,
            requested,
            ctx.tier
        );

        let response = tokio::time::timeout(self.call_timeout, generator.generate(&request))
            .await
            .map_err(|_| GenerateError::Timeout(self.call_timeout))??;

        self.ledger.record(&response.usage);

        self.enter(ctx.tier, RunState::ParsingResponse);
        let candidates = parse_response(&response.text).into_result()?;

        self.enter(ctx.tier, RunState::Filtering);
        let mut result = filter_candidates(candidates, &mut ctx.known, ctx.tier);
        tracing::info!(
            "Batch {}: {} accepted, {} duplicates, {} incomplete",
            ctx.batches,
            result.accepted.len(),
            result.rejected_duplicates,
            result.rejected_incomplete
        );

        result.accepted.truncate(ctx.still_needed());
        if result.accepted.is_empty() {
            return Ok(0);
        }

        self.enter(ctx.tier, RunState::Persisting);
        let report = self.store.add_batch(result.accepted.clone()).await?;
        ctx.remember(&result.accepted, self.config.recent_window);
        ctx.generated += report.added;

        Ok(report.added)
    }

    async fn fill_from_backup(&mut self, ctx: &mut RunContext) {
        let candidates = self.backup.candidates_for(ctx.tier);
        if candidates.is_empty() {
            tracing::warn!("No backup words available for {}", ctx.tier);
            return;
        }

        let mut result = filter_candidates(candidates, &mut ctx.known, ctx.tier);
        result.accepted.truncate(ctx.still_needed());
        if result.accepted.is_empty() {
            tracing::info!("Every backup word for {} is already known", ctx.tier);
            return;
        }

        self.enter(ctx.tier, RunState::Persisting);
        match self.store.add_batch(result.accepted).await {
            Ok(report) => {
                tracing::info!("Added {} backup words to {}", report.added, ctx.tier);
                ctx.generated += report.added;
            }
            Err(e) => tracing::error!("Failed to store backup words for {}: {}", ctx.tier, e),
        }
    }

    /// Sleep unless cancelled first; `false` means cancelled
    async fn pause(&self, delay: Duration, cancel: &CancellationToken) -> bool {
        if delay.is_zero() {
            return !cancel.is_cancelled();
        }

        tokio::select! {
            _ = cancel.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        }
    }

    fn progress(
        &self,
        ctx: &RunContext,
        requested: usize,
        accepted: usize,
        consecutive_failures: u32,
    ) -> Progress {
        Progress {
            tier: ctx.tier,
            batch: ctx.batches,
            requested,
            accepted,
            generated: ctx.generated,
            remaining: ctx.still_needed(),
            consecutive_failures,
        }
    }

    fn summary(
        &self,
        ctx: &RunContext,
        current: usize,
        target: usize,
        outcome: RunOutcome,
        used_backup: bool,
    ) -> RunSummary {
        RunSummary {
            tier: ctx.tier,
            generated_count: ctx.generated,
            final_count: current + ctx.generated,
            target_count: target,
            cost_estimate: self.ledger.total_cost(),
            batches: ctx.batches,
            outcome,
            used_backup,
        }
    }
}
