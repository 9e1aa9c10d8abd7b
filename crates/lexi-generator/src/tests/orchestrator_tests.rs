use std::sync::Arc;
use std::time::Duration;

use lexi_config::Config;
use lexi_core::{BackupWord, BackupWords};
use lexi_store::{MemoryStore, WordStore};
use lexi_types::{RunOutcome, Tier, WordEntry};
use tokio_util::sync::CancellationToken;

use super::fakes::{Reply, ScriptedGenerator, StalledGenerator, words_payload};
use crate::client::TokenUsage;
use crate::orchestrator::{Orchestrator, Progress};

const TIER: Tier = Tier::From600;

fn config(target: u32) -> Config {
    let mut config = Config::default();
    config.orchestrator.inter_batch_delay_ms = 0;
    config.orchestrator.base_backoff_ms = 0;
    config.targets.set(TIER, target);
    config
}

fn backup() -> Arc<BackupWords> {
    Arc::new(BackupWords::new().with_list(
        TIER,
        vec![
            BackupWord::new("audit", "審計", "noun"),
            BackupWord::new("quota", "配額", "noun"),
            BackupWord::new("merger", "合併", "noun"),
        ],
    ))
}

fn orchestrator(
    config: &Config,
    store: Arc<MemoryStore>,
    generator: Arc<ScriptedGenerator>,
) -> Orchestrator {
    Orchestrator::new(config, store, backup()).with_generator(generator)
}

#[tokio::test]
async fn reaches_remaining_count_in_three_batches() {
    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::FreshWords(5)]));
    let mut orchestrator = orchestrator(&config(12), store.clone(), generator.clone());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.batches, 3);
    assert_eq!(summary.generated_count, 12);
    assert_eq!(summary.final_count, 12);
    assert_eq!(summary.target_count, 12);
    assert!(!summary.used_backup);

    let requests = generator.requests.lock().unwrap();
    let sizes: Vec<u32> = requests.iter().map(|r| r.max_tokens).collect();
    assert_eq!(sizes, vec![750, 750, 300]);
    assert!(requests[2].prompt.starts_with("Generate 2 different"));
    drop(requests);

    let stored = store.get_by_tier(TIER).await.unwrap();
    assert_eq!(stored.len(), 12);
}

#[tokio::test]
async fn unrecoverable_batch_counts_one_failure() {
    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Reply::Text("I'm sorry, I can't do that.".to_string()),
        Reply::FreshWords(5),
    ]));
    let mut orchestrator = orchestrator(&config(5), store, generator);

    let mut seen: Vec<Progress> = Vec::new();
    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |p| seen.push(p.clone()))
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.batches, 2);
    let failures: Vec<u32> = seen.iter().map(|p| p.consecutive_failures).collect();
    assert_eq!(failures, vec![1, 0]);
    // the failure shrank the batch from 5 to 3
    assert_eq!(seen[1].requested, 3);
    assert_eq!(seen[1].generated, 5);
}

#[tokio::test]
async fn endpoint_failures_exhaust_then_fall_back_to_backup() {
    let store = Arc::new(MemoryStore::with_entries(vec![WordEntry::new(
        "audit",
        TIER,
        "審計",
    )]));
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::RateLimited]));
    let mut orchestrator = orchestrator(&config(10), store.clone(), generator.clone());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Exhausted);
    assert_eq!(summary.batches, 3);
    assert_eq!(generator.request_count(), 3);
    assert!(summary.used_backup);
    assert_eq!(summary.generated_count, 2);
    assert_eq!(summary.final_count, 3);

    let words: Vec<String> = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.word)
        .collect();
    assert_eq!(words, vec!["audit", "quota", "merger"]);
}

#[tokio::test]
async fn sparse_batches_keep_their_words_but_count_as_failures() {
    let mut config = config(20);
    config.orchestrator.min_batch_size = 3;

    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::FreshWords(1)]));
    let mut orchestrator = orchestrator(&config, store, generator);

    let mut seen: Vec<Progress> = Vec::new();
    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |p| seen.push(p.clone()))
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Exhausted);
    assert_eq!(summary.generated_count, 3);
    assert!(!summary.used_backup);

    let requested: Vec<usize> = seen.iter().map(|p| p.requested).collect();
    assert_eq!(requested, vec![5, 3, 3]);
}

#[tokio::test]
async fn budget_ceiling_is_a_hard_stop() {
    let mut config = config(20);
    config.orchestrator.daily_budget_usd = 0.002;

    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(
        ScriptedGenerator::new(vec![Reply::FreshWords(5)]).with_usage(TokenUsage::new(1000, 1000)),
    );
    let mut orchestrator = orchestrator(&config, store, generator.clone());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::BudgetExceeded);
    assert_eq!(summary.batches, 1);
    assert_eq!(summary.generated_count, 5);
    assert!((summary.cost_estimate - 0.003).abs() < 1e-9);
    assert_eq!(generator.request_count(), 1);
}

#[tokio::test]
async fn cancelled_before_the_first_batch() {
    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::FreshWords(5)]));
    let mut orchestrator = orchestrator(&config(10), store, generator.clone());

    let cancel = CancellationToken::new();
    cancel.cancel();

    let summary = orchestrator.run(TIER, &cancel, |_| {}).await.unwrap();
    assert_eq!(summary.outcome, RunOutcome::Cancelled);
    assert_eq!(summary.batches, 0);
    assert_eq!(generator.request_count(), 0);
    assert!(!summary.used_backup);
}

#[tokio::test]
async fn cancelling_interrupts_backoff() {
    let mut config = config(10);
    config.orchestrator.base_backoff_ms = 60_000;

    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::RateLimited]));
    let mut orchestrator = orchestrator(&config, store, generator);

    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let summary = tokio::time::timeout(
        Duration::from_secs(5),
        orchestrator.run(TIER, &cancel, move |p| {
            if p.consecutive_failures > 0 {
                token.cancel();
            }
        }),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Cancelled);
    assert_eq!(summary.batches, 1);
}

#[tokio::test]
async fn stalled_call_times_out_as_a_failure() {
    let mut config = config(5);
    config.orchestrator.max_consecutive_failures = 1;

    let store = Arc::new(MemoryStore::new());
    let mut orchestrator = Orchestrator::new(&config, store, Arc::new(BackupWords::new()))
        .with_generator(Arc::new(StalledGenerator))
        .with_call_timeout(Duration::from_millis(20));

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Exhausted);
    assert_eq!(summary.batches, 1);
    assert_eq!(summary.generated_count, 0);
    assert_eq!(orchestrator.ledger().call_count(), 0);
}

#[tokio::test]
async fn without_generator_backup_words_fill_the_tier() {
    let store = Arc::new(MemoryStore::new());
    let mut orchestrator = Orchestrator::new(&config(2), store.clone(), backup());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert!(summary.used_backup);
    assert_eq!(summary.batches, 0);
    assert_eq!(store.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn full_tier_needs_no_requests() {
    let store = Arc::new(MemoryStore::with_entries(vec![
        WordEntry::new("audit", TIER, "審計"),
        WordEntry::new("quota", TIER, "配額"),
    ]));
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::FreshWords(5)]));
    let mut orchestrator = orchestrator(&config(2), store, generator.clone());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::AlreadyAtTarget);
    assert_eq!(summary.final_count, 2);
    assert_eq!(generator.request_count(), 0);
}

#[tokio::test]
async fn avoid_list_carries_existing_and_new_words() {
    let store = Arc::new(MemoryStore::with_entries(vec![WordEntry::new(
        "tariff",
        Tier::From700,
        "關稅",
    )]));
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Reply::Text(words_payload(&["levy", "lease", "ledger"], "600-700")),
        Reply::Text(words_payload(&["Levy", "accrual", "escrow"], "600-700")),
    ]));
    let mut orchestrator = orchestrator(&config(5), store, generator.clone());

    let summary = orchestrator
        .run(TIER, &CancellationToken::new(), |_| {})
        .await
        .unwrap();

    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.generated_count, 5);

    let requests = generator.requests.lock().unwrap();
    assert!(requests[0].prompt.contains("tariff"));
    assert!(requests[1].prompt.contains("ledger"));
}

#[tokio::test]
async fn ledger_spans_runs_until_reset() {
    let mut config = config(5);
    config.targets.set(Tier::From700, 5);

    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(ScriptedGenerator::new(vec![Reply::FreshWords(5)]));
    let mut orchestrator = orchestrator(&config, store, generator);

    orchestrator.run(TIER, &CancellationToken::new(), |_| {}).await.unwrap();
    orchestrator.run(Tier::From700, &CancellationToken::new(), |_| {}).await.unwrap();
    assert_eq!(orchestrator.ledger().call_count(), 2);

    orchestrator.reset_ledger();
    assert_eq!(orchestrator.ledger().call_count(), 0);
}
