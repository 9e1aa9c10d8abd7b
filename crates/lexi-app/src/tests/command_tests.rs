use std::path::Path;

use lexi_config::Config;
use lexi_store::WordStore;
use lexi_types::Tier;
use tempfile::TempDir;

use crate::commands::cost::handle_cost;
use crate::commands::generate::handle_generate;
use crate::commands::import_list::handle_import_list;
use crate::commands::transfer::{handle_export, handle_import_json};
use crate::state::AppState;

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.store.path = dir.join("words.json").to_string_lossy().into_owned();
    config.store.ledger_path = dir.join("cost.json").to_string_lossy().into_owned();
    config.orchestrator.inter_batch_delay_ms = 0;
    config.orchestrator.base_backoff_ms = 0;
    config
}

async fn state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(config_in(dir.path())).unwrap();
    (dir, state)
}

#[tokio::test]
async fn generate_without_api_key_uses_backup_words() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.targets.set(Tier::From500, 4);
    let state = AppState::new(config).unwrap();

    handle_generate(&state, Tier::From500, None, None).await.unwrap();

    let stored = state.store.get_by_tier(Tier::From500).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0].word, "negotiate");
    assert!(dir.path().join("words.json").exists());
    assert!(dir.path().join("cost.json").exists());
}

#[tokio::test]
async fn import_list_dry_run_stores_nothing() {
    let (dir, state) = state().await;
    let list = dir.path().join("list.txt");
    std::fs::write(&list, "1. abandon v 放棄\n2. ability n 能力\n").unwrap();

    handle_import_list(&state, &list, true).await.unwrap();
    assert!(state.store.get_all().await.unwrap().is_empty());

    handle_import_list(&state, &list, false).await.unwrap();
    let words: Vec<String> = state
        .store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.word)
        .collect();
    assert_eq!(words, vec!["abandon", "ability"]);

    // second import finds only duplicates
    handle_import_list(&state, &list, false).await.unwrap();
    assert_eq!(state.store.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn export_then_import_into_a_fresh_store() {
    let (dir, app) = state().await;
    let list = dir.path().join("list.txt");
    std::fs::write(&list, "1. budget n 預算\n2. invoice n 發票\n").unwrap();
    handle_import_list(&app, &list, false).await.unwrap();

    let out = dir.path().join("export.json");
    handle_export(&app, Some(&out)).await.unwrap();

    let (_other_dir, other) = state().await;
    handle_import_json(&other, &out).await.unwrap();
    assert_eq!(other.store.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn cost_reset_writes_an_empty_ledger() {
    let (dir, state) = state().await;
    handle_cost(&state, true).unwrap();

    let saved = std::fs::read_to_string(dir.path().join("cost.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["call_count"], 0);
}
