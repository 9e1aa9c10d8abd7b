use std::fs;
use std::path::Path;

use anyhow::Context;
use lexi_core::KnownWords;
use lexi_lang_english::LocalImporter;
use lexi_store::WordStore;

use crate::state::AppState;

pub async fn handle_import_list(
    state: &AppState,
    file: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read word list {}", file.display()))?;

    let existing = state.store.get_all().await?;
    let mut known: KnownWords = existing.iter().map(|e| e.word.as_str()).collect();

    let result = LocalImporter::default()
        .import(&content, &mut known)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&result.accepted)?);
        tracing::info!(
            "Dry run: {} would be added, {} duplicates, {} incomplete",
            result.accepted.len(),
            result.rejected_duplicates,
            result.rejected_incomplete
        );
        return Ok(());
    }

    let report = state.store.add_batch(result.accepted).await?;
    println!(
        "Added {} words ({} duplicates, {} errors)",
        report.added,
        report.duplicates + result.rejected_duplicates,
        report.errors + result.rejected_incomplete
    );
    Ok(())
}
