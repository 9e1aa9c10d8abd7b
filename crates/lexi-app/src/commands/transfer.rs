use std::fs;
use std::path::Path;

use anyhow::Context;
use lexi_store::{export_all, import_all};

use crate::state::AppState;

pub async fn handle_export(state: &AppState, out: Option<&Path>) -> anyhow::Result<()> {
    let document = export_all(state.store.as_ref()).await?;
    let json = serde_json::to_string_pretty(&document)?;

    match out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write export {}", path.display()))?;
            println!("Exported {} words to {}", document.total_words, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub async fn handle_import_json(state: &AppState, file: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read export {}", file.display()))?;

    let report = import_all(state.store.as_ref(), &text)
        .await
        .with_context(|| format!("Failed to import {}", file.display()))?;

    println!(
        "Imported {} words ({} duplicates, {} errors)",
        report.added, report.duplicates, report.errors
    );
    Ok(())
}
