use std::fs;
use std::path::Path;

use anyhow::Context;
use lexi_core::parse_response;

pub fn handle_parse(file: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read response {}", file.display()))?;

    let outcome = parse_response(&raw);
    if let Some(stage) = outcome.stage {
        println!("Recovered {} entries via {}", outcome.entries.len(), stage);
    }

    for entry in &outcome.entries {
        println!(
            "  {} [{}] {}",
            entry.word.as_deref().unwrap_or_default(),
            entry.level.as_deref().unwrap_or_default(),
            entry.translation.as_deref().unwrap_or_default()
        );
    }

    if let Some(err) = outcome.error {
        println!("{err}");
    }
    Ok(())
}
