use lexi_store::WordStore;

use crate::state::AppState;

pub async fn handle_stats(state: &AppState) -> anyhow::Result<()> {
    let stats = state.store.statistics().await?;

    println!("{} words in {}", stats.total, state.store.path().display());
    for (tier, count) in &stats.by_tier {
        let target = state.config.targets.target_for(*tier);
        println!("  {:>8}  {:>5} / {}", tier.as_str(), count, target);
    }

    let duplicates = state.store.find_duplicates().await?;
    if !duplicates.is_empty() {
        tracing::warn!("{} words are stored more than once", duplicates.len());
        for (word, count) in duplicates {
            println!("  duplicate: {word} x{count}");
        }
    }
    Ok(())
}
