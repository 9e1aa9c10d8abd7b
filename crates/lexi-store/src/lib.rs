use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use lexi_core::normalize_word;
use lexi_types::{Tier, WordEntry};
use serde::Serialize;
use serde_json::json;

mod batch;
pub mod error;
pub mod export;
pub mod file;
pub mod memory;
pub mod notify;

pub use error::StoreError;
pub use export::{ExportDocument, ParsedImport, export_all, import_all, parse_import};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use notify::{ChannelNotifier, Notification, Notifier};

pub const BATCH_ADDED: &str = "batch_added";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AddBatchReport {
    pub added: usize,
    pub duplicates: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    /// Every tier present, zero when empty
    pub by_tier: BTreeMap<Tier, usize>,
}

/// Persistence collaborator for the vocabulary. Implementations deduplicate
/// by normalized word on their own.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WordEntry>, StoreError>;

    async fn add_batch(&self, entries: Vec<WordEntry>) -> Result<AddBatchReport, StoreError>;

    async fn get_by_tier(&self, tier: Tier) -> Result<Vec<WordEntry>, StoreError> {
        let mut entries = self.get_all().await?;
        entries.retain(|e| e.level == tier);
        Ok(entries)
    }

    async fn statistics(&self) -> Result<Statistics, StoreError> {
        let entries = self.get_all().await?;
        let mut by_tier: BTreeMap<Tier, usize> = Tier::ALL.iter().map(|t| (*t, 0)).collect();

        for entry in &entries {
            *by_tier.entry(entry.level).or_default() += 1;
        }

        Ok(Statistics {
            total: entries.len(),
            by_tier,
        })
    }

    /// Normalized words stored more than once, with their counts
    async fn find_duplicates(&self) -> Result<Vec<(String, usize)>, StoreError> {
        let entries = self.get_all().await?;
        let mut counts: HashMap<String, usize> = HashMap::new();

        for entry in &entries {
            *counts.entry(normalize_word(&entry.word)).or_default() += 1;
        }

        let mut duplicates: Vec<_> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
        duplicates.sort();
        Ok(duplicates)
    }
}

pub(crate) fn publish_batch_added(notifier: Option<&dyn Notifier>, report: &AddBatchReport) {
    if report.added == 0 {
        return;
    }

    if let Some(notifier) = notifier {
        notifier.publish(
            BATCH_ADDED,
            json!({
                "added": report.added,
                "duplicates": report.duplicates,
                "errors": report.errors,
            }),
        );
    }
}
