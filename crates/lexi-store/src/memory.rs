use std::sync::Arc;

use async_trait::async_trait;
use lexi_types::WordEntry;
use tokio::sync::RwLock;

use crate::batch::merge_batch;
use crate::notify::Notifier;
use crate::{AddBatchReport, StoreError, WordStore, publish_batch_added};

/// Vocabulary held only in memory
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<WordEntry>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WordEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<WordEntry>, StoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn add_batch(&self, batch: Vec<WordEntry>) -> Result<AddBatchReport, StoreError> {
        let report = {
            let mut entries = self.entries.write().await;
            merge_batch(&mut entries, batch)
        };

        publish_batch_added(self.notifier.as_deref(), &report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ChannelNotifier;
    use lexi_types::Tier;

    #[tokio::test]
    async fn add_batch_notifies_only_when_something_was_added() {
        let (notifier, rx) = ChannelNotifier::new(8);
        let store = MemoryStore::new().with_notifier(Arc::new(notifier));

        let batch = vec![
            WordEntry::new("audit", Tier::From600, "審計"),
            WordEntry::new("merger", Tier::From700, "合併"),
        ];
        let report = store.add_batch(batch.clone()).await.unwrap();
        assert_eq!(report.added, 2);

        let again = store.add_batch(batch).await.unwrap();
        assert_eq!(again.duplicates, 2);

        let notification = rx.recv().await.unwrap();
        assert_eq!(notification.topic, "batch_added");
        assert_eq!(notification.payload["added"], 2);
        assert!(rx.is_empty());
    }

    #[tokio::test]
    async fn statistics_and_tier_lookup() {
        let store = MemoryStore::with_entries(vec![
            WordEntry::new("audit", Tier::From600, "審計"),
            WordEntry::new("quota", Tier::From600, "配額"),
            WordEntry::new("merger", Tier::From700, "合併"),
        ]);

        let stats = store.statistics().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_tier.get(&Tier::From600), Some(&2));
        assert_eq!(stats.by_tier.get(&Tier::Below300), Some(&0));

        let tier = store.get_by_tier(Tier::From700).await.unwrap();
        assert_eq!(tier.len(), 1);
    }

    #[tokio::test]
    async fn finds_duplicates_left_by_older_data() {
        let store = MemoryStore::with_entries(vec![
            WordEntry::new("audit", Tier::From600, "審計"),
            WordEntry::new("Audit", Tier::From500, "審計"),
            WordEntry::new("merger", Tier::From700, "合併"),
        ]);

        assert_eq!(
            store.find_duplicates().await.unwrap(),
            vec![("audit".to_string(), 2)]
        );
    }
}
