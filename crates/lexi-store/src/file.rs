use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use lexi_types::WordEntry;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use crate::batch::merge_batch;
use crate::notify::Notifier;
use crate::{AddBatchReport, StoreError, WordStore, publish_batch_added};

/// Vocabulary persisted as a JSON array. Every change rewrites the file
/// through a temp file in the same directory, so a crash never leaves a
/// half-written vocabulary behind.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<Vec<WordEntry>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            load(&path)?
        } else {
            tracing::info!("No vocabulary at {}, starting empty", path.display());
            Vec::new()
        };

        tracing::info!("Loaded {} words from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
            notifier: None,
        })
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WordStore for JsonFileStore {
    async fn get_all(&self) -> Result<Vec<WordEntry>, StoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn add_batch(&self, batch: Vec<WordEntry>) -> Result<AddBatchReport, StoreError> {
        let report = {
            let mut entries = self.entries.write().await;
            let mut updated = entries.clone();
            let report = merge_batch(&mut updated, batch);

            if report.added > 0 {
                let path = self.path.clone();
                *entries = tokio::task::spawn_blocking(move || {
                    save(&path, &updated)?;
                    Ok::<_, StoreError>(updated)
                })
                .await??;
            }
            report
        };

        publish_batch_added(self.notifier.as_deref(), &report);
        Ok(report)
    }
}

fn load(path: &Path) -> Result<Vec<WordEntry>, StoreError> {
    let data = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&data).map_err(|source| StoreError::Corrupt {
        path: path.display().to_string(),
        source,
    })
}

fn save(path: &Path, entries: &[WordEntry]) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error)?;

    let temp = NamedTempFile::new_in(parent).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush().map_err(io_error)?;
    }

    temp.persist(path).map_err(|e| io_error(e.error))?;
    tracing::debug!("Saved {} words to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_types::Tier;

    #[tokio::test]
    async fn survives_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.json");

        let store = JsonFileStore::open(&path).unwrap();
        let report = store
            .add_batch(vec![
                WordEntry::new("audit", Tier::From600, "審計"),
                WordEntry::new("quota", Tier::From700, "配額"),
            ])
            .await
            .unwrap();
        assert_eq!(report.added, 2);

        let reopened = JsonFileStore::open(&path).unwrap();
        let words = reopened.get_all().await.unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "audit");
        assert_eq!(words[1].level, Tier::From700);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_batches_all_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let store = Arc::new(JsonFileStore::open(&path).unwrap());

        let tasks: Vec<_> = ["audit", "quota", "merger", "tariff"]
            .into_iter()
            .map(|word| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add_batch(vec![WordEntry::new(word, Tier::From700, "x")])
                        .await
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap().added, 1);
        }

        let mut words: Vec<_> = JsonFileStore::open(&path)
            .unwrap()
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        words.sort();
        assert_eq!(words, vec!["audit", "merger", "quota", "tariff"]);
    }

    #[tokio::test]
    async fn legacy_file_with_provenance_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(
            &path,
            r#"[{"word":"memo","level":"300以下","chinese":"備忘錄","user_adjusted":true,
                "original_level":"300-500","adjustment_history":[{"from":"300-500","to":"300以下"}]}]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        store
            .add_batch(vec![WordEntry::new("lease", Tier::From300, "租賃")])
            .await
            .unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(value[0]["level"], "<300");
        assert_eq!(value[0]["adjustment_history"][0]["to"], "300以下");
        assert_eq!(value[1]["chinese"], "租賃");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }
}
