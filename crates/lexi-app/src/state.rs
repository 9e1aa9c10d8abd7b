use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kanal::AsyncReceiver;
use lexi_config::Config;
use lexi_store::{ChannelNotifier, JsonFileStore, Notification};
use tokio::task::JoinHandle;

pub struct AppState {
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    listener: JoinHandle<()>,
}

impl AppState {
    /// Opens the vocabulary file and starts logging its notifications
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (notifier, rx) = ChannelNotifier::new(config.store.notify_capacity);

        let store = JsonFileStore::open(&config.store.path)
            .with_context(|| format!("Failed to open vocabulary {}", config.store.path))?
            .with_notifier(Arc::new(notifier));

        Ok(Self {
            config,
            store: Arc::new(store),
            listener: tokio::spawn(log_notifications(rx)),
        })
    }

    pub fn ledger_path(&self) -> PathBuf {
        PathBuf::from(&self.config.store.ledger_path)
    }

    /// Drop the store so the notification channel closes, then give the
    /// listener a moment to drain it
    pub async fn shutdown(self) {
        drop(self.store);

        if tokio::time::timeout(Duration::from_secs(1), self.listener)
            .await
            .is_err()
        {
            tracing::debug!("Notification listener still running at exit");
        }
    }
}

pub async fn log_notifications(rx: AsyncReceiver<Notification>) {
    while let Ok(notification) = rx.recv().await {
        tracing::info!(
            "[notify] {} {} at {}",
            notification.topic,
            notification.payload,
            notification.timestamp
        );
    }

    tracing::debug!("Notification channel closed");
}
