use chrono::Utc;
use kanal::{AsyncReceiver, AsyncSender};
use serde::Serialize;

/// Fire-and-forget side channel telling other views that the vocabulary
/// changed
pub trait Notifier: Send + Sync {
    fn publish(&self, topic: &str, payload: serde_json::Value);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub topic: String,
    pub payload: serde_json::Value,
    pub timestamp: String,
}

/// Delivers notifications over a bounded kanal channel. A full or closed
/// channel drops the message.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: AsyncSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> (Self, AsyncReceiver<Notification>) {
        let (tx, rx) = kanal::bounded_async(capacity);
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn publish(&self, topic: &str, payload: serde_json::Value) {
        let notification = Notification {
            topic: topic.to_string(),
            payload,
            timestamp: Utc::now().to_rfc3339(),
        };

        match self.tx.try_send(notification) {
            Ok(true) => tracing::debug!("Published {}", topic),
            Ok(false) => tracing::warn!("Notification channel full, dropped {}", topic),
            Err(e) => tracing::warn!("Notification channel closed, dropped {}: {}", topic, e),
        }
    }
}
