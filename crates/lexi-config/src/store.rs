use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "lexi-words.json".to_string()
}

fn default_ledger_path() -> String {
    "lexi-cost.json".to_string()
}

fn default_notify_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Vocabulary file
    #[serde(default = "default_path")]
    pub path: String,
    /// Running cost totals kept between invocations
    #[serde(default = "default_ledger_path")]
    pub ledger_path: String,
    /// Buffered cross-view notifications before new ones are dropped
    #[serde(default = "default_notify_capacity")]
    pub notify_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            ledger_path: default_ledger_path(),
            notify_capacity: default_notify_capacity(),
        }
    }
}
