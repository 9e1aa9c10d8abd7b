#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Vocabulary file {path} is not valid: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Background write failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid import document: {0}")]
    InvalidImport(String),
}
