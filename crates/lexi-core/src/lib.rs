pub mod backup;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod parser;
pub mod preprocess;
pub mod prompt;

pub use backup::{BackupWord, BackupWords};
pub use classifier::{ClassifierProfile, DifficultyClassifier, TierRule};
pub use error::{FormatIssue, ParseError};
pub use filter::{KnownWords, filter_candidates, filter_candidates_by};
pub use parser::{ParseOutcome, RecoveryStage, parse_response};
pub use preprocess::normalize_word;
pub use prompt::PromptBuilder;
