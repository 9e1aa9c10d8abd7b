pub mod entry;
pub mod run;
pub mod tier;

pub use entry::{Candidate, ExampleSentence, PhrasePair, Provenance, WordEntry};
pub use run::{GenerationBatchResult, RunOutcome, RunSummary};
pub use tier::Tier;
