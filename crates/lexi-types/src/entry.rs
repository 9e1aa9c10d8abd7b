use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// A vocabulary word as stored and shown on a flashcard.
///
/// Field names on the wire follow the exported vocabulary format
/// (`chinese`, `toeic_example`, ...) so that files written by older
/// versions of the tool load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Normalized surface form, unique across the vocabulary
    pub word: String,
    pub level: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, alias = "partOfSpeech", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, rename = "chinese", alias = "translation")]
    pub translation: String,
    #[serde(default, alias = "commonPhrases", skip_serializing_if = "Vec::is_empty")]
    pub common_phrases: Vec<PhrasePair>,
    #[serde(
        default,
        rename = "toeic_example",
        alias = "example",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<ExampleSentence>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub provenance: Provenance,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, level: Tier, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            level,
            phonetic: None,
            part_of_speech: None,
            translation: translation.into(),
            common_phrases: Vec::new(),
            example: None,
            created_at: None,
            provenance: Provenance::default(),
        }
    }
}

/// Manual reclassification history. Owned by the persistence layer; the
/// generator only carries it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_level: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_adjusted: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustment_history: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasePair {
    pub phrase: String,
    #[serde(default, rename = "chinese", alias = "translation")]
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub sentence: String,
    #[serde(default, rename = "chinese", alias = "translation")]
    pub translation: String,
}

/// Loosely-typed entry recovered from generation output. Nothing is
/// guaranteed until it passes the deduplication filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub word: Option<String>,
    pub level: Option<String>,
    pub translation: Option<String>,
    pub phonetic: Option<String>,
    pub part_of_speech: Option<String>,
    pub common_phrases: Vec<PhrasePair>,
    pub example: Option<ExampleSentence>,
}

impl Candidate {
    /// `word`, `level` and `translation` present and non-blank
    pub fn is_complete(&self) -> bool {
        [&self.word, &self.level, &self.translation]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// Materialize an accepted candidate. `word` is the normalized form and
    /// `tier` the requested tier, which wins over whatever the candidate claimed.
    pub fn into_entry(self, word: String, tier: Tier) -> WordEntry {
        WordEntry {
            word,
            level: tier,
            phonetic: self.phonetic,
            part_of_speech: self.part_of_speech,
            translation: self.translation.unwrap_or_default().trim().to_string(),
            common_phrases: self.common_phrases,
            example: self.example,
            created_at: None,
            provenance: Provenance::default(),
        }
    }
}

impl From<WordEntry> for Candidate {
    fn from(entry: WordEntry) -> Self {
        Self {
            word: Some(entry.word),
            level: Some(entry.level.as_str().to_string()),
            translation: Some(entry.translation),
            phonetic: entry.phonetic,
            part_of_speech: entry.part_of_speech,
            common_phrases: entry.common_phrases,
            example: entry.example,
        }
    }
}
