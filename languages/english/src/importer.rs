use lazy_static::lazy_static;
use lexi_core::{DifficultyClassifier, KnownWords, filter_candidates_by};
use lexi_types::{Candidate, GenerationBatchResult, Tier};
use regex::Regex;

use crate::examples::{common_phrases, example_sentence};
use crate::keywords::toeic_profile;
use crate::phonetic::approximate_phonetic;

const MAX_TRANSLATION_CHARS: usize = 50;

lazy_static! {
    static ref ENTRY_START: Regex = Regex::new(r"\d+\.").unwrap();
    static ref ENTRY: Regex =
        Regex::new(r"^(\d+)\.\s+([a-zA-Z-]+)\s+([a-z]+(?:\s+[a-z]+)*)\s+([^0-9]+)$").unwrap();
    static ref POS_BREAK: Regex = Regex::new(r"\s+[a-z]+\s+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Word list is empty")]
    Empty,

    #[error("No numbered entries like `12. negotiate v 談判` found")]
    NoEntries,
}

/// One numbered line of a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedWord {
    pub index: u32,
    pub word: String,
    pub part_of_speech: String,
    pub translation: String,
}

/// Parse a numbered vocabulary list (`12. negotiate v 談判；協商`). Entries
/// may span lines or share one; only the first part of speech and its
/// translation are kept.
pub fn parse_word_list(content: &str) -> Result<Vec<ListedWord>, ImportError> {
    let content = content.replace('\r', "");
    if content.trim().is_empty() {
        return Err(ImportError::Empty);
    }

    let starts: Vec<usize> = ENTRY_START.find_iter(&content).map(|m| m.start()).collect();
    let mut words = Vec::new();

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(content.len());
        let Some(caps) = ENTRY.captures(&content[start..end]) else {
            continue;
        };

        let Ok(index) = caps[1].parse::<u32>() else {
            continue;
        };
        let abbreviation = caps[3].split_whitespace().next().unwrap_or_default();

        let listed = ListedWord {
            index,
            word: caps[2].to_lowercase(),
            part_of_speech: expand_part_of_speech(abbreviation),
            translation: clean_translation(&caps[4]),
        };
        tracing::debug!(
            "Parsed #{}: {} ({}) - {}",
            listed.index,
            listed.word,
            listed.part_of_speech,
            listed.translation
        );
        words.push(listed);
    }

    if words.is_empty() {
        return Err(ImportError::NoEntries);
    }

    tracing::info!("Parsed {} words from list", words.len());
    Ok(words)
}

pub fn expand_part_of_speech(abbreviation: &str) -> String {
    let full = match abbreviation {
        "n" => "noun",
        "v" => "verb",
        "a" => "adjective",
        "ad" => "adverb",
        "prep" => "preposition",
        "conj" => "conjunction",
        "pron" => "pronoun",
        "int" => "interjection",
        other => other,
    };
    full.to_string()
}

fn clean_translation(raw: &str) -> String {
    let collapsed = WHITESPACE.replace_all(raw.trim(), " ");
    let first = POS_BREAK.split(&collapsed).next().unwrap_or_default().trim();

    if first.chars().count() > MAX_TRANSLATION_CHARS {
        let cut: String = first.chars().take(MAX_TRANSLATION_CHARS).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

/// Turns a local word list into classified, fully populated entries
pub struct LocalImporter {
    classifier: DifficultyClassifier,
}

impl Default for LocalImporter {
    fn default() -> Self {
        Self::new(DifficultyClassifier::new(toeic_profile()))
    }
}

impl LocalImporter {
    pub fn new(classifier: DifficultyClassifier) -> Self {
        Self { classifier }
    }

    pub fn candidate(&self, listed: &ListedWord) -> Candidate {
        let tier = self.classifier.classify(&listed.word, &listed.part_of_speech);

        Candidate {
            word: Some(listed.word.clone()),
            level: Some(tier.as_str().to_string()),
            translation: Some(listed.translation.clone()),
            phonetic: Some(approximate_phonetic(&listed.word)),
            part_of_speech: Some(listed.part_of_speech.clone()),
            common_phrases: common_phrases(&listed.word, &listed.part_of_speech),
            example: Some(example_sentence(
                &listed.word,
                &listed.part_of_speech,
                &listed.translation,
            )),
        }
    }

    /// Parse, classify and deduplicate against `known`. Each accepted entry
    /// keeps the tier the classifier gave it.
    pub fn import(
        &self,
        content: &str,
        known: &mut KnownWords,
    ) -> Result<GenerationBatchResult, ImportError> {
        let candidates = parse_word_list(content)?
            .iter()
            .map(|listed| self.candidate(listed))
            .collect();

        let result = filter_candidates_by(candidates, known, |c| {
            c.level
                .as_deref()
                .and_then(Tier::from_label)
                .unwrap_or(Tier::From300)
        });

        tracing::info!(
            "Import: {} accepted, {} duplicates, {} incomplete",
            result.accepted.len(),
            result.rejected_duplicates,
            result.rejected_incomplete
        );
        Ok(result)
    }
}
