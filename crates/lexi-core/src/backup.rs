use std::collections::HashMap;

use lexi_types::{Candidate, ExampleSentence, Tier};

/// Static fallback vocabulary item
#[derive(Debug, Clone, PartialEq)]
pub struct BackupWord {
    pub word: String,
    pub translation: String,
    pub part_of_speech: String,
    pub phonetic: Option<String>,
    pub example: Option<ExampleSentence>,
}

impl BackupWord {
    pub fn new(word: &str, translation: &str, part_of_speech: &str) -> Self {
        Self {
            word: word.to_string(),
            translation: translation.to_string(),
            part_of_speech: part_of_speech.to_string(),
            phonetic: None,
            example: None,
        }
    }

    pub fn with_phonetic(mut self, phonetic: String) -> Self {
        self.phonetic = Some(phonetic);
        self
    }

    pub fn with_example(mut self, example: ExampleSentence) -> Self {
        self.example = Some(example);
        self
    }

    /// Candidate claiming `tier`, ready for the deduplication filter
    pub fn to_candidate(&self, tier: Tier) -> Candidate {
        Candidate {
            word: Some(self.word.clone()),
            level: Some(tier.as_str().to_string()),
            translation: Some(self.translation.clone()),
            part_of_speech: Some(self.part_of_speech.clone()),
            phonetic: self.phonetic.clone(),
            example: self.example.clone(),
            ..Default::default()
        }
    }
}

/// Per-tier fallback lists used when the generation endpoint is unusable.
/// Tiers without a list borrow the `300-500` one.
#[derive(Debug, Clone, Default)]
pub struct BackupWords {
    lists: HashMap<Tier, Vec<BackupWord>>,
}

impl BackupWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, tier: Tier, words: Vec<BackupWord>) -> Self {
        self.lists.insert(tier, words);
        self
    }

    pub fn insert(&mut self, tier: Tier, words: Vec<BackupWord>) {
        self.lists.insert(tier, words);
    }

    pub fn words_for(&self, tier: Tier) -> &[BackupWord] {
        self.lists
            .get(&tier)
            .or_else(|| self.lists.get(&Tier::From300))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn candidates_for(&self, tier: Tier) -> Vec<Candidate> {
        self.words_for(tier)
            .iter()
            .map(|w| w.to_candidate(tier))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tier_falls_back_to_300_500() {
        let backup = BackupWords::new().with_list(
            Tier::From300,
            vec![BackupWord::new("invoice", "發票", "noun")],
        );

        assert_eq!(backup.words_for(Tier::Above900)[0].word, "invoice");

        let candidates = backup.candidates_for(Tier::Above900);
        assert_eq!(candidates[0].level.as_deref(), Some("900+"));
        assert!(candidates[0].is_complete());
    }

    #[test]
    fn candidate_carries_phonetic_and_example() {
        let word = BackupWord::new("audit", "審計", "noun")
            .with_phonetic("/ɔdɪt/".to_string())
            .with_example(ExampleSentence {
                sentence: "The audit starts Monday.".to_string(),
                translation: "審計週一開始。".to_string(),
            });

        let entry = word
            .to_candidate(Tier::From600)
            .into_entry("audit".to_string(), Tier::From600);
        assert_eq!(entry.phonetic.as_deref(), Some("/ɔdɪt/"));
        assert_eq!(entry.example.unwrap().sentence, "The audit starts Monday.");
    }

    #[test]
    fn empty_container_has_no_words() {
        let backup = BackupWords::new();
        assert!(backup.is_empty());
        assert!(backup.words_for(Tier::From500).is_empty());
    }
}
