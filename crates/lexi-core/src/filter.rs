use std::collections::HashSet;

use lexi_types::{Candidate, GenerationBatchResult, Tier};

use crate::preprocess::normalize_word;

/// Normalized words already in the vocabulary, plus everything accepted so
/// far in the current run
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    /// `false` when the word was already known
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Crude plural/past-tense collapse against the known set. Expects a
    /// normalized word. Distinct words that merely look inflected (`news`
    /// when `new` is known) are rejected too.
    pub fn is_near_duplicate(&self, word: &str) -> bool {
        let inflected_of_known = ["s", "es", "ed"].into_iter().any(|suffix| {
            word.strip_suffix(suffix)
                .is_some_and(|base| !base.is_empty() && self.words.contains(base))
        });

        let base_of_known = ["s", "es", "ed"]
            .into_iter()
            .any(|suffix| self.words.contains(&format!("{word}{suffix}")));

        inflected_of_known || base_of_known
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| normalize_word(w.as_ref())).collect(),
        }
    }
}

/// Accept candidates that are complete, new to this batch, unknown and not
/// a near-duplicate of a known word. Accepted words are added to `known`
/// straight away and stamped with `tier`.
pub fn filter_candidates(
    candidates: Vec<Candidate>,
    known: &mut KnownWords,
    tier: Tier,
) -> GenerationBatchResult {
    filter_candidates_by(candidates, known, |_| tier)
}

/// Like [`filter_candidates`], with the tier chosen per candidate
pub fn filter_candidates_by<F>(
    candidates: Vec<Candidate>,
    known: &mut KnownWords,
    tier_for: F,
) -> GenerationBatchResult
where
    F: Fn(&Candidate) -> Tier,
{
    let mut result = GenerationBatchResult::default();
    let mut batch = HashSet::new();

    for candidate in candidates {
        if !candidate.is_complete() {
            tracing::debug!("Rejected incomplete candidate {:?}", candidate.word);
            result.rejected_incomplete += 1;
            continue;
        }

        let word = candidate.word.as_deref().map(normalize_word).unwrap_or_default();

        if !batch.insert(word.clone()) {
            tracing::debug!("Rejected {}: repeated within batch", word);
            result.rejected_duplicates += 1;
            continue;
        }

        if known.words.contains(&word) {
            tracing::debug!("Rejected {}: already in vocabulary", word);
            result.rejected_duplicates += 1;
            continue;
        }

        if known.is_near_duplicate(&word) {
            tracing::debug!("Rejected {}: inflection of a known word", word);
            result.rejected_duplicates += 1;
            continue;
        }

        let tier = tier_for(&candidate);
        known.words.insert(word.clone());
        result.accepted.push(candidate.into_entry(word, tier));
    }

    result
}
