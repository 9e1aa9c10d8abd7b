use std::collections::HashSet;

use lexi_types::Tier;

use crate::preprocess::normalize_word;

/// Exact-match keyword table for one tier
#[derive(Debug, Clone)]
pub struct TierRule {
    pub tier: Tier,
    words: HashSet<String>,
}

impl TierRule {
    pub fn new<I, S>(tier: Tier, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tier,
            words: words.into_iter().map(|w| normalize_word(w.as_ref())).collect(),
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Immutable tables the classifier scores against. Built once by a
/// language pack and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct ClassifierProfile {
    /// Checked in order; first match wins
    pub keyword_rules: Vec<TierRule>,
    /// `(prefix, weight)`, first matching prefix counts
    pub prefixes: Vec<(String, u32)>,
    /// `(suffix, weight)`, first matching suffix counts
    pub suffixes: Vec<(String, u32)>,
    /// Substrings marking business-domain vocabulary
    pub business_terms: Vec<String>,
    /// Substrings marking technical vocabulary
    pub technical_patterns: Vec<String>,
}

/// Maps a word and its part of speech to a [`Tier`]
#[derive(Debug, Clone)]
pub struct DifficultyClassifier {
    profile: ClassifierProfile,
}

impl DifficultyClassifier {
    /// Keyword rules are put in ascending tier order so the lowest matching
    /// tier always wins, whatever order the profile listed them in.
    pub fn new(mut profile: ClassifierProfile) -> Self {
        profile.keyword_rules.sort_by_key(|rule| rule.tier);
        Self { profile }
    }

    pub fn profile(&self) -> &ClassifierProfile {
        &self.profile
    }

    pub fn classify(&self, word: &str, part_of_speech: &str) -> Tier {
        self.classify_with_score(word, part_of_speech).0
    }

    /// Tier plus the heuristic score behind it. The score is `None` when a
    /// keyword table decided the tier.
    pub fn classify_with_score(&self, word: &str, part_of_speech: &str) -> (Tier, Option<u32>) {
        let word = normalize_word(word);

        if let Some(rule) = self.profile.keyword_rules.iter().find(|r| r.matches(&word)) {
            return (rule.tier, None);
        }

        let score = self.score(&word, part_of_speech);
        tracing::trace!("{} difficulty score: {}", word, score);
        (tier_for_score(score), Some(score))
    }

    fn score(&self, word: &str, part_of_speech: &str) -> u32 {
        let mut score = length_band(word);
        score += (count_syllables(word) - 1).min(4);
        score += self.affix_score(word);
        score += part_of_speech_weight(part_of_speech);

        if self.is_business_related(word) {
            score += 2;
        }

        if self.is_technical_term(word) {
            score += 3;
        }

        score
    }

    /// Prefix weight plus suffix weight, capped at 4
    pub fn affix_score(&self, word: &str) -> u32 {
        let prefix = self
            .profile
            .prefixes
            .iter()
            .find(|(p, _)| word.starts_with(p.as_str()))
            .map_or(0, |(_, w)| *w);

        let suffix = self
            .profile
            .suffixes
            .iter()
            .find(|(s, _)| word.ends_with(s.as_str()))
            .map_or(0, |(_, w)| *w);

        (prefix + suffix).min(4)
    }

    fn is_business_related(&self, word: &str) -> bool {
        self.profile
            .business_terms
            .iter()
            .any(|term| word.contains(term.as_str()))
    }

    fn is_technical_term(&self, word: &str) -> bool {
        if word.contains('-') && word.chars().count() > 8 {
            return true;
        }

        self.profile
            .technical_patterns
            .iter()
            .any(|pattern| word.contains(pattern.as_str()))
    }
}

/// 0 up to 4 characters, then one more point every 2 characters, max 5
fn length_band(word: &str) -> u32 {
    match word.chars().count() {
        0..=4 => 0,
        5..=6 => 1,
        7..=8 => 2,
        9..=10 => 3,
        11..=12 => 4,
        _ => 5,
    }
}

fn part_of_speech_weight(part_of_speech: &str) -> u32 {
    match part_of_speech.trim().to_lowercase().as_str() {
        "adjective" | "conjunction" => 1,
        "adverb" => 2,
        _ => 0,
    }
}

fn tier_for_score(score: u32) -> Tier {
    match score {
        0..=2 => Tier::Below300,
        3..=5 => Tier::From300,
        6..=8 => Tier::From500,
        9..=11 => Tier::From600,
        12..=14 => Tier::From700,
        15..=17 => Tier::From800,
        _ => Tier::Above900,
    }
}

/// Rough syllable estimate: vowel groups, `-le` adds one, a trailing silent
/// `e` removes one. Never below 1.
pub fn count_syllables(word: &str) -> u32 {
    let word = word.to_lowercase();
    let mut count: u32 = 0;
    let mut previous_was_vowel = false;

    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with("le") && word.chars().count() > 2 {
        count += 1;
    }
    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}
