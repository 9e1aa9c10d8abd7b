use lexi_types::{Candidate, ExampleSentence, PhrasePair};
use serde_json::{Map, Value};

/// Keys accepted for an entry's translation, in priority order
pub(crate) const TRANSLATION_KEYS: [&str; 3] = ["chinese", "translation", "meaning"];

/// Where and why a structural decode stopped
#[derive(Debug, Clone)]
pub(crate) struct DecodeFailure {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl DecodeFailure {
    fn from_serde(err: &serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    /// Byte offset of the failure in `text`, clamped to a char boundary
    pub fn offset_in(&self, text: &str) -> usize {
        let line_start = if self.line <= 1 {
            0
        } else {
            text.match_indices('\n')
                .nth(self.line - 2)
                .map_or(text.len(), |(i, _)| i + 1)
        };

        let mut offset = (line_start + self.column).min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

/// Decode `text` and keep the candidates that carry word, level and
/// translation. Accepts `{"words": [...]}`, a bare array, or a single entry.
pub(crate) fn decode(text: &str) -> Result<Vec<Candidate>, DecodeFailure> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| DecodeFailure::from_serde(&err))?;

    Ok(candidates_from_value(&value)
        .into_iter()
        .filter(Candidate::is_complete)
        .collect())
}

fn candidates_from_value(value: &Value) -> Vec<Candidate> {
    match value {
        Value::Array(items) => items.iter().filter_map(candidate_from_value).collect(),
        Value::Object(map) => match map.get("words") {
            Some(Value::Array(items)) => items.iter().filter_map(candidate_from_value).collect(),
            _ if map.contains_key("word") => candidate_from_value(value).into_iter().collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn candidate_from_value(value: &Value) -> Option<Candidate> {
    let map = value.as_object()?;

    Some(Candidate {
        word: text_field(map, &["word"]),
        level: text_field(map, &["level"]),
        translation: text_field(map, &TRANSLATION_KEYS),
        phonetic: text_field(map, &["phonetic"]),
        part_of_speech: text_field(map, &["part_of_speech", "partOfSpeech", "pos"]),
        common_phrases: phrases(map),
        example: example(map),
    })
}

/// First of `keys` holding a non-blank string (or a number)
fn text_field(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn phrases(map: &Map<String, Value>) -> Vec<PhrasePair> {
    let Some(items) = ["common_phrases", "commonPhrases", "phrases"]
        .iter()
        .find_map(|key| map.get(*key)?.as_array())
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(phrase) => Some(PhrasePair {
                phrase: phrase.clone(),
                translation: String::new(),
            }),
            Value::Object(pair) => Some(PhrasePair {
                phrase: text_field(pair, &["phrase"])?,
                translation: text_field(pair, &["chinese", "translation"]).unwrap_or_default(),
            }),
            _ => None,
        })
        .collect()
}

fn example(map: &Map<String, Value>) -> Option<ExampleSentence> {
    let value = ["toeic_example", "example"]
        .iter()
        .find_map(|key| map.get(*key))?;

    match value {
        Value::String(sentence) if !sentence.trim().is_empty() => Some(ExampleSentence {
            sentence: sentence.clone(),
            translation: String::new(),
        }),
        Value::Object(pair) => Some(ExampleSentence {
            sentence: text_field(pair, &["sentence"])?,
            translation: text_field(pair, &["chinese", "translation"]).unwrap_or_default(),
        }),
        _ => None,
    }
}
