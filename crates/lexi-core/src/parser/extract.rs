use std::collections::HashSet;

use lexi_types::Candidate;

use super::decode::{TRANSLATION_KEYS, decode};
use super::repair::targeted_repair;
use super::scan::matching_close;
use crate::preprocess::normalize_word;

/// Last resort: decode every balanced `{...}` span that names all three
/// mandatory keys on its own. Spans that still fail are dropped; repeated
/// words keep their first occurrence.
pub(crate) fn extract_entries(text: &str) -> Vec<Candidate> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut pos = 0;

    while let Some(found) = text[pos..].find('{') {
        let start = pos + found;
        pos = start + 1;

        let Some(end) = matching_close(text, start) else {
            continue;
        };

        let span = &text[start..=end];
        if !has_mandatory_keys(span) {
            continue;
        }

        let Some(candidates) = decode_span(span) else {
            tracing::debug!("Dropping undecodable span at byte {}", start);
            continue;
        };

        for candidate in candidates {
            let key = candidate.word.as_deref().map(normalize_word).unwrap_or_default();
            if seen.insert(key) {
                entries.push(candidate);
            }
        }
        pos = end + 1;
    }

    entries
}

fn has_mandatory_keys(span: &str) -> bool {
    span.contains("\"word\"")
        && span.contains("\"level\"")
        && TRANSLATION_KEYS
            .iter()
            .any(|key| span.contains(&format!("\"{key}\"")))
}

fn decode_span(span: &str) -> Option<Vec<Candidate>> {
    let direct = decode(span).ok().filter(|c| !c.is_empty());

    direct.or_else(|| {
        let repaired = targeted_repair(span, None)?;
        decode(&repaired).ok().filter(|c| !c.is_empty())
    })
}
