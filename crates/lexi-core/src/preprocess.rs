use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every uniqueness decision: trimmed, NFKC,
/// lowercased, inner whitespace collapsed to one space.
pub fn normalize_word(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect::<String>().to_lowercase();

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
