/// Suffix spellings and their rough IPA. First match wins.
const SUFFIX_SOUNDS: &[(&str, &str)] = &[
    ("tion", "ʃən"),
    ("sion", "ʒən"),
    ("ture", "tʃər"),
    ("age", "ɪdʒ"),
    ("ate", "eɪt"),
    ("ite", "aɪt"),
    ("ive", "ɪv"),
    ("ous", "əs"),
    ("ance", "əns"),
    ("ence", "əns"),
    ("able", "əbl"),
    ("ible", "əbl"),
    ("ment", "mənt"),
    ("ness", "nəs"),
    ("ship", "ʃɪp"),
    ("hood", "hʊd"),
    ("less", "ləs"),
    ("ful", "fʊl"),
    ("ly", "li"),
    ("er", "ər"),
    ("or", "ər"),
    ("ist", "ɪst"),
    ("ism", "ɪzəm"),
    ("ize", "aɪz"),
    ("ise", "aɪz"),
    ("fy", "faɪ"),
    ("cy", "si"),
    ("ty", "ti"),
    ("al", "əl"),
    ("ar", "ər"),
    ("ary", "əri"),
    ("ory", "əri"),
    ("ic", "ɪk"),
    ("ical", "ɪkəl"),
];

/// `(vowel, replacement, followers that keep the vowel as is)`, applied
/// one pass per vowel in this order
const VOWEL_SOUNDS: &[(char, &str, &[&str])] = &[
    ('a', "æ", &["r", "l", "w", "y"]),
    ('e', "ɛ", &["r", "w", "y"]),
    ('i', "ɪ", &["ng", "nk"]),
    ('o', "ɒ", &["r", "w", "y", "u"]),
    ('u', "ʌ", &["r"]),
];

/// Rule-of-thumb phonetic transcription wrapped in slashes. Good enough for
/// a flashcard hint, not a dictionary.
pub fn approximate_phonetic(word: &str) -> String {
    let mut phonetic = word.to_string();

    if let Some((suffix, sound)) = SUFFIX_SOUNDS.iter().find(|(s, _)| word.ends_with(s)) {
        phonetic = format!("{}{}", &word[..word.len() - suffix.len()], sound);
    }

    for (vowel, sound, keep_before) in VOWEL_SOUNDS {
        phonetic = replace_vowel(&phonetic, *vowel, sound, keep_before);
    }

    format!("/{phonetic}/")
}

fn replace_vowel(text: &str, vowel: char, sound: &str, keep_before: &[&str]) -> String {
    let mut out = String::with_capacity(text.len() + 8);

    for (i, c) in text.char_indices() {
        let rest = &text[i + c.len_utf8()..];
        if c == vowel && !keep_before.iter().any(|k| rest.starts_with(k)) {
            out.push_str(sound);
        } else {
            out.push(c);
        }
    }

    out
}
