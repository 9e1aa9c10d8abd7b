use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"```[A-Za-z]*").unwrap();
}

/// Remove code-fence markers wherever they appear
pub(crate) fn strip_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Span from the first `{` to the last `}`, inclusive
pub(crate) fn frame_payload(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end < start {
        return None;
    }

    Some(&text[start..=end])
}
