use super::decode::DecodeFailure;
use super::scan::scan;
use crate::error::FormatIssue;

/// Classify why a response yielded nothing, from its first and last
/// characters, leftover noise and the last decode failure.
pub(crate) fn diagnose(raw: &str, failure: Option<&DecodeFailure>) -> Vec<FormatIssue> {
    let mut issues = Vec::new();
    let text = raw.trim();

    if text.contains("```") {
        issues.push(FormatIssue::MarkdownResidue);
    }

    match text.find('{') {
        None => issues.push(FormatIssue::MissingOpeningBrace),
        Some(start) => {
            let prefix = text[..start].replace("```json", "").replace("```", "");
            let prefix = prefix.trim();
            if prefix.contains('"') {
                issues.push(FormatIssue::MissingOpeningBrace);
            } else if prefix.chars().any(char::is_alphabetic) {
                issues.push(FormatIssue::LeadingProse);
            }

            let state = scan(&text[start..]);
            if state.in_string {
                issues.push(FormatIssue::UnterminatedString);
            } else if !state.open.is_empty() {
                issues.push(FormatIssue::TruncatedPayload);
            }
        }
    }

    if !text.trim_end_matches('`').trim_end().ends_with('}') {
        issues.push(FormatIssue::MissingClosingBrace);
    }

    if let Some(failure) = failure {
        let message = failure.message.as_str();
        if message.contains("expected `,`") || message.contains("expected `:`") {
            issues.push(FormatIssue::MissingSeparator);
        }
        if message.contains("key must be a string") {
            issues.push(FormatIssue::MalformedPropertyName);
        }
        if message.contains("EOF while parsing a string")
            && !issues.contains(&FormatIssue::UnterminatedString)
        {
            issues.push(FormatIssue::UnterminatedString);
        }
    }

    if issues.is_empty() {
        issues.push(FormatIssue::NoCompleteEntries);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_text_has_no_braces() {
        assert_eq!(
            diagnose("I'm sorry, I can't help with that.", None),
            vec![FormatIssue::MissingOpeningBrace, FormatIssue::MissingClosingBrace]
        );
    }

    #[test]
    fn fenced_payload_cut_inside_a_string() {
        assert_eq!(
            diagnose("```json\n{\"words\":[{\"word\":\"aud", None),
            vec![
                FormatIssue::MarkdownResidue,
                FormatIssue::UnterminatedString,
                FormatIssue::MissingClosingBrace,
            ]
        );
    }

    #[test]
    fn prose_before_payload() {
        let issues = diagnose("Here are your words: {\"words\":[", None);
        assert!(issues.contains(&FormatIssue::LeadingProse));
        assert!(issues.contains(&FormatIssue::TruncatedPayload));
    }

    #[test]
    fn well_formed_but_empty() {
        assert_eq!(
            diagnose(r#"{"words":[]}"#, None),
            vec![FormatIssue::NoCompleteEntries]
        );
    }
}
