use std::fmt;

/// Structural defect spotted in a response nothing could be recovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    MissingOpeningBrace,
    MissingClosingBrace,
    MarkdownResidue,
    LeadingProse,
    UnterminatedString,
    TruncatedPayload,
    MissingSeparator,
    MalformedPropertyName,
    NoCompleteEntries,
}

impl FormatIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatIssue::MissingOpeningBrace => "missing opening brace",
            FormatIssue::MissingClosingBrace => "missing closing brace",
            FormatIssue::MarkdownResidue => "markdown residue detected",
            FormatIssue::LeadingProse => "explanatory text before the payload",
            FormatIssue::UnterminatedString => "unterminated string",
            FormatIssue::TruncatedPayload => "payload cut off mid-entry",
            FormatIssue::MissingSeparator => "missing comma or colon",
            FormatIssue::MalformedPropertyName => "malformed property name",
            FormatIssue::NoCompleteEntries => "no entry carries word, level and translation",
        }
    }
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unrecoverable response format: {}", describe(.issues))]
    UnrecoverableFormat { issues: Vec<FormatIssue> },
}

impl ParseError {
    pub fn issues(&self) -> &[FormatIssue] {
        match self {
            ParseError::UnrecoverableFormat { issues } => issues,
        }
    }
}

fn describe(issues: &[FormatIssue]) -> String {
    if issues.is_empty() {
        return "unknown".to_string();
    }

    issues
        .iter()
        .map(FormatIssue::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_issue() {
        let err = ParseError::UnrecoverableFormat {
            issues: vec![FormatIssue::MarkdownResidue, FormatIssue::UnterminatedString],
        };
        assert_eq!(
            err.to_string(),
            "Unrecoverable response format: markdown residue detected, unterminated string"
        );
    }
}
