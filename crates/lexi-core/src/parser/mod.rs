mod decode;
mod diagnose;
mod extract;
mod framing;
mod repair;
mod scan;

use std::fmt;

use lexi_types::Candidate;

use self::decode::DecodeFailure;
use crate::error::ParseError;

/// Which step of the repair pipeline produced the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStage {
    Direct,
    Repaired,
    Truncated,
    Extracted,
}

impl fmt::Display for RecoveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecoveryStage::Direct => "direct decode",
            RecoveryStage::Repaired => "targeted repair",
            RecoveryStage::Truncated => "truncation repair",
            RecoveryStage::Extracted => "entry extraction",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct ParseOutcome {
    /// Candidates carrying word, level and translation
    pub entries: Vec<Candidate>,
    pub stage: Option<RecoveryStage>,
    /// Set only when every stage came up empty
    pub error: Option<ParseError>,
}

impl ParseOutcome {
    fn recovered(entries: Vec<Candidate>, stage: RecoveryStage) -> Self {
        tracing::debug!("Recovered {} entries via {}", entries.len(), stage);
        Self {
            entries,
            stage: Some(stage),
            error: None,
        }
    }

    pub fn into_result(self) -> Result<Vec<Candidate>, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.entries),
        }
    }
}

/// `(text, last decode failure) -> text worth decoding`
type Strategy = fn(&str, Option<&DecodeFailure>) -> Option<String>;

/// Tried in order on the framed payload. Each strategy sees the output of
/// the previous one, so truncation works on already-repaired text.
const STRATEGIES: [(RecoveryStage, Strategy); 3] = [
    (RecoveryStage::Direct, as_is),
    (RecoveryStage::Repaired, repair::targeted_repair),
    (RecoveryStage::Truncated, repair::truncate_at_failure),
];

fn as_is(text: &str, _failure: Option<&DecodeFailure>) -> Option<String> {
    Some(text.to_string())
}

/// Recover as many complete entries as possible from raw generation output.
/// Never fails outright: an unusable response comes back as an outcome with
/// no entries and a [`ParseError::UnrecoverableFormat`] diagnosis.
pub fn parse_response(raw: &str) -> ParseOutcome {
    let stripped = framing::strip_fences(raw);
    let mut failure: Option<DecodeFailure> = None;

    if let Some(payload) = framing::frame_payload(&stripped) {
        let mut current = payload.to_string();

        for (stage, strategy) in STRATEGIES {
            let Some(attempt) = strategy(&current, failure.as_ref()) else {
                continue;
            };

            match decode::decode(&attempt) {
                Ok(entries) if !entries.is_empty() => {
                    return ParseOutcome::recovered(entries, stage);
                }
                Ok(_) => failure = None,
                Err(err) => {
                    tracing::debug!("{} failed: {}", stage, err.message);
                    failure = Some(err);
                }
            }
            current = attempt;
        }
    }

    let entries = extract::extract_entries(&stripped);
    if !entries.is_empty() {
        return ParseOutcome::recovered(entries, RecoveryStage::Extracted);
    }

    let issues = diagnose::diagnose(raw, failure.as_ref());
    let error = ParseError::UnrecoverableFormat { issues };
    tracing::warn!("{}", error);

    ParseOutcome {
        entries: Vec::new(),
        stage: None,
        error: Some(error),
    }
}
