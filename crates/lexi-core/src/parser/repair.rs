use lazy_static::lazy_static;
use regex::Regex;

use super::decode::DecodeFailure;
use super::scan::scan;

lazy_static! {
    static ref CONTRACTION_QUOTE: Regex = Regex::new(r#"(\w)"(s|t|d|ll|re|ve|m)\b"#).unwrap();
    static ref INNER_QUOTE: Regex = Regex::new(r#"(\w)"(\w)"#).unwrap();
    static ref TRAILING_COMMA: Regex = Regex::new(r",(\s*[}\]])").unwrap();
}

/// Replacing inner quotes can expose a new match right after the last one
const INNER_QUOTE_PASSES: usize = 8;

/// Fix the defects the endpoint is known to produce: contractions written
/// with a double quote, bare quotes between word characters, trailing commas
/// and lines left with an odd number of quotes. `None` when nothing changed.
pub(crate) fn targeted_repair(text: &str, _failure: Option<&DecodeFailure>) -> Option<String> {
    let mut repaired = CONTRACTION_QUOTE.replace_all(text, "$1'$2").into_owned();

    for _ in 0..INNER_QUOTE_PASSES {
        let next = INNER_QUOTE.replace_all(&repaired, r#"$1\"$2"#).into_owned();
        if next == repaired {
            break;
        }
        repaired = next;
    }

    let repaired = TRAILING_COMMA.replace_all(&repaired, "$1").into_owned();
    let repaired = close_odd_quote_lines(&repaired);

    (repaired != text).then_some(repaired)
}

/// Cut the text at the decode failure, back off to the last point where a
/// nested value had just closed, and append the closers still owed there.
pub(crate) fn truncate_at_failure(text: &str, failure: Option<&DecodeFailure>) -> Option<String> {
    let cut = failure?.offset_in(text);
    let (end, owed) = scan(&text[..cut]).last_safe?;

    let mut repaired = text[..end].to_string();
    repaired.extend(owed.iter().rev());
    Some(repaired)
}

fn close_odd_quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_end();
            if unescaped_quotes(trimmed) % 2 == 0 || trimmed.ends_with(['}', ']']) {
                return line.to_string();
            }

            match trimmed.strip_suffix(',') {
                Some(body) => format!("{body}\","),
                None => format!("{trimmed}\""),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn unescaped_quotes(line: &str) -> usize {
    let mut count = 0;
    let mut escaped = false;

    for c in line.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contraction_quote_becomes_apostrophe() {
        let repaired = targeted_repair(r#"{"sentence":"It"s due, don"t wait."}"#, None).unwrap();
        assert_eq!(repaired, r#"{"sentence":"It's due, don't wait."}"#);
    }

    #[test]
    fn bare_inner_quote_is_escaped() {
        let repaired = targeted_repair(r#"{"a":"x"y"}"#, None).unwrap();
        assert_eq!(repaired, r#"{"a":"x\"y"}"#);
    }

    #[test]
    fn trailing_commas_are_removed() {
        let repaired = targeted_repair("{\"a\":[1,2, ],\n}", None).unwrap();
        assert_eq!(repaired, "{\"a\":[1,2 ]\n}");
    }

    #[test]
    fn odd_quote_line_gets_closed() {
        let repaired = targeted_repair("{\n\"a\": \"b,\n\"c\": \"d\n}", None).unwrap();
        assert_eq!(repaired, "{\n\"a\": \"b\",\n\"c\": \"d\"\n}");
    }

    #[test]
    fn clean_text_is_left_alone() {
        assert_eq!(targeted_repair(r#"{"a":"b"}"#, None), None);
    }

    #[test]
    fn truncation_needs_a_failure_position() {
        assert_eq!(truncate_at_failure(r#"{"a":[{"b":1}"#, None), None);
    }
}
