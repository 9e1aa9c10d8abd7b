/// Nesting state of a JSON-ish text, tracked outside string literals
#[derive(Debug, Default)]
pub(crate) struct Scan {
    /// Closers still owed at the end of the text, innermost last
    pub open: Vec<char>,
    pub in_string: bool,
    /// Byte offset right after the last `}` or `]` that closed a value while
    /// still nested, with the closers owed at that point
    pub last_safe: Option<(usize, Vec<char>)>,
}

pub(crate) fn scan(text: &str) -> Scan {
    let mut state = Scan::default();
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if state.in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => state.in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => state.in_string = true,
            '{' => state.open.push('}'),
            '[' => state.open.push(']'),
            '}' | ']' => {
                // a stray closer that doesn't match is left for the decoder to report
                if state.open.last() == Some(&c) {
                    state.open.pop();
                    if !state.open.is_empty() {
                        state.last_safe = Some((i + 1, state.open.clone()));
                    }
                }
            }
            _ => {}
        }
    }

    state
}

/// Byte index of the `}` closing the object that opens at `start`
pub(crate) fn matching_close(text: &str, start: usize) -> Option<usize> {
    if !text[start..].starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_inside_strings_are_ignored() {
        let state = scan(r#"{"a":"{[","b":["#);
        assert_eq!(state.open, vec!['}', ']']);
        assert!(!state.in_string);
    }

    #[test]
    fn remembers_last_nested_close() {
        let text = r#"{"words":[{"word":"a"},{"word":"b"#;
        let state = scan(text);
        assert!(state.in_string);
        let (end, owed) = state.last_safe.unwrap();
        assert_eq!(&text[..end], r#"{"words":[{"word":"a"}"#);
        assert_eq!(owed, vec!['}', ']']);
    }

    #[test]
    fn finds_matching_close() {
        let text = r#"x {"a":{"b":"}"}} y"#;
        assert_eq!(matching_close(text, 2), Some(text.len() - 3));
        assert_eq!(matching_close(r#"{"a":1"#, 0), None);
    }
}
