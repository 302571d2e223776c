//! Text normalization helpers

use distiller_nlp::find_paragraph_break;

/// Render extracted text as legibly as possible
///
/// Line breaks, no-break spaces and form/vertical tab characters become
/// spaces, runs of spaces collapse to one, and the result is trimmed.
pub fn clean(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        let c = match c {
            '\n' | '\r' | '\u{a0}' | '\u{b}' | '\u{c}' => ' ',
            other => other,
        };
        if c == ' ' && result.ends_with(' ') {
            continue;
        }
        result.push(c);
    }
    result.trim().to_string()
}

/// Text before the first blank line
pub fn first_paragraph(s: &str) -> &str {
    match find_paragraph_break(s) {
        Some(gap) => &s[..gap.start],
        None => s,
    }
}

/// Strip `prefix` from the start of `value`, comparing lowercase forms
pub fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let wanted: Vec<char> = prefix.chars().flat_map(char::to_lowercase).collect();
    let mut matched = 0;

    for (idx, c) in value.char_indices() {
        if matched == wanted.len() {
            return Some(&value[idx..]);
        }
        for lower in c.to_lowercase() {
            if wanted.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
    }

    (matched == wanted.len()).then_some("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  a\nb\u{a0}\u{a0}c \u{c} d\u{b}e\r\nf  "), "a b c d e f");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("\n\n"), "");
    }

    #[test]
    fn test_first_paragraph() {
        assert_eq!(first_paragraph("one\ntwo\n\nthree"), "one\ntwo");
        assert_eq!(first_paragraph("one\r\n\r\ntwo"), "one");
        assert_eq!(first_paragraph("single"), "single");
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("Condition: late", "condition"), Some(": late"));
        assert_eq!(strip_prefix_ignore_case("CAUSE", "Cause"), Some(""));
        assert_eq!(strip_prefix_ignore_case("Cau", "Cause"), None);
        assert_eq!(strip_prefix_ignore_case("Effect", "Cause"), None);
    }

    #[test]
    fn test_strip_prefix_unicode() {
        assert_eq!(strip_prefix_ignore_case("\u{c9}TAT: ok", "\u{e9}tat"), Some(": ok"));
    }
}
