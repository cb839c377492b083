//! Line normalization
//!
//! Splits a text into the ordered lines compared by the diff engine.
//! CRLF, lone CR and LF are all accepted as separators. Splitting is literal:
//! a trailing separator produces a trailing empty line, and the empty text is
//! a single empty line, so every input has at least one numbered line.

/// Split `text` into lines, borrowing each line from the input.
///
/// ```
/// use linecmp::domain::line::normalize;
///
/// assert_eq!(normalize("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
/// assert_eq!(normalize(""), vec![""]);
/// ```
pub fn normalize(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\r' => {
                lines.push(&text[start..pos]);
                // a CRLF pair is one separator
                pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                start = pos;
            }
            b'\n' => {
                lines.push(&text[start..pos]);
                pos += 1;
                start = pos;
            }
            _ => pos += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Number of lines `normalize` would produce, without collecting them.
pub fn line_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    let crlf = bytes.windows(2).filter(|pair| *pair == b"\r\n").count();
    let separators = bytes.iter().filter(|b| matches!(b, b'\r' | b'\n')).count();

    separators - crlf + 1
}

#[cfg(test)]
mod tests {
    use super::{line_count, normalize};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![""])]
    #[case("a", vec!["a"])]
    #[case("a\n", vec!["a", ""])]
    #[case("a\nb", vec!["a", "b"])]
    #[case("a\r\nb", vec!["a", "b"])]
    #[case("a\rb", vec!["a", "b"])]
    #[case("a\r\rb", vec!["a", "", "b"])]
    #[case("a\n\r\nb", vec!["a", "", "b"])]
    #[case("\n", vec!["", ""])]
    #[case("\r\n\r\n", vec!["", "", ""])]
    #[case("  a \t\n b ", vec!["  a \t", " b "])]
    fn test_normalize(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(normalize(text), expected);
    }

    #[test]
    fn test_normalize_keeps_multibyte_characters_intact() {
        assert_eq!(normalize("añadida\r\nélan"), vec!["añadida", "élan"]);
    }

    proptest! {
        #[test]
        fn test_normalize_never_yields_separators(text in "[a-c\r\n]{0,40}") {
            let lines = normalize(&text);
            prop_assert!(!lines.is_empty());
            prop_assert!(lines.iter().all(|line| !line.contains(['\r', '\n'])));
        }

        #[test]
        fn test_line_count_matches_normalize(text in "[a-c\r\n]{0,40}") {
            prop_assert_eq!(line_count(&text), normalize(&text).len());
        }

        #[test]
        fn test_normalize_matches_replace_then_split(text in "[a-c\r\n]{0,40}") {
            let unified = text.replace("\r\n", "\n").replace('\r', "\n");
            let expected = unified.split('\n').collect::<Vec<_>>();
            prop_assert_eq!(normalize(&text), expected);
        }
    }
}
