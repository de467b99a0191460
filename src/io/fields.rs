//! Field splitting and numeric token validation for comma-separated lines.
use crate::math::Element;

/// Field separator. Quoting and escaping are not supported.
pub const DELIMITER: char = ',';

/// Split `line` into fields.
///
/// Follows line-reader semantics: an empty line has no fields, and a single
/// trailing delimiter closes the last field instead of opening a new one
/// (`"1,2,"` has two fields, `"1,2,,"` has three).
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    let body = if line.is_empty() {
        None
    } else {
        Some(line.strip_suffix(DELIMITER).unwrap_or(line))
    };
    body.into_iter().flat_map(|b| b.split(DELIMITER))
}

/// Syntactic pre-check run before numeric conversion.
///
/// Spaces are ignored, at most one `.` is allowed, `-` is only accepted as
/// the very first character, and everything else must be an ASCII digit.
/// Tokens with no digits at all (`""`, `"."`, `"-"`) pass here and are
/// rejected by the conversion in [`parse_field`].
pub fn is_valid_number(token: &str) -> bool {
    let mut dots = 0;
    for (i, c) in token.chars().enumerate() {
        match c {
            ' ' => continue,
            '.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            '-' if i == 0 => continue,
            c if c.is_ascii_digit() => continue,
            _ => return false,
        }
    }
    true
}

/// Validate and convert a single token. Surrounding spaces are trimmed
/// before conversion; spaces between digits make the conversion fail.
pub fn parse_field<T: Element>(token: &str) -> Option<T> {
    if !is_valid_number(token) {
        return None;
    }
    token.trim_matches(' ').parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<&str> {
        split_fields(line).collect()
    }

    #[test]
    fn split_follows_line_reader_semantics() {
        assert!(fields("").is_empty());
        assert_eq!(fields("a"), vec!["a"]);
        assert_eq!(fields("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(fields("a,b,"), vec!["a", "b"]);
        assert_eq!(fields("a,,b"), vec!["a", "", "b"]);
        assert_eq!(fields("a,b,,"), vec!["a", "b", ""]);
        assert_eq!(fields(","), vec![""]);
    }

    #[test]
    fn valid_number_syntax() {
        assert!(is_valid_number("12"));
        assert!(is_valid_number("-12.3"));
        assert!(is_valid_number(" 12 "));
        assert!(is_valid_number(".5"));
        assert!(!is_valid_number("12.3.4"));
        assert!(!is_valid_number("1-2"));
        assert!(!is_valid_number(" -2"));
        assert!(!is_valid_number("1e5"));
        assert!(!is_valid_number("+4"));
        assert!(!is_valid_number("abc"));
    }

    #[test]
    fn digitless_tokens_pass_syntax_but_fail_conversion() {
        for token in ["", "   ", ".", "-", "-."] {
            assert!(is_valid_number(token), "{:?}", token);
            assert_eq!(parse_field::<f64>(token), None, "{:?}", token);
        }
    }

    #[test]
    fn parse_field_converts_valid_tokens() {
        assert_eq!(parse_field::<f64>("-12.3"), Some(-12.3));
        assert_eq!(parse_field::<f64>(" 12 "), Some(12.0));
        assert_eq!(parse_field::<i32>("42"), Some(42));
        assert_eq!(parse_field::<i32>("4.2"), None);
        assert_eq!(parse_field::<f64>("1 2"), None);
        assert_eq!(parse_field::<i8>("300"), None);
    }
}
