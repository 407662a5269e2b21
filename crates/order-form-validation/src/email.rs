//! Email address pattern used by the order form

use crate::rules::Pattern;
use once_cell::sync::Lazy;

/// Unanchored source of the email grammar.
///
/// Local part is either dot-separated atoms or a quoted string; the domain is
/// either a bracketed IPv4 literal or dotted labels ending in an alphabetic TLD.
/// Parentheses inside classes stay escaped so browsers accept the source as an
/// HTML `pattern` attribute (compiled with the `v` flag).
pub const EMAIL_PATTERN: &str = concat!(
    r#"(([^<>\(\)\[\]\\.,;:\s@"]+(\.[^<>\(\)\[\]\\.,;:\s@"]+)*)|(".+"))"#,
    r"@",
    r"((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))",
);

pub(crate) static EMAIL: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

#[cfg(test)]
mod tests {
    use super::*;

    fn is_email(value: &str) -> bool {
        Pattern::email().is_match(value)
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_email("user@example.com"));
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@sub.domain.org"));
        assert!(is_email("\"odd name\"@example.com"));
        assert!(is_email("user@[192.168.0.1]"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_email("userexample.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@example"));
        assert!(!is_email("user@example.c"));
        assert!(!is_email("us er@example.com"));
        assert!(!is_email("user..name@example.com"));
        assert!(!is_email("us(er@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_no_partial_match() {
        assert!(!is_email("junk user@example.com"));
        assert!(!is_email("user@example.com junk"));
    }

    #[test]
    fn test_class_parentheses_are_escaped() {
        // Inside a character class every '(' and ')' must carry a backslash
        let mut in_class = false;
        let mut escaped = false;
        for c in EMAIL_PATTERN.chars() {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '[' => in_class = true,
                ']' => in_class = false,
                '(' | ')' => assert!(!in_class, "unescaped {:?} in class", c),
                _ => {}
            }
        }
    }

    #[test]
    fn test_email_pattern_is_shared() {
        assert_eq!(Pattern::email(), *EMAIL);
        assert_eq!(Pattern::email().as_str(), EMAIL_PATTERN);
    }
}
