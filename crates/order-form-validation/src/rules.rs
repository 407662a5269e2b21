//! Declarative rule sets
//!
//! A [`Rules`] value is the conjunction of the constraints that are present.
//! An empty rule set accepts every value.

use crate::email::EMAIL;
use crate::string::{validate_max_length, validate_min_length, validate_pattern, validate_required};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A regular expression that must match the whole value
///
/// The source is stored as written and compiled anchored, so `\d{5}` only
/// accepts exactly five digits.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a full-match pattern from its unanchored source
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self { source, regex })
    }

    /// The built-in email address pattern, compiled once
    pub fn email() -> Self {
        EMAIL.clone()
    }

    /// Source as written, without the anchors
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(source).map_err(serde::de::Error::custom)
    }
}

/// Conjunctive set of constraints a field value must satisfy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Value must be non-empty after trimming
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Rules {
    /// An empty rule set (always valid)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// True if no constraint is present
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
    }

    /// Returns the reason of the first failing rule
    ///
    /// Rules run cheapest first: required, minLength, maxLength, pattern.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if self.required {
            validate_required(value)?;
        }
        if let Some(min) = self.min_length {
            validate_min_length(value, min)?;
        }
        if let Some(max) = self.max_length {
            validate_max_length(value, max)?;
        }
        if let Some(pattern) = &self.pattern {
            validate_pattern(value, pattern.regex())?;
        }
        Ok(())
    }

    /// True iff every present rule passes
    pub fn evaluate(&self, value: &str) -> bool {
        self.check(value).is_ok()
    }
}

/// Free-function form of [`Rules::evaluate`]
pub fn evaluate(rules: &Rules, value: &str) -> bool {
    rules.evaluate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("anything")]
    #[case("   ")]
    fn test_empty_rules_always_valid(#[case] value: &str) {
        assert!(evaluate(&Rules::none(), value));
        assert!(Rules::none().is_empty());
    }

    #[rstest]
    #[case("", false)]
    #[case("  ", false)]
    #[case("a", true)]
    fn test_required(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(evaluate(&Rules::none().required(), value), expected);
    }

    #[rstest]
    #[case("1234", false)]
    #[case("12345", true)]
    #[case("123456", false)]
    fn test_exact_length(#[case] value: &str, #[case] expected: bool) {
        let rules = Rules::none().min_length(5).max_length(5);
        assert_eq!(evaluate(&rules, value), expected);
    }

    #[test]
    fn test_email_pattern() {
        let rules = Rules::none().pattern(Pattern::email());
        assert!(!evaluate(&rules, "user.example.com"));
        assert!(evaluate(&rules, "user@example.com"));
    }

    #[test]
    fn test_pattern_is_anchored() {
        let rules = Rules::none().pattern(Pattern::new(r"\d{3}").unwrap());
        assert!(evaluate(&rules, "123"));
        assert!(!evaluate(&rules, "1234"));
        assert!(!evaluate(&rules, "a123"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let pattern = Pattern::new("cat|dog").unwrap();
        assert!(pattern.is_match("dog"));
        assert!(!pattern.is_match("catdog"));
        assert!(!pattern.is_match("hotdog"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(Pattern::new("(unclosed").is_err());
    }

    #[test]
    fn test_conjunction_matches_individual_rules() {
        let rules = Rules::none()
            .required()
            .min_length(2)
            .max_length(6)
            .pattern(Pattern::new("[a-z ]+").unwrap());

        for value in ["", "  ", "a", "ab", "abcdef", "abcdefg", "AB", "a b", "   a"] {
            let individually = validate_required(value).is_ok()
                && validate_min_length(value, 2).is_ok()
                && validate_max_length(value, 6).is_ok()
                && rules.pattern.as_ref().unwrap().is_match(value);
            assert_eq!(evaluate(&rules, value), individually, "value {:?}", value);
        }
    }

    #[test]
    fn test_check_reports_first_failure() {
        let rules = Rules::none().required().min_length(5);
        assert_eq!(rules.check("").unwrap_err(), "This field is required");
        assert_eq!(rules.check("abc").unwrap_err(), "Must be at least 5 characters");
        assert!(rules.check("abcde").is_ok());
    }

    #[test]
    fn test_rules_serde_shape() {
        let rules = Rules::none().required().min_length(5).max_length(5);
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "required": true, "minLength": 5, "maxLength": 5 })
        );

        let empty = serde_json::to_value(Rules::none()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_rules_deserialize_compiles_pattern() {
        let rules: Rules =
            serde_json::from_value(serde_json::json!({ "pattern": "[0-9]+" })).unwrap();
        assert!(rules.evaluate("42"));
        assert!(!rules.evaluate("4 2"));

        let bad = serde_json::from_value::<Rules>(serde_json::json!({ "pattern": "(" }));
        assert!(bad.is_err());
    }
}
