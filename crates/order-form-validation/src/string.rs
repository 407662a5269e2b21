//! String validation functions
//!
//! Lengths are counted in Unicode scalar values, on the untrimmed value.

use regex::Regex;

/// Validates that the value is not empty once surrounding whitespace is removed
pub fn validate_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum length
pub fn validate_min_length(value: &str, min: usize) -> Result<(), String> {
    if char_len(value) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Validates maximum length
pub fn validate_max_length(value: &str, max: usize) -> Result<(), String> {
    if char_len(value) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Validates that the whole value matches the regex
///
/// The regex is expected to be anchored already (see [`crate::Pattern`]).
pub fn validate_pattern(value: &str, regex: &Regex) -> Result<(), String> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err("Invalid format".to_string())
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
