// File: src/error.rs
// Purpose: Error types for form updates and order dispatch

use thiserror::Error;

/// Rejected form mutations
///
/// A value that fails its rules is not an error; it only flips `valid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{value:?} is not an option of field {field}")]
    UnknownOption { field: String, value: String },

    #[error("duplicate field id: {0}")]
    DuplicateField(String),
}

/// Failure reported by an order dispatcher
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("order rejected: {0}")]
    Rejected(String),

    #[error("order sink unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode order: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
