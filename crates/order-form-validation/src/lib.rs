//! Order form validation core
//!
//! Pure validation functions and the declarative rule set evaluated on every
//! field change. No I/O, no allocation beyond the reason strings.

pub mod email;
pub mod rules;
pub mod string;

// Re-export all validators
pub use email::*;
pub use rules::*;
pub use string::*;
