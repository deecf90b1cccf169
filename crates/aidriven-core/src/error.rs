//! # Error Types
//!
//! The four core operations (email validation, the two formatters and
//! identifier generation) never fail: malformed input shows up in the shape
//! of their result. `UtilityError` covers the construction and parsing paths
//! layered on top of them, where a caller asks for a validated value and
//! must be told why it could not be produced.

use thiserror::Error;

/// Error type for the validated constructors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilityError {
    /// The candidate does not have the `local@domain.tld` shape.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The timestamp could not be parsed or is out of range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The UTC offset is not of the form `±HH:MM` or is out of range.
    #[error("invalid UTC offset: {0:?}")]
    InvalidOffset(String),

    /// The string is not a hyphenated 128-bit identifier.
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A chat message was empty or whitespace only.
    #[error("message text must not be empty")]
    EmptyMessage,
}
