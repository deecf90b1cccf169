//! # aidriven-core: Utility Surface for the AI-Driven Demo Apps
//!
//! The only logic in the demo apps with input→output semantics that does not
//! depend on a UI toolkit. Presentation layers (the `aidriven` CLI, or any
//! other front end) call into this crate and render what it returns.
//!
//! ## Operations
//!
//! | Operation | Function |
//! |---|---|
//! | Email format check | [`validate_email`] |
//! | Long calendar date | [`format_date`] |
//! | Relative time phrase | [`format_relative_time`] |
//! | Canonical identifier | [`generate_identifier`] |
//! | Short identifier | [`generate_short_identifier`] |
//!
//! None of these fail. A malformed email yields `false`, every representable
//! instant formats to a non-empty string, and identifier generation always
//! succeeds. [`UtilityError`] is reserved for the validated constructors
//! (`EmailAddress::parse`, `Timestamp::parse`, `Identifier::parse`, ...).
//!
//! ## Crate Policy
//!
//! - No shared mutable state; every function may be called concurrently.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assistant;
pub mod email;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use assistant::{suggestions, ChatMessage, Conversation, ResponsePool, Role};
pub use email::{validate_email, EmailAddress};
pub use error::UtilityError;
pub use identity::{generate_identifier, generate_short_identifier, Identifier};
pub use temporal::{
    format_date, format_date_short, format_relative_time, format_relative_time_from,
    DateFormatter, DateStyle, Timestamp,
};
