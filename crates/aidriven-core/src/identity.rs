//! # Random Identifiers
//!
//! `Identifier` wraps a random (version 4) UUID. Its canonical rendering is
//! the 36-character, uppercase, 8-4-4-4-12 hyphenated form, e.g.
//! `E621E1F8-C36C-495A-93FC-0C247A3E6E5F`. The short form is the first eight
//! characters of that rendering.
//!
//! Generation draws from `uuid`'s v4 generator on every call. There is no
//! shared counter or cache, so concurrent callers need no coordination.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UtilityError;

/// Length of the canonical hyphenated form.
pub const IDENTIFIER_LEN: usize = 36;

/// Length of the short form.
pub const SHORT_IDENTIFIER_LEN: usize = 8;

/// Byte offsets of the hyphens in the canonical form.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A random 128-bit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Uuid);

impl Identifier {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a hyphenated identifier, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidIdentifier`] unless `s` is exactly the
    /// 36-character hyphenated form.
    pub fn parse(s: &str) -> Result<Self, UtilityError> {
        let invalid = |reason: String| UtilityError::InvalidIdentifier {
            input: s.to_string(),
            reason,
        };
        if s.len() != IDENTIFIER_LEN {
            return Err(invalid(format!(
                "expected {IDENTIFIER_LEN} characters, got {}",
                s.len()
            )));
        }
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|e| invalid(e.to_string()))
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The 36-character uppercase hyphenated form.
    pub fn canonical(&self) -> String {
        let mut buf = Uuid::encode_buffer();
        self.0.hyphenated().encode_upper(&mut buf).to_string()
    }

    /// The first eight characters of the canonical form.
    pub fn short(&self) -> String {
        let mut canonical = self.canonical();
        canonical.truncate(SHORT_IDENTIFIER_LEN);
        canonical
    }
}

impl TryFrom<String> for Identifier {
    type Error = UtilityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.canonical()
    }
}

impl std::str::FromStr for Identifier {
    type Err = UtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// A fresh identifier in canonical form.
pub fn generate_identifier() -> String {
    Identifier::generate().canonical()
}

/// The first eight characters of a fresh identifier.
///
/// Each call generates its own full identifier; two calls are independent
/// draws.
pub fn generate_short_identifier() -> String {
    Identifier::generate().short()
}
