//! # Email Format Validation
//!
//! A structural `local@domain.tld` check. No DNS lookups, no mailbox
//! verification, and deliberately not RFC 5322 complete: quoted local parts,
//! IP-literal domains and internationalized domains are all rejected.
//!
//! The accepted shape is the whole-string match of
//!
//! ```text
//! [A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}
//! ```
//!
//! so subdomains, `+` tags, dotted local parts, mixed case and digits pass,
//! while anything containing whitespace, a second `@`, or lacking a
//! 2–64 letter top-level label fails.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UtilityError;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// Returns `true` if `candidate` has the `local@domain.tld` shape.
///
/// Never fails: empty and malformed strings simply return `false`.
pub fn validate_email(candidate: &str) -> bool {
    email_regex().map_or(false, |re| re.is_match(candidate))
}

/// An email address that passed [`validate_email`].
///
/// The input is stored verbatim; no case folding or trimming happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an address.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidEmail`] when `candidate` is rejected
    /// by [`validate_email`].
    pub fn parse(candidate: &str) -> Result<Self, UtilityError> {
        if validate_email(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(UtilityError::InvalidEmail(candidate.to_string()))
        }
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// The part after the `@`, including the top-level label.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Access the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Neither side of the pattern admits `@`, so there is exactly one.
    fn split(&self) -> (&str, &str) {
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UtilityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(UtilityError::InvalidEmail(value))
        }
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = UtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
