//! Shared primitives for all Rust crates in Crewdeck.

#![forbid(unsafe_code)]

/// Caller identity primitives shared across services.
pub mod auth;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use auth::{Role, UserIdentity};

/// Result type used across Crewdeck crates.
pub type AppResult<T> = Result<T, AppError>;

/// Organizational identifier.
///
/// The host data model stores company, team, and employee ids
/// inconsistently as JSON numbers or numeric strings. `OrgId` absorbs both
/// encodings: any value that parses as an integer is canonicalized to its
/// decimal form, so `5`, `"5"`, and `"005"` compare equal. Non-numeric ids
/// compare as their trimmed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrgId(String);

impl OrgId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        match trimmed.parse::<i64>() {
            Ok(numeric) => Self(numeric.to_string()),
            Err(_) => Self(trimmed.to_owned()),
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<i64> for OrgId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for OrgId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for OrgId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for OrgId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawOrgId {
            Numeric(i64),
            Text(String),
        }

        Ok(match RawOrgId::deserialize(deserializer)? {
            RawOrgId::Numeric(value) => Self::from(value),
            RawOrgId::Text(value) => Self::new(value),
        })
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::OrgId;

    #[test]
    fn numeric_string_and_number_compare_equal() {
        assert_eq!(OrgId::new("7"), OrgId::from(7));
    }

    #[test]
    fn leading_zeroes_are_normalized() {
        assert_eq!(OrgId::new("007"), OrgId::new("7"));
    }

    #[test]
    fn non_numeric_ids_keep_their_text() {
        let id = OrgId::new("  team-alpha ");
        assert_eq!(id.as_str(), "team-alpha");
        assert_ne!(id, OrgId::new("team-beta"));
    }

    #[test]
    fn deserializes_from_json_number_and_string() {
        let from_number: OrgId = serde_json::from_str("7").unwrap_or(OrgId::new("missing"));
        let from_string: OrgId = serde_json::from_str("\"7\"").unwrap_or(OrgId::new("missing"));
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "7");
    }
}
