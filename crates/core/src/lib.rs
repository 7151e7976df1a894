//! Shared primitives for all Rust crates in Rolegate.

#![forbid(unsafe_code)]

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across Rolegate crates.
pub type AppResult<T> = Result<T, AppError>;

/// Display name of a role or permission.
///
/// Names keep the casing they were created with. Comparisons used for lookup
/// and uniqueness go through [`EntityName::lookup_key`], which is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// Creates a validated name, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "name must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the case-folded key used for lookups and uniqueness checks.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Returns true when `other` names the same entity, ignoring case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.lookup_key() == other.trim().to_lowercase()
    }
}

impl Display for EntityName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl TryFrom<String> for EntityName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityName> for String {
    fn from(value: EntityName) -> Self {
        value.0
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

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, EntityName};

    #[test]
    fn entity_name_rejects_whitespace() {
        let result = EntityName::new("   ");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn entity_name_trims_and_keeps_casing() {
        let name = EntityName::new("  Content Editor ").unwrap_or_else(|_| unreachable!());
        assert_eq!(name.as_str(), "Content Editor");
        assert_eq!(name.lookup_key(), "content editor");
    }

    #[test]
    fn entity_name_matches_ignoring_case() {
        let name = EntityName::new("Manage Settings").unwrap_or_else(|_| unreachable!());
        assert!(name.matches("manage settings"));
        assert!(name.matches("MANAGE SETTINGS "));
        assert!(!name.matches("manage setting"));
    }

    #[test]
    fn entity_name_has_no_length_ceiling() {
        let long = "x".repeat(500);
        let name = EntityName::new(long.as_str()).unwrap_or_else(|_| unreachable!());
        assert_eq!(name.as_str(), long);
    }

    #[test]
    fn entity_name_deserialization_validates() {
        let parsed: Result<EntityName, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
    }
}
