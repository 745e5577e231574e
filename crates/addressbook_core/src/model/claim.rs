//! Claim domain model.
//!
//! # Responsibility
//! - Define the claim record attached to a person entry.
//! - Validate claim titles and descriptions at construction time.
//!
//! # Invariants
//! - `Title` is never blank; it is the natural key of a claim within one
//!   person's claim set.
//! - `Claim` is immutable once constructed; edits produce a new value.
//! - Claim descriptions are never blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for claim values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValidationError {
    /// Title is empty after trim.
    BlankTitle,
    /// Description is empty after trim.
    BlankDescription,
}

impl Display for ClaimValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "claim title must not be blank"),
            Self::BlankDescription => write!(f, "claim description must not be blank"),
        }
    }
}

impl Error for ClaimValidationError {}

/// Claim title, unique within one person's claim set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Creates a title from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - Returns `ClaimValidationError::BlankTitle` when `value` is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ClaimValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ClaimValidationError::BlankTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl TryFrom<String> for Title {
    type Error = ClaimValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// One claim annotation attached to a person.
///
/// Ordering is by title first, which keeps claim sets sorted by their key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClaim")]
pub struct Claim {
    title: Title,
    description: String,
}

#[derive(Deserialize)]
struct RawClaim {
    title: Title,
    description: String,
}

impl TryFrom<RawClaim> for Claim {
    type Error = ClaimValidationError;

    fn try_from(value: RawClaim) -> Result<Self, Self::Error> {
        Self::new(value.title, value.description)
    }
}

impl Claim {
    /// Creates a claim with a trimmed, non-blank description.
    ///
    /// # Errors
    /// - Returns `ClaimValidationError::BlankDescription` when `description`
    ///   is blank.
    pub fn new(title: Title, description: impl Into<String>) -> Result<Self, ClaimValidationError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ClaimValidationError::BlankDescription);
        }
        Ok(Self {
            title,
            description: trimmed.to_string(),
        })
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns a copy of this claim carrying a different description.
    pub fn with_description(
        &self,
        description: impl Into<String>,
    ) -> Result<Self, ClaimValidationError> {
        Self::new(self.title.clone(), description)
    }
}

impl Display for Claim {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::{Claim, ClaimValidationError, Title};

    #[test]
    fn title_trims_and_rejects_blank_values() {
        assert_eq!(Title::new("  Bob ").expect("title").as_str(), "Bob");
        assert_eq!(
            Title::new(" \t ").unwrap_err(),
            ClaimValidationError::BlankTitle
        );
    }

    #[test]
    fn claim_display_joins_title_and_description() {
        let claim = Claim::new(Title::new("Bob").unwrap(), "Bob owes $100").unwrap();
        assert_eq!(claim.to_string(), "Bob; Bob owes $100");
    }

    #[test]
    fn with_description_keeps_title() {
        let claim = Claim::new(Title::new("Amy").unwrap(), "pending").unwrap();
        let edited = claim.with_description("approved").unwrap();
        assert_eq!(edited.title(), claim.title());
        assert_eq!(edited.description(), "approved");
        assert_ne!(edited, claim);
    }

    #[test]
    fn claim_rejects_blank_description() {
        let err = Claim::new(Title::new("Amy").unwrap(), "   ").unwrap_err();
        assert_eq!(err, ClaimValidationError::BlankDescription);
    }
}
