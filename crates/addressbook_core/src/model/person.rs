//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its validated identity fields.
//! - Own the claim set attached to a contact.
//!
//! # Invariants
//! - `id` is stable, never nil, and never reused for another person.
//! - Claim titles are unique within one person's claim set.
//! - A person value is never mutated in place; claim edits go through
//!   `Person::with_claims`, which returns a new value with the same identity.

use crate::model::claim::{Claim, Title};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one person record.
pub type PersonId = Uuid;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});

/// Validation errors for person values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Caller-provided id is the nil UUID.
    NilId,
    /// Name is blank or contains non-alphanumeric characters.
    InvalidName(String),
    /// Phone is not a run of at least 3 digits.
    InvalidPhone(String),
    /// Email does not match `local-part@domain`.
    InvalidEmail(String),
    /// Address is blank.
    BlankAddress,
    /// Two claims in one set share a title.
    DuplicateClaimTitle(Title),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "person id must not be nil"),
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names contain only alphanumeric characters and spaces"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers contain only digits and are at least 3 digits long"
            ),
            Self::InvalidEmail(value) => {
                write!(f, "invalid email `{value}`: expected local-part@domain")
            }
            Self::BlankAddress => write!(f, "address must not be blank"),
            Self::DuplicateClaimTitle(title) => {
                write!(f, "claim title `{title}` appears more than once")
            }
        }
    }
}

impl Error for PersonValidationError {}

fn validated(
    value: String,
    pattern: &Regex,
    to_error: fn(String) -> PersonValidationError,
) -> Result<String, PersonValidationError> {
    let trimmed = value.trim();
    if !pattern.is_match(trimmed) {
        return Err(to_error(value));
    }
    Ok(trimmed.to_string())
}

/// Person display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        validated(value.into(), &NAME_RE, PersonValidationError::InvalidName).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether `word` equals one of the name's words, ignoring case.
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|part| part.eq_ignore_ascii_case(word))
    }
}

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        validated(value.into(), &PHONE_RE, PersonValidationError::InvalidPhone).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        validated(value.into(), &EMAIL_RE, PersonValidationError::InvalidEmail).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Free-form postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PersonValidationError::BlankAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

macro_rules! string_conversions {
    ($($ty:ident),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = PersonValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.0.as_str())
                }
            }
        )+
    };
}

string_conversions!(Name, Phone, Email, Address);

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    claims: BTreeSet<Claim>,
}

#[derive(Deserialize)]
struct RawPerson {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    claims: Vec<Claim>,
}

impl TryFrom<RawPerson> for Person {
    type Error = PersonValidationError;

    fn try_from(value: RawPerson) -> Result<Self, Self::Error> {
        Person::with_id(value.id, value.name, value.phone, value.email, value.address)?
            .with_claims(value.claims)
    }
}

impl Person {
    /// Creates a person with a generated stable id and no claims.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            address,
            claims: BTreeSet::new(),
        }
    }

    /// Creates a person with a caller-provided stable id.
    ///
    /// Used by seed data and deserialization where identity already exists.
    ///
    /// # Errors
    /// - Returns `PersonValidationError::NilId` when `id` is nil.
    pub fn with_id(
        id: PersonId,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
    ) -> Result<Self, PersonValidationError> {
        if id.is_nil() {
            return Err(PersonValidationError::NilId);
        }
        Ok(Self {
            id,
            ..Self::new(name, phone, email, address)
        })
    }

    /// Returns a copy of this person with the claim set replaced.
    ///
    /// # Errors
    /// - Returns `PersonValidationError::DuplicateClaimTitle` when two claims
    ///   share a title.
    pub fn with_claims(
        &self,
        claims: impl IntoIterator<Item = Claim>,
    ) -> Result<Self, PersonValidationError> {
        let mut titles = HashSet::new();
        let mut next = BTreeSet::new();
        for claim in claims {
            if !titles.insert(claim.title().clone()) {
                return Err(PersonValidationError::DuplicateClaimTitle(
                    claim.title().clone(),
                ));
            }
            next.insert(claim);
        }

        Ok(Self {
            claims: next,
            ..self.clone()
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Claims sorted by title.
    pub fn claims(&self) -> &BTreeSet<Claim> {
        &self.claims
    }

    /// Looks up one claim by its title.
    pub fn claim(&self, title: &Title) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.title() == title)
    }

    /// Identity rule used for duplicate detection.
    ///
    /// Two records are the same person when they share an id or their names
    /// match ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.id == other.id || self.name.0.eq_ignore_ascii_case(other.name.0.as_str())
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.claims.is_empty() {
            write!(f, "; Claims: ")?;
            for (idx, claim) in self.claims.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[{claim}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Email, Name, Phone};

    #[test]
    fn name_word_match_ignores_case_and_partial_words() {
        let name = Name::new("Alice Pauline").unwrap();
        assert!(name.contains_word_ignore_case("alice"));
        assert!(name.contains_word_ignore_case("PAULINE"));
        assert!(!name.contains_word_ignore_case("Ali"));
        assert!(!name.contains_word_ignore_case(" "));
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9a11").is_err());
    }

    #[test]
    fn email_grammar_matches_address_book_rules() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("a+b_c.d-e@mail.example-site.io").is_ok());
        assert!(Email::new("alice@example.c").is_err());
        assert!(Email::new(".alice@example.com").is_err());
        assert!(Email::new("alice.example.com").is_err());
    }
}
