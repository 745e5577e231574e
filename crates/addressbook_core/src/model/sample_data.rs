//! Deterministic seed contacts.
//!
//! Ids are fixed so that two independently built seed books compare equal.

use crate::model::claim::{Claim, ClaimValidationError, Title};
use crate::model::person::{Address, Email, Name, Person, PersonValidationError, Phone};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const SAMPLE_ID_BASE: u128 = 0x5eed_0000_0000_4000_8000_0000_0000_0000;

/// Failure while building seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleDataError {
    Person(PersonValidationError),
    Claim(ClaimValidationError),
}

impl Display for SampleDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person(err) => write!(f, "invalid sample person: {err}"),
            Self::Claim(err) => write!(f, "invalid sample claim: {err}"),
        }
    }
}

impl Error for SampleDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Person(err) => Some(err),
            Self::Claim(err) => Some(err),
        }
    }
}

impl From<PersonValidationError> for SampleDataError {
    fn from(value: PersonValidationError) -> Self {
        Self::Person(value)
    }
}

impl From<ClaimValidationError> for SampleDataError {
    fn from(value: ClaimValidationError) -> Self {
        Self::Claim(value)
    }
}

const SAMPLE_CONTACTS: &[(&str, &str, &str, &str)] = &[
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
    ),
];

/// Returns the seed contacts in display order.
///
/// The first contact carries no claims; the third carries one.
pub fn sample_persons() -> Result<Vec<Person>, SampleDataError> {
    let mut persons = Vec::with_capacity(SAMPLE_CONTACTS.len());
    for (offset, (name, phone, email, address)) in SAMPLE_CONTACTS.iter().enumerate() {
        let person = Person::with_id(
            Uuid::from_u128(SAMPLE_ID_BASE + offset as u128 + 1),
            Name::new(*name)?,
            Phone::new(*phone)?,
            Email::new(*email)?,
            Address::new(*address)?,
        )?;
        persons.push(person);
    }

    if let Some(person) = persons.get_mut(2) {
        let claim = Claim::new(Title::new("Medical")?, "Clinic visit pending approval")?;
        *person = person.with_claims([claim])?;
    }

    Ok(persons)
}

#[cfg(test)]
mod tests {
    use super::sample_persons;

    #[test]
    fn sample_persons_are_stable_across_calls() {
        let first = sample_persons().expect("seed data is valid");
        let second = sample_persons().expect("seed data is valid");
        assert_eq!(first, second);
        assert!(first[0].claims().is_empty());
        assert_eq!(first[2].claims().len(), 1);
    }
}
