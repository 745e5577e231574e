//! Ordered in-memory contact collection.
//!
//! # Responsibility
//! - Hold persons in display order.
//! - Enforce the duplicate-person rule on every write.
//!
//! # Invariants
//! - No two entries are the same person (`Person::is_same_person`).
//! - `set_person` replaces exactly one entry and keeps its position.

use crate::model::person::{Person, PersonId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Address book write errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Target person is not present in the address book.
    NotFound(PersonId),
    /// Write would make two entries the same person.
    DuplicatePerson(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::DuplicatePerson(name) => {
                write!(f, "this person already exists in the address book: {name}")
            }
        }
    }
}

impl Error for RepoError {}

/// Ordered, duplicate-free list of persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book from persons in display order.
    ///
    /// # Errors
    /// - Returns `RepoError::DuplicatePerson` on the first duplicate.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> RepoResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns whether an entry is the same person as `person`.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|existing| existing.is_same_person(person))
    }

    /// Appends one person.
    pub fn add_person(&mut self, person: Person) -> RepoResult<()> {
        if self.has_person(&person) {
            return Err(RepoError::DuplicatePerson(person.name().to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces the entry equal to `target` with `edited`, keeping its position.
    ///
    /// # Errors
    /// - Returns `RepoError::NotFound` when no entry equals `target`.
    /// - Returns `RepoError::DuplicatePerson` when `edited` is the same person
    ///   as a different entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> RepoResult<()> {
        let position = self
            .persons
            .iter()
            .position(|existing| existing == target)
            .ok_or(RepoError::NotFound(target.id()))?;

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(idx, existing)| idx != position && existing.is_same_person(&edited));
        if clashes {
            return Err(RepoError::DuplicatePerson(edited.name().to_string()));
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Removes the entry equal to `target`.
    pub fn remove_person(&mut self, target: &Person) -> RepoResult<()> {
        let position = self
            .persons
            .iter()
            .position(|existing| existing == target)
            .ok_or(RepoError::NotFound(target.id()))?;
        self.persons.remove(position);
        Ok(())
    }
}
