//! Model contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose the address book plus a filtered view to commands.
//! - Route writes through `AddressBook` so duplicate rules always apply.
//!
//! # Invariants
//! - The filtered view is derived from the address book on every read; it
//!   never holds copies of persons.
//! - Index-based commands resolve against `filtered_person_list`.

use crate::model::person::Person;
use crate::repo::address_book::{AddressBook, RepoResult};
use log::debug;

/// Predicate selecting which persons the filtered view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    /// Every person in the address book.
    #[default]
    All,
    /// Persons whose name contains any keyword as a whole word.
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| person.name().contains_word_ignore_case(keyword)),
        }
    }
}

/// Store contract consumed by commands.
pub trait Model {
    /// Full, unfiltered address book.
    fn address_book(&self) -> &AddressBook;
    /// Returns whether the same person already exists.
    fn has_person(&self, person: &Person) -> bool;
    /// Adds a person and resets the filtered view to show everyone.
    fn add_person(&mut self, person: Person) -> RepoResult<()>;
    /// Replaces `target` with `edited` in place.
    fn set_person(&mut self, target: &Person, edited: Person) -> RepoResult<()>;
    /// Persons currently visible, in address book order.
    fn filtered_person_list(&self) -> Vec<&Person>;
    /// Replaces the predicate behind the filtered view.
    fn update_filtered_person_list(&mut self, filter: PersonFilter);
}

/// In-memory `Model` backed by one `AddressBook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: PersonFilter::All,
        }
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> RepoResult<()> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> RepoResult<()> {
        let person_id = target.id();
        self.address_book.set_person(target, edited)?;
        debug!("event=person_replace module=model status=ok person_id={person_id}");
        Ok(())
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }
}
