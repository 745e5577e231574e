//! Core domain logic for the address book.
//! This crate is the single source of truth for contact and claim invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;

pub use command::claim_command::{decide, ClaimCommand, ClaimOutcome, EditClaimDescriptor};
pub use command::find_command::FindCommand;
pub use command::list_command::ListCommand;
pub use command::{Command, CommandError, CommandResult};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogConfig, LoggingError,
};
pub use model::claim::{Claim, ClaimValidationError, Title};
pub use model::index::{Index, IndexError};
pub use model::person::{Address, Email, Name, Person, PersonId, PersonValidationError, Phone};
pub use model::sample_data::{sample_persons, SampleDataError};
pub use parser::{parse_command, ParseError, ParsedCommand};
pub use repo::address_book::{AddressBook, RepoError, RepoResult};
pub use repo::model_manager::{Model, ModelManager, PersonFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
