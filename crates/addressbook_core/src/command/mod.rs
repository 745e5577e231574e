//! Command objects executed against the model.
//!
//! # Responsibility
//! - Define the `Command` contract and its single error channel.
//! - Keep each user action a small value that can be compared and replayed.
//!
//! # Invariants
//! - A failed command leaves the model unchanged.
//! - Result messages are user-facing text; log events never carry claim
//!   descriptions.

pub mod claim_command;
pub mod find_command;
pub mod list_command;
pub mod messages;

use crate::model::claim::{ClaimValidationError, Title};
use crate::model::person::PersonValidationError;
use crate::repo::address_book::RepoError;
use crate::repo::model_manager::Model;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Executable user action.
pub trait Command {
    /// Runs the command against `model` and returns the feedback message.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// Successful command feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        self.feedback_to_user.as_str()
    }
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.feedback_to_user.as_str())
    }
}

/// Errors surfaced by `Command::execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index does not resolve within the filtered view.
    InvalidIndex,
    /// New claim requested without a description.
    IncompleteClaim(Title),
    /// Claim value could not be built.
    InvalidClaim(ClaimValidationError),
    /// Person value could not be rebuilt.
    InvalidPerson(PersonValidationError),
    /// Model write failure.
    Repo(RepoError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex => f.write_str(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX),
            Self::IncompleteClaim(title) => {
                f.write_str(claim_command::incomplete_claim_message(title).as_str())
            }
            Self::InvalidClaim(err) => write!(f, "{err}"),
            Self::InvalidPerson(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidClaim(err) => Some(err),
            Self::InvalidPerson(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InvalidIndex | Self::IncompleteClaim(_) => None,
        }
    }
}

impl From<ClaimValidationError> for CommandError {
    fn from(value: ClaimValidationError) -> Self {
        Self::InvalidClaim(value)
    }
}

impl From<PersonValidationError> for CommandError {
    fn from(value: PersonValidationError) -> Self {
        Self::InvalidPerson(value)
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
