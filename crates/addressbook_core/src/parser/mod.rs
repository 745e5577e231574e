//! Command-line parsing into typed commands.
//!
//! # Responsibility
//! - Map one line of user input to a `ParsedCommand`.
//! - Report malformed input with the usage text of the offending command.
//!
//! # Invariants
//! - Parsing never touches the model.
//! - When a prefix is repeated, the last value wins.

pub mod tokenizer;

use crate::command::claim_command::{self, ClaimCommand, EditClaimDescriptor};
use crate::command::find_command::{self, FindCommand};
use crate::command::list_command::{self, ListCommand};
use crate::command::messages::{MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_UNKNOWN_COMMAND};
use crate::command::{Command, CommandError, CommandResult};
use crate::model::claim::{ClaimValidationError, Title};
use crate::model::index::Index;
use crate::repo::model_manager::Model;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokenizer::{tokenize, PREFIX_DESCRIPTION, PREFIX_TITLE};

pub const MESSAGE_HELP: &str = "Commands: claim, list, find";

/// Parse failures for user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the usage of its command.
    InvalidFormat(&'static str),
    /// First word is not a known command.
    UnknownCommand(String),
    /// Index is not a positive integer.
    InvalidIndex(String),
    /// Claim title failed validation.
    InvalidTitle(ClaimValidationError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(usage) => write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}\n{usage}"),
            Self::UnknownCommand(word) => write!(f, "{MESSAGE_UNKNOWN_COMMAND}: {word}"),
            Self::InvalidIndex(raw) => {
                write!(f, "Index is not a non-zero unsigned integer: `{raw}`")
            }
            Self::InvalidTitle(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ClaimValidationError> for ParseError {
    fn from(value: ClaimValidationError) -> Self {
        Self::InvalidTitle(value)
    }
}

/// Any command the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Claim(ClaimCommand),
    List(ListCommand),
    Find(FindCommand),
}

impl Command for ParsedCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Claim(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
        }
    }
}

/// Parses one line of user input.
pub fn parse_command(input: &str) -> Result<ParsedCommand, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat(MESSAGE_HELP));
    }

    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match word {
        claim_command::COMMAND_WORD => parse_claim(args).map(ParsedCommand::Claim),
        list_command::COMMAND_WORD => Ok(ParsedCommand::List(ListCommand)),
        find_command::COMMAND_WORD => parse_find(args).map(ParsedCommand::Find),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parses `INDEX t/TITLE [d/DESCRIPTION]`.
fn parse_claim(args: &str) -> Result<ClaimCommand, ParseError> {
    let tokens = tokenize(args, &[PREFIX_TITLE, PREFIX_DESCRIPTION]);
    let Some(raw_title) = tokens.value(PREFIX_TITLE) else {
        return Err(ParseError::InvalidFormat(claim_command::MESSAGE_USAGE));
    };
    if tokens.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(claim_command::MESSAGE_USAGE));
    }

    let index = parse_index(tokens.preamble())?;
    let title = Title::new(raw_title)?;
    let descriptor = match tokens.value(PREFIX_DESCRIPTION) {
        Some(description) => EditClaimDescriptor::with_description(title, description),
        None => EditClaimDescriptor::new(title),
    };
    Ok(ClaimCommand::new(index, descriptor))
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords = args
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(find_command::MESSAGE_USAGE));
    }
    Ok(FindCommand::new(keywords))
}

fn parse_index(raw: &str) -> Result<Index, ParseError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|value| Index::from_one_based(value).ok())
        .ok_or_else(|| ParseError::InvalidIndex(raw.to_string()))
}
