//! Resets the filtered view to every person.

use crate::command::messages::MESSAGE_LISTED_ALL_PERSONS;
use crate::command::{Command, CommandError, CommandResult};
use crate::repo::model_manager::{Model, PersonFilter};

pub const COMMAND_WORD: &str = "list";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::All);
        Ok(CommandResult::new(MESSAGE_LISTED_ALL_PERSONS))
    }
}
