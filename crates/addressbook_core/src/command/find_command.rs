//! Narrows the filtered view by name keywords.

use crate::command::messages::persons_listed_overview;
use crate::command::{Command, CommandError, CommandResult};
use crate::repo::model_manager::{Model, PersonFilter};
use log::debug;

pub const COMMAND_WORD: &str = "find";
pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

/// Shows persons whose name contains any keyword as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::NameKeywords(self.keywords.clone()));
        let count = model.filtered_person_list().len();
        debug!(
            "event=find_command module=command status=ok keyword_count={} match_count={count}",
            self.keywords.len()
        );
        Ok(CommandResult::new(persons_listed_overview(count)))
    }
}
