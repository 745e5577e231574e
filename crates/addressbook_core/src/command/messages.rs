//! Fixed user-facing message catalogue shared by commands and the parser.

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_LISTED_ALL_PERSONS: &str = "Listed all persons";

/// Feedback for a filtered view showing `count` persons.
pub fn persons_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}
