//! Claim add/edit/remove command.
//!
//! # Responsibility
//! - Merge one `EditClaimDescriptor` into a person's claim set.
//! - Install the resulting person into the model with a single write.
//!
//! # Invariants
//! - The merge decision (`decide`) is pure and never touches the model.
//! - On success the model sees exactly one `set_person` call; on failure none.
//! - A descriptor without a description removes an existing claim and is
//!   rejected when no claim with that title exists.

use crate::command::{Command, CommandError, CommandResult};
use crate::model::claim::{Claim, ClaimValidationError, Title};
use crate::model::index::Index;
use crate::repo::model_manager::Model;
use log::info;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

pub const COMMAND_WORD: &str = "claim";
pub const MESSAGE_USAGE: &str = "claim: Adds, edits or removes a claim of the person identified \
by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) t/TITLE [d/DESCRIPTION]\n\
Omitting DESCRIPTION removes the claim with that title.\n\
Example: claim 1 t/Bob d/Bob owes $100";

pub const MESSAGE_CLAIM_ADDED_SUCCESS: &str = "New claim added";
pub const MESSAGE_CLAIM_REMOVED_SUCCESS: &str = "Claim removed";
pub const MESSAGE_CLAIM_EDITED_SUCCESS: &str = "Claim edited";

/// Failure text for a claim creation attempt without a description.
pub fn incomplete_claim_message(title: &Title) -> String {
    format!("Claim {title} does not exist yet; a description is required to create it")
}

/// Field edits for one claim, keyed by title.
///
/// A blank description is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditClaimDescriptor {
    title: Title,
    description: Option<String>,
}

impl EditClaimDescriptor {
    /// Descriptor carrying only a title.
    pub fn new(title: Title) -> Self {
        Self {
            title,
            description: None,
        }
    }

    /// Descriptor carrying a title and a replacement description.
    pub fn with_description(title: Title, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        Self {
            title,
            description: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<&Claim> for EditClaimDescriptor {
    fn from(claim: &Claim) -> Self {
        Self::with_description(claim.title().clone(), claim.description())
    }
}

/// Result of merging a descriptor into a claim set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// No claim had the title; a new one is created.
    Added(Claim),
    /// The claim with the title is dropped.
    Removed(Claim),
    /// The claim with the title gets a new description.
    Edited { previous: Claim, updated: Claim },
    /// No claim had the title and there is nothing to create it from.
    Rejected(Title),
}

impl ClaimOutcome {
    /// Stable outcome name for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Removed(_) => "removed",
            Self::Edited { .. } => "edited",
            Self::Rejected(_) => "rejected",
        }
    }

    /// Claim set after applying this outcome to `existing`.
    ///
    /// `Rejected` leaves the set unchanged.
    pub fn next_claims(&self, existing: &BTreeSet<Claim>) -> BTreeSet<Claim> {
        let mut next = existing.clone();
        match self {
            Self::Added(claim) => {
                next.insert(claim.clone());
            }
            Self::Removed(claim) => {
                next.remove(claim);
            }
            Self::Edited { previous, updated } => {
                next.remove(previous);
                next.insert(updated.clone());
            }
            Self::Rejected(_) => {}
        }
        next
    }
}

impl Display for ClaimOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(claim) => write!(f, "{MESSAGE_CLAIM_ADDED_SUCCESS}: {claim}"),
            Self::Removed(claim) => write!(f, "{MESSAGE_CLAIM_REMOVED_SUCCESS}: {claim}"),
            Self::Edited { updated, .. } => write!(f, "{MESSAGE_CLAIM_EDITED_SUCCESS}: {updated}"),
            Self::Rejected(title) => f.write_str(incomplete_claim_message(title).as_str()),
        }
    }
}

/// Decides how `descriptor` changes a claim set.
///
/// | claim with title exists | description given | outcome    |
/// |-------------------------|-------------------|------------|
/// | no                      | yes               | `Added`    |
/// | no                      | no                | `Rejected` |
/// | yes                     | no                | `Removed`  |
/// | yes                     | yes               | `Edited`   |
pub fn decide(
    existing: &BTreeSet<Claim>,
    descriptor: &EditClaimDescriptor,
) -> Result<ClaimOutcome, ClaimValidationError> {
    let current = existing
        .iter()
        .find(|claim| claim.title() == descriptor.title());

    let outcome = match (current, descriptor.description()) {
        (None, Some(description)) => {
            ClaimOutcome::Added(Claim::new(descriptor.title().clone(), description)?)
        }
        (None, None) => ClaimOutcome::Rejected(descriptor.title().clone()),
        (Some(previous), None) => ClaimOutcome::Removed(previous.clone()),
        (Some(previous), Some(description)) => ClaimOutcome::Edited {
            previous: previous.clone(),
            updated: previous.with_description(description)?,
        },
    };
    Ok(outcome)
}

/// Adds, edits or removes one claim of the person at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimCommand {
    index: Index,
    descriptor: EditClaimDescriptor,
}

impl ClaimCommand {
    pub fn new(index: Index, descriptor: EditClaimDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditClaimDescriptor {
        &self.descriptor
    }
}

impl Command for ClaimCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|person| (*person).clone());
        let Some(target) = target else {
            info!(
                "event=claim_command module=command status=rejected error_code=invalid_index index={}",
                self.index
            );
            return Err(CommandError::InvalidIndex);
        };

        let outcome = decide(target.claims(), &self.descriptor)?;
        if let ClaimOutcome::Rejected(title) = &outcome {
            info!(
                "event=claim_command module=command status=rejected error_code=incomplete_claim person_id={}",
                target.id()
            );
            return Err(CommandError::IncompleteClaim(title.clone()));
        }

        let edited = target.with_claims(outcome.next_claims(target.claims()))?;
        model.set_person(&target, edited)?;

        info!(
            "event=claim_command module=command status=ok outcome={} person_id={}",
            outcome.kind(),
            target.id()
        );
        Ok(CommandResult::new(outcome.to_string()))
    }
}
