//! Domain model for contacts and their claims.
//!
//! # Responsibility
//! - Define canonical value types used by the model store and commands.
//! - Validate user-provided field values at construction time.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - Values are immutable; edits produce new values.

pub mod claim;
pub mod index;
pub mod person;
pub mod sample_data;
