//! In-memory contact store.
//!
//! # Responsibility
//! - Own the canonical person collection and its filtered view.
//! - Define the `Model` contract commands are written against.
//!
//! # Invariants
//! - Writes replace whole person values; entries are never edited in place.
//! - Store APIs return semantic errors (`NotFound`, `DuplicatePerson`).

pub mod address_book;
pub mod model_manager;
