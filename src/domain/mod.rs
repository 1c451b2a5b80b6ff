//! Core data structures.
//!
//! Everything the processor touches is a typed record defined here;
//! the live shapes of the remote catalog's responses never leave the
//! catalog boundary.

pub mod item;
pub mod links;
pub mod outcome;

pub use item::{CatalogItem, MediaType};
pub use links::{IdentifierLink, Provider};
pub use outcome::{FailureRecord, ItemOutcome, RunResult, SkipReason};
