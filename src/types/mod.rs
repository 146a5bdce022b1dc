//! Core data types for the course catalog
//!
//! ## Types
//!
//! - [`Record`]: A course entry (identifier, title, prerequisites)
//! - [`SharedRecord`]: `Arc<Record>`, the form held by every structure
//! - [`StructureKind`]: Tree, List or Index
//!
//! ## Ordering
//!
//! Records are ordered lexicographically by identifier (byte-wise string
//! comparison). Titles and prerequisites never affect ordering.

mod kind;
mod record;

// Re-export all types at module level
pub use kind::{StructureKind, UnknownStructure};
pub use record::{sort_by_identifier, Record, SharedRecord};
