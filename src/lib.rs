//! # Course Catalog
//!
//! In-memory course catalog stored three ways, with a harness comparing
//! them.
//!
//! ## Architecture
//!
//! - **Types**: `Record` (identifier, title, prerequisites) and `StructureKind`
//! - **Structures**: `OrderedTree` (BST), `SequentialList` (linked list), `DirectIndex` (hash map)
//! - **Catalog**: Builds all three from one record sequence; `CatalogFacade` answers sort/find
//! - **Bench**: Times build-and-sort workloads across structures and dataset sizes
//!
//! ## Design Principles
//!
//! 1. **Same data, three shapes**: every structure is fed the same records in the same order
//! 2. **Shared records, private nodes**: records are `Arc`-shared; nodes belong to one structure
//! 3. **Absence is not an error**: lookups return `Option`, empty structures sort to empty
//! 4. **Synchronous Execution**: no locking, no async, no background work
//!
//! ## Duplicate Identifiers
//!
//! The tree and the list keep every duplicate and find the first inserted.
//! The index keeps only the last inserted. This divergence is intentional
//! and covered by tests.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Record, StructureKind
pub mod types;

/// Catalog structures: tree, list, index
pub mod structures;

/// Building and querying all three structures together
pub mod catalog;

/// Benchmark harness: clocks, synthetic data, reports
pub mod bench;

/// Delimited-text ingestion
pub mod loader;

/// Runtime settings
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use bench::{BenchmarkHarness, BenchmarkReport, ScalingTable};
pub use catalog::{build, Catalog, CatalogBuilder, CatalogFacade};
pub use error::{CatalogError, LoadError};
pub use structures::{DirectIndex, OrderedTree, SequentialList};
pub use types::{Record, SharedRecord, StructureKind};
