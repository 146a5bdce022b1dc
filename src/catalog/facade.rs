//! Facade unifying the three structures behind one API.
//!
//! ## Architecture
//!
//! The facade holds at most one loaded [`Catalog`]. Loading replaces it
//! wholesale; there is no incremental update.
//!
//! - **Tree**: sorted output is the native in-order walk
//! - **List**: native order is insertion order, sorted explicitly
//! - **Index**: native order is hash layout, sorted explicitly
//!
//! ## Graceful Degradation
//!
//! Before anything is loaded every sorted view is empty and every find is
//! `None`. Only benchmarking treats an unloaded facade as an error.
//!
//! ## Example
//!
//! ```
//! use course_catalog::catalog::CatalogFacade;
//! use course_catalog::types::Record;
//!
//! let mut facade = CatalogFacade::new();
//! facade.load(vec![
//!     Record::new("CSCI101", "Intro", vec![]),
//!     Record::new("CSCI201", "Data Structures", vec!["CSCI101".into()]),
//!     Record::new("CSCI100", "Orientation", vec![]),
//! ]);
//!
//! let ids: Vec<_> = facade.sorted_by_tree().iter().map(|r| r.identifier().to_string()).collect();
//! assert_eq!(ids, ["CSCI100", "CSCI101", "CSCI201"]);
//! assert!(facade.find_in_tree("CSCI999").is_none());
//! ```

use tracing::info;

use crate::bench::{BenchmarkHarness, BenchmarkReport, Clock};
use crate::catalog::{build, digest, Catalog};
use crate::error::CatalogError;
use crate::types::{sort_by_identifier, SharedRecord, StructureKind};

/// Owned catalog state with per-structure sort and find.
#[derive(Debug, Clone, Default)]
pub struct CatalogFacade {
    /// Loaded structures, if any
    catalog: Option<Catalog>,
}

impl CatalogFacade {
    /// Create a facade with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Build fresh structures from `records`, replacing any loaded ones
    ///
    /// # Returns
    ///
    /// The number of records ingested (duplicates included)
    pub fn load<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<SharedRecord>,
    {
        let catalog = build(records);
        let ingested = catalog.ingested();
        info!(
            records = ingested,
            distinct = catalog.index.len(),
            "catalog loaded"
        );
        self.catalog = Some(catalog);
        ingested
    }

    /// Check if a dataset is loaded
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Number of distinct identifiers loaded (0 when unloaded)
    pub fn len(&self) -> usize {
        self.catalog.as_ref().map_or(0, |c| c.index.len())
    }

    /// Check if no records are loaded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the loaded structures
    #[inline]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Drop the loaded structures
    pub fn clear(&mut self) {
        self.catalog = None;
    }

    // ========================================================================
    // Sorted Views
    // ========================================================================

    /// All records in ascending identifier order, via in-order traversal
    pub fn sorted_by_tree(&self) -> Vec<SharedRecord> {
        self.catalog
            .as_ref()
            .map(|c| c.tree.in_order())
            .unwrap_or_default()
    }

    /// All records in ascending identifier order, via list traversal + sort
    pub fn sorted_by_list(&self) -> Vec<SharedRecord> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        let mut records = catalog.list.traverse();
        sort_by_identifier(&mut records);
        records
    }

    /// All records in ascending identifier order, via index values + sort
    pub fn sorted_by_index(&self) -> Vec<SharedRecord> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        let mut records: Vec<SharedRecord> = catalog.index.all().cloned().collect();
        sort_by_identifier(&mut records);
        records
    }

    /// Sorted view from the given structure
    pub fn sorted(&self, kind: StructureKind) -> Vec<SharedRecord> {
        match kind {
            StructureKind::Tree => self.sorted_by_tree(),
            StructureKind::List => self.sorted_by_list(),
            StructureKind::Index => self.sorted_by_index(),
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find by identifier in the tree (first-inserted duplicate wins)
    pub fn find_in_tree(&self, identifier: &str) -> Option<&SharedRecord> {
        self.catalog.as_ref()?.tree.find(identifier)
    }

    /// Find by identifier in the list (first-inserted duplicate wins)
    pub fn find_in_list(&self, identifier: &str) -> Option<&SharedRecord> {
        self.catalog.as_ref()?.list.find(identifier)
    }

    /// Find by identifier in the index (last-inserted duplicate wins)
    pub fn find_in_index(&self, identifier: &str) -> Option<&SharedRecord> {
        self.catalog.as_ref()?.index.find(identifier)
    }

    /// Find by identifier in the given structure
    pub fn find(&self, kind: StructureKind, identifier: &str) -> Option<&SharedRecord> {
        match kind {
            StructureKind::Tree => self.find_in_tree(identifier),
            StructureKind::List => self.find_in_list(identifier),
            StructureKind::Index => self.find_in_index(identifier),
        }
    }

    // ========================================================================
    // Digests
    // ========================================================================

    /// SHA-256 of the sorted view from the given structure
    pub fn digest(&self, kind: StructureKind) -> [u8; 32] {
        digest::digest(&self.sorted(kind))
    }

    /// Check that all three sorted views are identical
    ///
    /// Always true for unique identifiers. Duplicate identifiers make the
    /// index hold fewer records, so the views diverge.
    pub fn is_consistent(&self) -> bool {
        let tree = self.digest(StructureKind::Tree);
        tree == self.digest(StructureKind::List) && tree == self.digest(StructureKind::Index)
    }

    // ========================================================================
    // Benchmarking
    // ========================================================================

    /// Benchmark all three structures on the loaded dataset
    ///
    /// The dataset is the index's records, one per distinct identifier.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::EmptyDataset`] - nothing is loaded, or the load was empty
    /// * [`CatalogError::ZeroTrials`] - `trials` is zero
    pub fn benchmark_current<C: Clock>(
        &self,
        harness: &BenchmarkHarness<C>,
        trials: usize,
    ) -> Result<BenchmarkReport, CatalogError> {
        let catalog = self.catalog.as_ref().ok_or(CatalogError::EmptyDataset)?;
        let dataset: Vec<SharedRecord> = catalog.index.all().cloned().collect();
        harness.measure(&dataset, trials)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
