//! Populate all three structures from one record sequence.

use tracing::debug;

use crate::structures::{DirectIndex, OrderedTree, SequentialList};
use crate::types::SharedRecord;

/// The three structures describing the same dataset.
///
/// With unique identifiers all three hold the same records. With duplicate
/// identifiers the index holds fewer (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Binary search tree view
    pub tree: OrderedTree,
    /// Linked list view (insertion order)
    pub list: SequentialList,
    /// Hash index view
    pub index: DirectIndex,
}

impl Catalog {
    /// Number of records ingested (duplicates included)
    #[inline]
    pub fn ingested(&self) -> usize {
        self.list.len()
    }
}

/// Incremental builder feeding tree, list and index in lockstep.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Create a builder with empty structures
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with storage pre-allocated for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            catalog: Catalog {
                tree: OrderedTree::with_capacity(capacity),
                list: SequentialList::with_capacity(capacity),
                index: DirectIndex::with_capacity(capacity),
            },
        }
    }

    /// Insert one record into the tree, the list and the index, in that order
    pub fn push(&mut self, record: SharedRecord) -> &mut Self {
        self.catalog.tree.insert(SharedRecord::clone(&record));
        self.catalog.list.append(SharedRecord::clone(&record));
        if let Some(previous) = self.catalog.index.add(record) {
            debug!(identifier = previous.identifier(), "duplicate identifier replaced in index");
        }
        self
    }

    /// Finish building
    pub fn finish(self) -> Catalog {
        self.catalog
    }
}

/// Build fresh structures from a record sequence.
///
/// # Example
///
/// ```
/// use course_catalog::catalog::build;
/// use course_catalog::types::Record;
///
/// let catalog = build(vec![
///     Record::new("CSCI201", "Data Structures", vec!["CSCI101".into()]),
///     Record::new("CSCI101", "Intro", vec![]),
/// ]);
///
/// assert_eq!(catalog.tree.len(), 2);
/// assert_eq!(catalog.list.len(), 2);
/// assert_eq!(catalog.index.len(), 2);
/// ```
pub fn build<I>(records: I) -> Catalog
where
    I: IntoIterator,
    I::Item: Into<SharedRecord>,
{
    let records = records.into_iter();
    let mut builder = CatalogBuilder::with_capacity(records.size_hint().0);

    for record in records {
        builder.push(record.into());
    }

    let catalog = builder.finish();
    debug!(
        records = catalog.ingested(),
        distinct = catalog.index.len(),
        tree_height = catalog.tree.height(),
        "catalog built"
    );
    catalog
}

// ============================================================================
// Unit Tests
// ============================================================================
