//! Hash-backed direct index from identifier to record.
//!
//! Unlike the tree and the list, the index enforces key uniqueness: adding
//! a record whose identifier is already present replaces the earlier
//! record (last write wins).

use std::collections::HashMap;

use crate::types::SharedRecord;

/// Identifier to record mapping with O(1) amortized insert and lookup.
#[derive(Debug, Clone, Default)]
pub struct DirectIndex {
    /// Identifier -> record
    by_identifier: HashMap<String, SharedRecord>,
}

impl DirectIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_identifier: HashMap::with_capacity(capacity),
        }
    }

    /// Get the number of distinct identifiers
    #[inline]
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// Check if the index is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Add a record under its identifier
    ///
    /// # Returns
    ///
    /// The record previously stored under the same identifier, if any
    ///
    /// # Example
    ///
    /// ```
    /// use course_catalog::structures::DirectIndex;
    /// use course_catalog::types::Record;
    ///
    /// let mut index = DirectIndex::new();
    /// index.add(Record::new("CSCI101", "Intro", vec![]).shared());
    /// let replaced = index.add(Record::new("CSCI101", "Intro to CS", vec![]).shared());
    ///
    /// assert_eq!(replaced.unwrap().title(), "Intro");
    /// assert_eq!(index.find("CSCI101").unwrap().title(), "Intro to CS");
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn add(&mut self, record: SharedRecord) -> Option<SharedRecord> {
        self.by_identifier
            .insert(record.identifier().to_string(), record)
    }

    /// Look up a record by identifier
    #[inline]
    pub fn find(&self, identifier: &str) -> Option<&SharedRecord> {
        self.by_identifier.get(identifier)
    }

    /// Check if an identifier is present
    #[inline]
    pub fn contains(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Iterate all records in hash-layout order (not insertion order)
    pub fn all(&self) -> impl ExactSizeIterator<Item = &SharedRecord> + '_ {
        self.by_identifier.values()
    }
}

impl FromIterator<SharedRecord> for DirectIndex {
    fn from_iter<I: IntoIterator<Item = SharedRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.add(record);
        }
        index
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
