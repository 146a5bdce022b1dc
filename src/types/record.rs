//! Course record held by every catalog structure.
//!
//! ## Identity vs. Equality
//!
//! Structures search and order records by `identifier` alone. Value
//! equality (`PartialEq`) compares every field, so two records sharing an
//! identifier but differing in title are *not* equal.
//!
//! ## Sharing
//!
//! Records are immutable once built. The structures hold them as
//! [`SharedRecord`] (`Arc<Record>`) so that a tree node, a list node and an
//! index slot all point at the same allocation.

use std::fmt;
use std::sync::Arc;

/// A record shared between structures without copying.
pub type SharedRecord = Arc<Record>;

/// A single course entry.
///
/// ## Example
///
/// ```
/// use course_catalog::types::Record;
///
/// let record = Record::new("CSCI201", "Data Structures", vec!["CSCI101".into()]);
/// assert_eq!(record.identifier(), "CSCI201");
/// assert_eq!(record.prerequisites(), ["CSCI101"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Course number, the search key (e.g. `CSCI201`)
    identifier: String,

    /// Display title
    title: String,

    /// Prerequisite course numbers
    /// May name courses that are not in the catalog
    prerequisites: Vec<String>,
}

impl Record {
    /// Create a new record
    ///
    /// # Arguments
    ///
    /// * `identifier` - Unique-intended course number
    /// * `title` - Display title
    /// * `prerequisites` - Prerequisite course numbers, in source order
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            prerequisites,
        }
    }

    /// Wrap the record for sharing between structures
    #[inline]
    pub fn shared(self) -> SharedRecord {
        Arc::new(self)
    }

    /// Get the identifier (search key)
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Get the title
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the prerequisite identifiers
    #[inline]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Check whether the course has no prerequisites
    #[inline]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | Prerequisites: ", self.identifier, self.title)?;
        if self.prerequisites.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&self.prerequisites.join(", "))
        }
    }
}

/// Sort records in ascending identifier order.
///
/// The sort is stable: records with equal identifiers keep their relative
/// order.
pub fn sort_by_identifier(records: &mut [SharedRecord]) {
    records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
}

// ============================================================================
// Unit Tests
// ============================================================================
