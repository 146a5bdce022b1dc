//! Singly linked list of records in insertion order.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> record2 -> record3 -> tail (newest)
//! ```
//!
//! - New records are appended at the tail in O(1)
//! - Traversal and search walk from the head
//! - The list keeps a running count, so `len()` is O(1)
//!
//! Node data lives in a slab owned by the list; `head`/`tail` and each
//! node's `next` are slab keys.

use slab::Slab;

use crate::structures::ListNode;
use crate::types::SharedRecord;

/// A singly linked list of shared records.
#[derive(Debug, Clone, Default)]
pub struct SequentialList {
    /// Node storage, owned exclusively by this list
    nodes: Slab<ListNode>,

    /// Head of the list (oldest record, slab key)
    head: Option<usize>,

    /// Tail of the list (newest record, slab key)
    /// New records are linked after this node
    tail: Option<usize>,

    /// Number of records in the list
    len: usize,
}

impl SequentialList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with pre-allocated node storage
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Get the number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a record at the tail
    ///
    /// # Example
    ///
    /// ```
    /// use course_catalog::structures::SequentialList;
    /// use course_catalog::types::Record;
    ///
    /// let mut list = SequentialList::new();
    /// list.append(Record::new("CSCI201", "Data Structures", vec![]).shared());
    /// list.append(Record::new("CSCI101", "Intro", vec![]).shared());
    ///
    /// let ids: Vec<_> = list.iter().map(|r| r.identifier()).collect();
    /// assert_eq!(ids, ["CSCI201", "CSCI101"]);
    /// ```
    pub fn append(&mut self, record: SharedRecord) {
        let key = self.nodes.insert(ListNode::new(record));

        match self.tail {
            // Link the old tail to the new node
            Some(tail_key) => self.nodes[tail_key].next = Some(key),
            // Empty list - this is also the head
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Iterate records from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Collect all records in insertion order
    pub fn traverse(&self) -> Vec<SharedRecord> {
        self.iter().cloned().collect()
    }

    /// Linear search for the first record with the given identifier
    ///
    /// # Returns
    ///
    /// The earliest-appended match, or None
    pub fn find(&self, identifier: &str) -> Option<&SharedRecord> {
        self.iter().find(|record| record.identifier() == identifier)
    }

    /// Get the head record (oldest)
    #[inline]
    pub fn first(&self) -> Option<&SharedRecord> {
        self.head.map(|key| &self.nodes[key].record)
    }

    /// Get the tail record (newest)
    #[inline]
    pub fn last(&self) -> Option<&SharedRecord> {
        self.tail.map(|key| &self.nodes[key].record)
    }
}

/// Head-to-tail iterator over a [`SequentialList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a Slab<ListNode>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SharedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SequentialList {
    type Item = &'a SharedRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<SharedRecord> for SequentialList {
    fn from_iter<I: IntoIterator<Item = SharedRecord>>(iter: I) -> Self {
        let mut list = Self::new();
        for record in iter {
            list.append(record);
        }
        list
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
