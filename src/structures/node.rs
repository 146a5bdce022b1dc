//! Node types for slab-based structure storage.
//!
//! ## Design
//!
//! Each structure owns a `Slab` of its own nodes. A node wraps a
//! [`SharedRecord`] plus links to other nodes in the *same* slab. Links are
//! slab keys (`usize`), not references, so every node has exactly one owner
//! (its structure) and exactly one parent or predecessor.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert and lookup
//!
//! Nothing is ever removed, so keys are never reused.

use crate::types::SharedRecord;

/// Binary search tree node.
///
/// ```text
/// TreeNode {
///     record: Arc<Record>
///     left:   Option<usize>   keys strictly less
///     right:  Option<usize>   keys greater or equal
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// The record stored at this node
    pub record: SharedRecord,

    /// Left child (slab key), identifiers strictly less than this node's
    pub left: Option<usize>,

    /// Right child (slab key), identifiers greater than or equal
    pub right: Option<usize>,
}

impl TreeNode {
    /// Create a new leaf node
    ///
    /// # Example
    ///
    /// ```
    /// use course_catalog::structures::TreeNode;
    /// use course_catalog::types::Record;
    ///
    /// let node = TreeNode::new(Record::new("CSCI101", "Intro", vec![]).shared());
    ///
    /// assert!(node.is_leaf());
    /// ```
    #[inline]
    pub fn new(record: SharedRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Get the node's key
    #[inline]
    pub fn identifier(&self) -> &str {
        self.record.identifier()
    }
}

/// Singly linked list node.
///
/// `next` points towards the tail (newer records).
#[derive(Debug, Clone)]
pub struct ListNode {
    /// The record stored at this node
    pub record: SharedRecord,

    /// Next node in insertion order (slab key)
    /// None if this is the tail
    pub next: Option<usize>,
}

impl ListNode {
    /// Create a new node (not yet linked)
    #[inline]
    pub fn new(record: SharedRecord) -> Self {
        Self { record, next: None }
    }

    /// Check if this node is the last one in its list
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Get the node's key
    #[inline]
    pub fn identifier(&self) -> &str {
        self.record.identifier()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
