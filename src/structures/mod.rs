//! Catalog structures: three interchangeable stores for the same records.
//!
//! ## Components
//!
//! - [`OrderedTree`]: Unbalanced binary search tree keyed by identifier
//! - [`SequentialList`]: Singly linked list in insertion order
//! - [`DirectIndex`]: Hash map from identifier to record
//! - [`TreeNode`] / [`ListNode`]: Slab-stored nodes for the tree and list
//!
//! ## Complexity
//!
//! | Operation | Tree       | List | Index |
//! |-----------|------------|------|-------|
//! | Insert    | O(log n)*  | O(1) | O(1)  |
//! | Find      | O(log n)*  | O(n) | O(1)  |
//! | Sorted    | O(n)       | O(n log n) | O(n log n) |
//!
//! *Average for random input; sorted input degrades the tree to O(n).
//!
//! ## Duplicate Identifiers
//!
//! No structure rejects a duplicate identifier, but they disagree on which
//! record wins:
//!
//! - Tree and list keep every record; `find` returns the first inserted
//! - Index keeps only the last inserted; `find` returns that one
//!
//! ## Ownership
//!
//! Each structure owns its nodes outright. The same [`SharedRecord`] may be
//! referenced from all three, but no node is ever shared.
//!
//! [`SharedRecord`]: crate::types::SharedRecord

pub mod index;
pub mod list;
pub mod node;
pub mod tree;

pub use index::DirectIndex;
pub use list::SequentialList;
pub use node::{ListNode, TreeNode};
pub use tree::OrderedTree;
