//! Unbalanced binary search tree keyed by record identifier.
//!
//! ## Ordering Rules
//!
//! - Identifiers strictly less than a node's go to its left subtree
//! - Everything else (including equal identifiers) goes right
//!
//! Ties routed right form a right-leaning chain in insertion order, so an
//! in-order walk yields the first-inserted duplicate first, and `find`
//! reaches it before any later duplicate.
//!
//! ## Complexity
//!
//! | Operation | Average | Worst (sorted input) |
//! |-----------|---------|----------------------|
//! | insert    | O(log n)| O(n)                 |
//! | find      | O(log n)| O(n)                 |
//! | in-order  | O(n)    | O(n)                 |
//!
//! No rebalancing is performed. Descent and traversal use an explicit
//! cursor/stack rather than call recursion, so a degenerate tree of any
//! depth cannot overflow the stack.

use std::cmp::Ordering;

use slab::Slab;

use crate::structures::TreeNode;
use crate::types::SharedRecord;

/// Binary search tree of shared records.
#[derive(Debug, Clone, Default)]
pub struct OrderedTree {
    /// Node storage, owned exclusively by this tree
    nodes: Slab<TreeNode>,

    /// Root node (slab key)
    root: Option<usize>,

    /// Longest root-to-leaf path, in nodes
    height: usize,
}

impl OrderedTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree with pre-allocated node storage
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Check if the tree has no root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get the number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get the height of the tree (0 when empty, 1 for a lone root)
    ///
    /// Sorted input produces `height() == len()`.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Insert a record
    ///
    /// # Example
    ///
    /// ```
    /// use course_catalog::structures::OrderedTree;
    /// use course_catalog::types::Record;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(Record::new("CSCI201", "Data Structures", vec![]).shared());
    /// tree.insert(Record::new("CSCI101", "Intro", vec![]).shared());
    ///
    /// let ids: Vec<_> = tree.iter().map(|r| r.identifier()).collect();
    /// assert_eq!(ids, ["CSCI101", "CSCI201"]);
    /// ```
    pub fn insert(&mut self, record: SharedRecord) {
        let key = self.nodes.insert(TreeNode::new(record));

        let Some(mut current) = self.root else {
            self.root = Some(key);
            self.height = 1;
            return;
        };

        let mut depth = 1;
        loop {
            depth += 1;
            let goes_left = self.nodes[key].identifier() < self.nodes[current].identifier();

            let node = &mut self.nodes[current];
            let slot = if goes_left {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(key);
                    break;
                }
            }
        }

        self.height = self.height.max(depth);
    }

    /// Find a record by exact identifier
    ///
    /// Descends left when the target is less than the node's identifier,
    /// right otherwise.
    ///
    /// # Returns
    ///
    /// The first match on the search path (the earliest-inserted duplicate),
    /// or None
    pub fn find(&self, identifier: &str) -> Option<&SharedRecord> {
        let mut cursor = self.root;

        while let Some(key) = cursor {
            let node = &self.nodes[key];
            cursor = match identifier.cmp(node.identifier()) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Check whether a record with the identifier exists
    #[inline]
    pub fn contains(&self, identifier: &str) -> bool {
        self.find(identifier).is_some()
    }

    /// Iterate records in ascending identifier order (lazy)
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::with_capacity(self.height),
            cursor: self.root,
            remaining: self.nodes.len(),
        }
    }

    /// Collect all records in ascending identifier order
    pub fn in_order(&self) -> Vec<SharedRecord> {
        self.iter().cloned().collect()
    }

    /// Get the record with the smallest identifier
    pub fn min(&self) -> Option<&SharedRecord> {
        let mut key = self.root?;
        while let Some(left) = self.nodes[key].left {
            key = left;
        }
        Some(&self.nodes[key].record)
    }
}

/// In-order (left, node, right) iterator over an [`OrderedTree`].
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    nodes: &'a Slab<TreeNode>,
    /// Ancestors whose left subtree is being visited
    stack: Vec<usize>,
    /// Next subtree to descend into
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a SharedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some(key) = self.cursor {
            self.stack.push(key);
            self.cursor = nodes[key].left;
        }

        let key = self.stack.pop()?;
        let node = &nodes[key];
        self.cursor = node.right;
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = &'a SharedRecord;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<SharedRecord> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = SharedRecord>>(iter: I) -> Self {
        let mut tree = Self::new();
        for record in iter {
            tree.insert(record);
        }
        tree
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    fn shared(id: &str, title: &str) -> SharedRecord {
        Record::new(id, title, vec![]).shared()
    }

    fn ids(tree: &OrderedTree) -> Vec<String> {
        tree.iter().map(|r| r.identifier().to_string()).collect()
    }

    #[test]
    fn test_tree_new() {
        let tree = OrderedTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.in_order().is_empty());
        assert!(tree.find("CSCI101").is_none());
        assert!(tree.min().is_none());
    }

    #[test]
    fn test_tree_insert_root() {
        let mut tree = OrderedTree::with_capacity(4);
        tree.insert(shared("CSCI101", "Intro"));

        assert!(!tree.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.find("CSCI101").unwrap().title(), "Intro");
    }

    #[test]
    fn test_tree_in_order_sorts() {
        let tree: OrderedTree = ["M", "C", "X", "A", "E", "Z", "P"]
            .into_iter()
            .map(|id| shared(id, id))
            .collect();

        assert_eq!(ids(&tree), vec!["A", "C", "E", "M", "P", "X", "Z"]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.iter().len(), 7);
        assert_eq!(tree.min().unwrap().identifier(), "A");
    }

    #[test]
    fn test_tree_links_follow_comparison() {
        let mut tree = OrderedTree::new();
        tree.insert(shared("M", "root"));
        tree.insert(shared("C", "left"));
        tree.insert(shared("X", "right"));

        let root = &tree.nodes[tree.root.unwrap()];
        assert_eq!(root.identifier(), "M");
        assert_eq!(tree.nodes[root.left.unwrap()].identifier(), "C");
        assert_eq!(tree.nodes[root.right.unwrap()].identifier(), "X");
    }

    #[test]
    fn test_tree_find() {
        let tree: OrderedTree = ["CSCI200", "CSCI100", "CSCI300"]
            .into_iter()
            .map(|id| shared(id, id))
            .collect();

        assert_eq!(tree.find("CSCI100").unwrap().identifier(), "CSCI100");
        assert_eq!(tree.find("CSCI300").unwrap().identifier(), "CSCI300");
        assert!(tree.find("CSCI150").is_none());
        assert!(tree.find("CSCI999").is_none());
        assert!(tree.contains("CSCI200"));
        assert!(!tree.contains(""));
    }

    #[test]
    fn test_tree_duplicates_go_right_in_insertion_order() {
        let mut tree = OrderedTree::new();
        tree.insert(shared("CSCI101", "first"));
        tree.insert(shared("CSCI101", "second"));
        tree.insert(shared("CSCI100", "before"));
        tree.insert(shared("CSCI101", "third"));

        let root = &tree.nodes[tree.root.unwrap()];
        assert!(root.right.is_some());

        let titles: Vec<_> = tree.iter().map(|r| r.title().to_string()).collect();
        assert_eq!(titles, vec!["before", "first", "second", "third"]);

        // The first-inserted duplicate is found
        assert_eq!(tree.find("CSCI101").unwrap().title(), "first");
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_tree_sorted_input_degenerates() {
        let count = 10_000;
        let tree: OrderedTree = (0..count)
            .map(|i| shared(&format!("CSCI{:05}", i), "x"))
            .collect();

        // Every node hangs off the right of the previous one
        assert_eq!(tree.height(), count);
        assert_eq!(tree.len(), count);

        // Deep trees must still traverse without recursion
        let walked = tree.in_order();
        assert_eq!(walked.len(), count);
        assert_eq!(walked.first().unwrap().identifier(), "CSCI00000");
        assert_eq!(walked.last().unwrap().identifier(), "CSCI09999");
        assert!(tree.find("CSCI09999").is_some());
    }

    #[test]
    fn test_tree_traversal_is_restartable() {
        let tree: OrderedTree = ["B", "A", "C"].into_iter().map(|id| shared(id, id)).collect();

        assert_eq!(tree.in_order(), tree.in_order());
        assert_eq!(ids(&tree), ids(&tree));
    }
}
