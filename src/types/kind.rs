//! Names for the three interchangeable catalog structures.

use std::fmt;
use std::str::FromStr;

/// Which structure an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StructureKind {
    /// Unbalanced binary search tree
    #[default]
    Tree,
    /// Singly linked list
    List,
    /// Hash-backed direct index
    Index,
}

impl StructureKind {
    /// All kinds, in build order
    pub const ALL: [StructureKind; 3] = [Self::Tree, Self::List, Self::Index];

    /// Short lowercase name (`tree`, `list`, `index`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::List => "list",
            Self::Index => "index",
        }
    }

    /// Label of the benchmark workload measured for this structure
    pub fn workload_label(self) -> &'static str {
        match self {
            Self::Tree => "BST_insert+inorder",
            Self::List => "LinkedList_traverse+sort",
            Self::Index => "Dict_values+sort",
        }
    }

    /// Human-readable name for menus
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tree => "BST",
            Self::List => "LinkedList",
            Self::Index => "Dictionary",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown structure name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown structure '{0}' (expected tree, list or index)")]
pub struct UnknownStructure(pub String);

impl FromStr for StructureKind {
    type Err = UnknownStructure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "bst" => Ok(Self::Tree),
            "list" | "linkedlist" => Ok(Self::List),
            "index" | "dict" | "dictionary" => Ok(Self::Index),
            _ => Err(UnknownStructure(s.to_string())),
        }
    }
}
