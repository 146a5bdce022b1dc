//! Benchmark results.
//!
//! Results are plain key to seconds mappings so a caller can render them
//! however it likes. [`ScalingTable`] also implements `Display` for the
//! fixed-width comparison table printed by the CLI.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::StructureKind;

/// Mean seconds per structure for one dataset.
///
/// Each figure covers construction plus producing sorted output, not
/// query latency alone.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Number of records in the measured dataset
    pub dataset_len: usize,

    /// Trials averaged per structure
    pub trials: usize,

    /// Mean seconds per structure
    means: BTreeMap<StructureKind, f64>,
}

impl BenchmarkReport {
    /// Create a report from per-structure means
    pub fn new(dataset_len: usize, trials: usize, means: BTreeMap<StructureKind, f64>) -> Self {
        Self {
            dataset_len,
            trials,
            means,
        }
    }

    /// Mean seconds for a structure (0.0 if it was not measured)
    pub fn mean(&self, kind: StructureKind) -> f64 {
        self.means.get(&kind).copied().unwrap_or_default()
    }

    /// Means keyed by workload label
    ///
    /// Labels: `BST_insert+inorder`, `LinkedList_traverse+sort`,
    /// `Dict_values+sort`.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        self.means
            .iter()
            .map(|(kind, secs)| (kind.workload_label(), *secs))
            .collect()
    }

    /// Structure with the lowest mean
    pub fn fastest(&self) -> Option<StructureKind> {
        self.means
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(kind, _)| *kind)
    }

    /// Iterate `(kind, mean seconds)` in tree, list, index order
    pub fn iter(&self) -> impl Iterator<Item = (StructureKind, f64)> + '_ {
        self.means.iter().map(|(kind, secs)| (*kind, *secs))
    }
}

/// One row of a [`ScalingTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingRow {
    /// Dataset size
    pub size: usize,
    /// Results at this size
    pub report: BenchmarkReport,
}

/// Benchmark results indexed by dataset size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalingTable {
    rows: Vec<ScalingRow>,
}

impl ScalingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn push(&mut self, size: usize, report: BenchmarkReport) {
        self.rows.push(ScalingRow { size, report });
    }

    /// Rows in measurement order
    pub fn rows(&self) -> &[ScalingRow] {
        &self.rows
    }

    /// Results for a given size
    pub fn get(&self, size: usize) -> Option<&BenchmarkReport> {
        self.rows.iter().find(|row| row.size == size).map(|row| &row.report)
    }
}

impl fmt::Display for ScalingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "{:>6} | {:>20} | {:>18} | {:>18}",
            "N", "BST_insert+inorder", "LL_traverse+sort", "Dict_values+sort"
        );
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for row in &self.rows {
            writeln!(
                f,
                "{:>6} | {:>20.6} | {:>18.6} | {:>18.6}",
                row.size,
                row.report.mean(StructureKind::Tree),
                row.report.mean(StructureKind::List),
                row.report.mean(StructureKind::Index),
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
