//! Comparative benchmark across the three catalog structures.
//!
//! ## Workloads
//!
//! Each trial starts from a fresh, empty structure and times:
//!
//! - **Tree**: insert every record, then in-order traversal
//! - **List**: append every record, traverse, sort by identifier
//! - **Index**: add every record, collect all values, sort by identifier
//!
//! That is construction plus sorted output, mirroring the facade's sort
//! path. It is not a measure of lookup latency.
//!
//! ## Execution
//!
//! Trials run sequentially on the calling thread; timings for concurrent
//! trials would not be attributable. There is no cancellation point.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use course_catalog::bench::{BenchmarkHarness, StepClock, SyntheticGenerator};
//! use course_catalog::types::StructureKind;
//!
//! let dataset = SyntheticGenerator::default().generate(50);
//! let harness = BenchmarkHarness::with_clock(StepClock::new(Duration::from_millis(10)));
//!
//! let report = harness.measure(&dataset, 2).unwrap();
//! assert_eq!(report.mean(StructureKind::Tree), 0.01);
//! ```

use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::bench::{BenchmarkReport, Clock, ScalingTable, SyntheticGenerator, SystemClock};
use crate::error::CatalogError;
use crate::structures::{DirectIndex, OrderedTree, SequentialList};
use crate::types::{sort_by_identifier, SharedRecord, StructureKind};

/// Times build-and-sort workloads over repeated trials.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness<C = SystemClock> {
    /// Time source read around every trial
    clock: C,

    /// Record source for size-scaling runs
    generator: SyntheticGenerator,
}

impl BenchmarkHarness<SystemClock> {
    /// Create a harness timed by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for BenchmarkHarness<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BenchmarkHarness<C> {
    /// Create a harness with an injected clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            generator: SyntheticGenerator::default(),
        }
    }

    /// Replace the synthetic record generator used by
    /// [`measure_across_sizes`](Self::measure_across_sizes)
    pub fn with_generator(mut self, generator: SyntheticGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Get the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Average each structure's workload over `trials` runs
    ///
    /// # Errors
    ///
    /// * [`CatalogError::EmptyDataset`] - `dataset` has no records
    /// * [`CatalogError::ZeroTrials`] - `trials` is zero
    #[instrument(level = "debug", skip(self, dataset), fields(records = dataset.len()))]
    pub fn measure(
        &self,
        dataset: &[SharedRecord],
        trials: usize,
    ) -> Result<BenchmarkReport, CatalogError> {
        if dataset.is_empty() {
            return Err(CatalogError::EmptyDataset);
        }
        if trials == 0 {
            return Err(CatalogError::ZeroTrials);
        }

        let mut means = BTreeMap::new();
        for kind in StructureKind::ALL {
            let mut total = Duration::ZERO;
            for trial in 0..trials {
                let elapsed = self.time_trial(kind, dataset);
                debug!(%kind, trial, elapsed = ?elapsed, "trial complete");
                total += elapsed;
            }
            means.insert(kind, total.as_secs_f64() / trials as f64);
        }

        let report = BenchmarkReport::new(dataset.len(), trials, means);
        info!(
            records = dataset.len(),
            trials,
            tree = report.mean(StructureKind::Tree),
            list = report.mean(StructureKind::List),
            index = report.mean(StructureKind::Index),
            "benchmark complete"
        );
        Ok(report)
    }

    /// Run [`measure`](Self::measure) on generated datasets of each size
    ///
    /// # Errors
    ///
    /// * [`CatalogError::EmptyDataset`] - a requested size is zero
    /// * [`CatalogError::ZeroTrials`] - `trials` is zero
    #[instrument(level = "debug", skip(self))]
    pub fn measure_across_sizes(
        &self,
        sizes: &[usize],
        trials: usize,
    ) -> Result<ScalingTable, CatalogError> {
        let mut table = ScalingTable::new();

        for &size in sizes {
            let dataset = self.generator.generate(size);
            let report = self.measure(&dataset, trials)?;
            table.push(size, report);
        }

        Ok(table)
    }

    /// Time one trial of a structure's workload
    fn time_trial(&self, kind: StructureKind, dataset: &[SharedRecord]) -> Duration {
        match kind {
            StructureKind::Tree => {
                let mut tree = OrderedTree::new();
                let start = self.clock.now();
                for record in dataset {
                    tree.insert(SharedRecord::clone(record));
                }
                black_box(tree.in_order());
                self.clock.now().saturating_sub(start)
            }
            StructureKind::List => {
                let mut list = SequentialList::new();
                let start = self.clock.now();
                for record in dataset {
                    list.append(SharedRecord::clone(record));
                }
                let mut sorted = list.traverse();
                sort_by_identifier(&mut sorted);
                black_box(sorted);
                self.clock.now().saturating_sub(start)
            }
            StructureKind::Index => {
                let mut index = DirectIndex::new();
                let start = self.clock.now();
                for record in dataset {
                    index.add(SharedRecord::clone(record));
                }
                let mut sorted: Vec<SharedRecord> = index.all().cloned().collect();
                sort_by_identifier(&mut sorted);
                black_box(sorted);
                self.clock.now().saturating_sub(start)
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
