//! Benchmarking for the catalog structures.
//!
//! Timing is kept out of the structures themselves: they stay testable
//! without any clock, and the harness takes its [`Clock`] by injection.
//!
//! ## Components
//!
//! - [`BenchmarkHarness`]: Repeated-trial timing, single dataset or a range of sizes
//! - [`Clock`], [`SystemClock`], [`StepClock`]: Time sources
//! - [`SyntheticGenerator`]: Seeded record generation for scaling runs
//! - [`BenchmarkReport`], [`ScalingTable`]: Results as key to seconds mappings

pub mod clock;
pub mod harness;
pub mod report;
pub mod synthetic;

pub use clock::{Clock, StepClock, SystemClock};
pub use harness::BenchmarkHarness;
pub use report::{BenchmarkReport, ScalingRow, ScalingTable};
pub use synthetic::SyntheticGenerator;
