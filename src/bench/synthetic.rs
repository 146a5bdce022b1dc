//! Deterministic synthetic course records for scaling benchmarks.
//!
//! Record `i` gets identifier `{prefix}{1000 + i:04}` and title
//! `Course {i}`. Each record after the first draws 0 to 2 prerequisites
//! uniformly from the identifiers generated before it.
//!
//! Identifiers come out in ascending order, which is the worst case for the
//! unbalanced tree. Enable `shuffle` to measure the average case instead.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Record, SharedRecord};

/// Default identifier prefix
pub const DEFAULT_PREFIX: &str = "CSCI";

/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;

/// First numeric suffix assigned
const FIRST_NUMBER: usize = 1000;

/// Seeded record generator. Same seed and size give the same records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticGenerator {
    prefix: String,
    seed: u64,
    shuffle: bool,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SEED)
    }
}

impl SyntheticGenerator {
    /// Create a generator producing records in ascending identifier order
    pub fn new(prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            seed,
            shuffle: false,
        }
    }

    /// Shuffle insertion order after generation
    pub fn shuffled(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Identifier for the `n`th generated record
    pub fn identifier(&self, n: usize) -> String {
        format!("{}{:04}", self.prefix, FIRST_NUMBER + n)
    }

    /// Generate `count` records
    ///
    /// # Example
    ///
    /// ```
    /// use course_catalog::bench::SyntheticGenerator;
    ///
    /// let records = SyntheticGenerator::default().generate(3);
    /// assert_eq!(records[0].identifier(), "CSCI1000");
    /// assert_eq!(records[2].title(), "Course 2");
    /// ```
    pub fn generate(&self, count: usize) -> Vec<SharedRecord> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity(count);

        for i in 0..count {
            let prerequisite_count = rng.gen_range(0..=2);
            let prerequisites = if i == 0 {
                Vec::new()
            } else {
                (0..prerequisite_count)
                    .map(|_| self.identifier(rng.gen_range(0..i)))
                    .collect()
            };

            records.push(Record::new(self.identifier(i), format!("Course {i}"), prerequisites).shared());
        }

        if self.shuffle {
            records.shuffle(&mut rng);
        }

        records
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
