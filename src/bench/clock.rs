//! Time sources for the benchmark harness.
//!
//! The harness reads a [`Clock`] before and after each trial. Production
//! runs use [`SystemClock`]; [`StepClock`] advances by a fixed amount per
//! reading so averaging can be checked without real timing noise.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's own origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by `step` on every reading.
///
/// With the harness reading the clock once before and once after each
/// trial, every trial measures exactly `step`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use course_catalog::bench::{Clock, StepClock};
///
/// let clock = StepClock::new(Duration::from_millis(5));
/// assert_eq!(clock.now(), Duration::ZERO);
/// assert_eq!(clock.now(), Duration::from_millis(5));
/// assert_eq!(clock.readings(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StepClock {
    step: Duration,
    current: Cell<Duration>,
    readings: Cell<usize>,
}

impl StepClock {
    /// Create a clock starting at zero
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            current: Cell::new(Duration::ZERO),
            readings: Cell::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn readings(&self) -> usize {
        self.readings.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let reading = self.current.get();
        self.current.set(reading + self.step);
        self.readings.set(self.readings.get() + 1);
        reading
    }
}
