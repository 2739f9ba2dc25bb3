//! Injectable capabilities for time and randomness
//!
//! The clock and the random source are the only ambient state the built-in
//! tools touch. Modeling them as ports keeps dispatch deterministically
//! testable: production wires in the system clock and thread RNG, tests
//! wire in fixed values.

use chrono::{Local, NaiveTime};
use rand::Rng;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current local time of day
    fn now(&self) -> NaiveTime;
}

/// Reads the host system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Source of uniformly distributed random integers
pub trait RandomSource: Send + Sync {
    /// Draw an integer from the closed interval [lo, hi]
    fn roll(&self, lo: i64, hi: i64) -> i64;
}

/// Draws from the process thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn roll(&self, lo: i64, hi: i64) -> i64 {
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Always reports the same time of day. Test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Always returns the same value, ignoring the range. Test double.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource(pub i64);

impl RandomSource for StaticSource {
    fn roll(&self, _lo: i64, _hi: i64) -> i64 {
        self.0
    }
}
