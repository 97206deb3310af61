//! Time source abstraction for date-window checks.
//!
//! Future-date rules compare against "today", which is the only ambient
//! input the validators have. Reading it through a [`Clock`] keeps the
//! validators deterministic under test.

use chrono::{Local, NaiveDate};

/// A source for the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns the current date as seen by this clock.
    fn today(&self) -> NaiveDate;
}

/// Production clock reading the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
