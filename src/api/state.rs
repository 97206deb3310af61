//! Application state for the validation service API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::validation::Clock;

/// Shared application state.
///
/// Holds the clock the handlers read the current date from, so tests can
/// pin "today" while production uses the wall clock.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state with the given clock.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Returns the current date, read once per call from the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
