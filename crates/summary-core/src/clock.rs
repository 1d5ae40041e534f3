//! Time source for summary timestamps.
//!
//! Summary file names and their `Created:` line both embed the local wall
//! clock.  Reading the clock through a trait lets tests substitute a fixed
//! instant (via the `mockall`-generated `MockClock`) and assert on exact file
//! names.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local date and time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the operating system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
