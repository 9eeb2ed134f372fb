use chrono::{Datelike, Local};

/// Source of the current calendar month (1-12).
pub trait Clock: Send + Sync + 'static {
    fn current_month(&self) -> u32;
}

/// Reads the month from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> u32 {
        Local::now().month()
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    month: u32,
}

impl FixedClock {
    #[must_use]
    pub const fn new(month: u32) -> Self {
        Self { month }
    }
}

impl Clock for FixedClock {
    fn current_month(&self) -> u32 {
        self.month
    }
}
