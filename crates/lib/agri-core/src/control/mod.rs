use agri_store::Season;

use crate::clock::Clock;

pub mod calendar;
pub mod crops;
pub mod disease;
pub mod practices;
pub mod weather;

/// Resolves advisory tool calls against the static tables.
///
/// Every operation answers; unrecognized input falls back to a default
/// category or a guidance record instead of failing.
#[derive(Debug, Clone)]
pub struct AdvisorControlPlane<K: Clock> {
    clock: K,
}

impl<K: Clock> AdvisorControlPlane<K> {
    pub const fn new(clock: K) -> Self {
        Self { clock }
    }

    /// Season for the clock's current month, if the month is in range.
    pub fn current_season(&self) -> Option<Season> {
        Season::from_month(self.clock.current_month())
    }
}

fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}

fn echo_or(value: Option<&str>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
