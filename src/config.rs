//! Planner configuration

use serde::Serialize;

use crate::error::ConfigError;

/// Durations offered by the selection menu, in minutes
pub const DEFAULT_DURATIONS: &[u32] = &[30, 45, 60, 90];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerConfig {
    pub durations: Vec<u32>,
    /// Fixed seed for reproducible plans; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            durations: DEFAULT_DURATIONS.to_vec(),
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_durations(mut self, durations: Vec<u32>) -> Self {
        self.durations = durations;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check the menu, then sort and dedup it
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.durations.is_empty() {
            return Err(ConfigError::EmptyDurations);
        }
        if self.durations.contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }
        self.durations.sort_unstable();
        self.durations.dedup();
        Ok(self)
    }

    pub fn offers(&self, minutes: u32) -> bool {
        self.durations.contains(&minutes)
    }
}
