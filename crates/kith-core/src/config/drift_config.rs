use serde::{Deserialize, Serialize};

use super::defaults;

/// Drift assessment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Rolling assessment window. Callers pre-filter interactions to it.
    pub window_days: u32,
    /// Minimum number of interactions before drift is assessed at all.
    pub min_interactions: usize,
    /// Multiple of the assigned cadence above which a contact is "watching".
    pub watching_buffer: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_DRIFT_WINDOW_DAYS,
            min_interactions: defaults::DEFAULT_DRIFT_MIN_INTERACTIONS,
            watching_buffer: defaults::DEFAULT_DRIFT_WATCHING_BUFFER,
        }
    }
}
