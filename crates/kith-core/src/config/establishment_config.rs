use serde::{Deserialize, Serialize};

use super::defaults;

/// Cadence tightening for relationships that are still being established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstablishmentConfig {
    /// Multiplier applied to cadence inside the window (< 1 tightens).
    pub cadence_multiplier: f64,
    /// Window length after contact creation, in days.
    pub establishment_days: u32,
    /// Cadence used for `new` contacts inside the window.
    pub fallback_cadence_days: f64,
}

impl Default for EstablishmentConfig {
    fn default() -> Self {
        Self {
            cadence_multiplier: defaults::DEFAULT_ESTABLISHMENT_MULTIPLIER,
            establishment_days: defaults::DEFAULT_ESTABLISHMENT_DAYS,
            fallback_cadence_days: defaults::DEFAULT_FALLBACK_CADENCE_DAYS,
        }
    }
}
