use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::DriftSeverity;

/// Drift alert dampening: per-severity cooldowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub watching_cooldown_hours: i64,
    pub drifting_cooldown_hours: i64,
    pub fallen_cooldown_hours: i64,
}

impl AlertConfig {
    pub fn cooldown_hours(&self, severity: DriftSeverity) -> i64 {
        match severity {
            DriftSeverity::Watching => self.watching_cooldown_hours,
            DriftSeverity::Drifting => self.drifting_cooldown_hours,
            DriftSeverity::Fallen => self.fallen_cooldown_hours,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            watching_cooldown_hours: defaults::DEFAULT_WATCHING_COOLDOWN_HOURS,
            drifting_cooldown_hours: defaults::DEFAULT_DRIFTING_COOLDOWN_HOURS,
            fallen_cooldown_hours: defaults::DEFAULT_FALLEN_COOLDOWN_HOURS,
        }
    }
}
