//! Drift alert models: a contact's real contact frequency has moved toward an outer tier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::intent::IntentType;

/// A drift alert. Not persisted by the model; the caller decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DriftAlert {
    pub contact_id: String,
    pub current_layer: IntentType,
    /// Always strictly outward of `current_layer`.
    pub drifting_toward: IntentType,
    pub severity: DriftSeverity,
    pub evidence: DriftEvidence,
    pub detected_at: DateTime<Utc>,
}

/// Drift severity, ordered by layer distance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DriftSeverity {
    /// Early-warning buffer exceeded, no layer boundary crossed yet.
    Watching,
    /// Matches the next outer layer.
    Drifting,
    /// Matches a layer two or more steps out.
    Fallen,
}

impl DriftSeverity {
    pub fn from_layer_distance(distance: usize) -> Self {
        match distance {
            0 => Self::Watching,
            1 => Self::Drifting,
            _ => Self::Fallen,
        }
    }
}

/// Audit record for a drift alert. Day values are rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DriftEvidence {
    pub avg_interval_days: f64,
    /// Kin-adjusted cadence of the assigned layer.
    pub expected_cadence_days: f64,
    /// Kin-adjusted cadence of the furthest layer the average reached.
    pub matched_layer_cadence_days: f64,
    pub interaction_count: usize,
    pub window_days: u32,
    pub days_since_last_contact: f64,
}
