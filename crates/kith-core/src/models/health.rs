//! Health classification outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Three-state relationship health. Ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

/// Where an effective cadence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CadenceSource {
    /// User override, returned verbatim.
    Custom,
    /// The layer's default cadence.
    LayerDefault,
    /// `new` contact inside the establishment window.
    EstablishmentFallback,
    /// No active cadence.
    Untracked,
}

/// How the effective cadence was composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CadenceBreakdown {
    pub source: CadenceSource,
    pub base_days: Option<f64>,
    pub in_establishment: bool,
    pub establishment_multiplier: f64,
    pub gender_multiplier: f64,
    pub effective_days: Option<f64>,
}

/// Every intermediate of a health classification, for display and scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthBreakdown {
    pub status: HealthStatus,
    pub cadence: CadenceBreakdown,
    /// Days since last contact; `None` when there is no contact history.
    pub elapsed_days: Option<f64>,
    /// `elapsed_days / cadence`.
    pub ratio: Option<f64>,
    pub kin_multiplier: f64,
    pub effective_yellow: f64,
    pub effective_red: f64,
    /// Instant at which the contact turns yellow.
    pub slipping_at: Option<DateTime<Utc>>,
    /// Instant at which the contact turns red.
    pub overdue_at: Option<DateTime<Utc>>,
}
