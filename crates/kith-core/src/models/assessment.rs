use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{DriftAlert, HealthBreakdown};
use crate::intent::IntentType;

/// Everything the recalculation job persists for one contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactAssessment {
    pub contact_id: String,
    pub intent: IntentType,
    pub health: HealthBreakdown,
    pub drift: Option<DriftAlert>,
    pub assessed_at: DateTime<Utc>,
}
