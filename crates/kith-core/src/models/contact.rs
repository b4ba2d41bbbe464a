//! Contact-facing inputs. Owned by the contact store and read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calibration::Gender;
use crate::errors::{KithError, KithResult};
use crate::intent::IntentType;
use crate::time::parse_timestamp;

/// Contact as delivered by the contact store: string intent, RFC 3339 instants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub contact_id: String,
    pub intent: String,
    pub last_contact: Option<String>,
    pub custom_cadence_days: Option<f64>,
    pub created_at: Option<String>,
    pub is_kin: bool,
    /// Interaction log, pre-filtered by the caller to the drift window.
    pub interaction_dates: Vec<String>,
}

/// Validated model inputs for one contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSignals {
    pub contact_id: String,
    pub intent: IntentType,
    pub last_contact: Option<DateTime<Utc>>,
    pub custom_cadence_days: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_kin: bool,
    pub interaction_dates: Vec<DateTime<Utc>>,
}

impl ContactSignals {
    pub fn new(contact_id: impl Into<String>, intent: IntentType) -> Self {
        Self {
            contact_id: contact_id.into(),
            intent,
            last_contact: None,
            custom_cadence_days: None,
            created_at: None,
            is_kin: false,
            interaction_dates: Vec::new(),
        }
    }

    pub fn with_last_contact(mut self, at: DateTime<Utc>) -> Self {
        self.last_contact = Some(at);
        self
    }

    pub fn with_custom_cadence(mut self, days: f64) -> Self {
        self.custom_cadence_days = Some(days);
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn with_kin(mut self, is_kin: bool) -> Self {
        self.is_kin = is_kin;
        self
    }

    pub fn with_interactions(mut self, dates: Vec<DateTime<Utc>>) -> Self {
        self.interaction_dates = dates;
        self
    }
}

impl TryFrom<ContactRecord> for ContactSignals {
    type Error = KithError;

    fn try_from(record: ContactRecord) -> KithResult<Self> {
        let intent = record.intent.parse::<IntentType>()?;

        if let Some(days) = record.custom_cadence_days {
            if !(days.is_finite() && days > 0.0) {
                return Err(KithError::InvalidInput {
                    field: "custom_cadence_days".to_string(),
                    message: format!("must be a positive number of days, got {days}"),
                });
            }
        }

        let last_contact = record
            .last_contact
            .as_deref()
            .map(|raw| parse_timestamp("last_contact", raw))
            .transpose()?;
        let created_at = record
            .created_at
            .as_deref()
            .map(|raw| parse_timestamp("created_at", raw))
            .transpose()?;
        let interaction_dates = record
            .interaction_dates
            .iter()
            .map(|raw| parse_timestamp("interaction_dates", raw))
            .collect::<KithResult<Vec<_>>>()?;

        Ok(Self {
            contact_id: record.contact_id,
            intent,
            last_contact,
            custom_cadence_days: record.custom_cadence_days,
            created_at,
            is_kin: record.is_kin,
            interaction_dates,
        })
    }
}

/// Evaluation-wide inputs: the explicit clock and the user's gender setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentContext {
    pub now: DateTime<Utc>,
    pub gender: Option<Gender>,
}

impl AssessmentContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now, gender: None }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}
