//! Gender modifier profiles: a soft cadence calibration plus a preferred nudge tone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::intent::IntentType;
use crate::layers::NudgeStyle;

/// The user's gender setting. Absent (or a gender without a profile) means no modifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Per-gender calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderModifierProfile {
    /// Cadence multiplier per tier. Missing tiers use 1.0.
    pub cadence_multipliers: BTreeMap<IntentType, f64>,
    pub preferred_style: NudgeStyle,
    /// Probability in [0, 1] of drawing from the preferred-style pool.
    pub style_weight: f64,
}

impl GenderModifierProfile {
    pub fn cadence_multiplier(&self, intent: IntentType) -> f64 {
        self.cadence_multipliers.get(&intent).copied().unwrap_or(1.0)
    }
}

/// Canonical profiles. `Other` has none.
pub fn default_profiles() -> BTreeMap<Gender, GenderModifierProfile> {
    use IntentType::*;
    BTreeMap::from([
        (
            Gender::Male,
            GenderModifierProfile {
                cadence_multipliers: BTreeMap::from([
                    (InnerCircle, 1.0),
                    (Nurture, 0.95),
                    (Maintain, 0.9),
                    (Transactional, 1.0),
                    (New, 0.95),
                ]),
                preferred_style: NudgeStyle::Direct,
                style_weight: defaults::MALE_STYLE_WEIGHT,
            },
        ),
        (
            Gender::Female,
            GenderModifierProfile {
                cadence_multipliers: BTreeMap::from([
                    (InnerCircle, 1.0),
                    (Nurture, 1.05),
                    (Maintain, 1.1),
                    (Transactional, 1.0),
                    (New, 1.0),
                ]),
                preferred_style: NudgeStyle::Warm,
                style_weight: defaults::FEMALE_STYLE_WEIGHT,
            },
        ),
    ])
}
