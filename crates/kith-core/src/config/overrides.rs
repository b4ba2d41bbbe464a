//! Partial overrides merged over the canonical layer and gender tables.
//! A `None` field keeps the canonical value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intent::IntentType;
use crate::layers::{NudgeStyle, NudgeTemplate};

/// `[layers.<intent>]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOverride {
    pub default_cadence_days: Option<f64>,
    pub yellow_threshold: Option<f64>,
    pub red_threshold: Option<f64>,
    pub kin_decay_modifier: Option<f64>,
    /// Replaces the base template pool wholesale.
    pub nudge_templates: Option<Vec<NudgeTemplate>>,
}

/// `[genders.<gender>]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderOverride {
    pub cadence_multipliers: BTreeMap<IntentType, f64>,
    pub preferred_style: Option<NudgeStyle>,
    pub style_weight: Option<f64>,
}
