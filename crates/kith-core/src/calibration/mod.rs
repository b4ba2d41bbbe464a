//! Calibration: the immutable, fully resolved tables every model function reads.
//!
//! Built once at start-up (from compiled defaults or a [`KithConfig`]),
//! validated, then shared by reference or `Arc`. Nothing mutates it after
//! construction.

pub mod gender;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use gender::{Gender, GenderModifierProfile};

use crate::config::{AlertConfig, DriftConfig, EstablishmentConfig, KithConfig};
use crate::errors::ConfigError;
use crate::intent::IntentType;
use crate::layers::{LayerCatalog, LayerConfig, NudgeStyle};

/// Resolved model tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    layers: LayerCatalog,
    establishment: EstablishmentConfig,
    drift: DriftConfig,
    alerts: AlertConfig,
    genders: BTreeMap<Gender, GenderModifierProfile>,
}

static CANONICAL: OnceLock<Calibration> = OnceLock::new();

impl Calibration {
    /// The process-wide canonical tables (compiled defaults).
    pub fn canonical() -> &'static Calibration {
        CANONICAL.get_or_init(Calibration::default)
    }

    /// Build tables from config: canonical values with overrides merged in, then validated.
    pub fn from_config(config: &KithConfig) -> Result<Self, ConfigError> {
        let mut layers = LayerCatalog::default();
        for (&intent, o) in &config.layers {
            let layer = layers.get_mut(intent);
            if o.default_cadence_days.is_some() {
                layer.default_cadence_days = o.default_cadence_days;
            }
            if let Some(v) = o.yellow_threshold {
                layer.yellow_threshold = v;
            }
            if let Some(v) = o.red_threshold {
                layer.red_threshold = v;
            }
            if let Some(v) = o.kin_decay_modifier {
                layer.kin_decay_modifier = v;
            }
            if let Some(templates) = &o.nudge_templates {
                layer.nudge_templates = templates.clone();
            }
        }

        let mut genders = gender::default_profiles();
        for (&g, o) in &config.genders {
            let profile = genders.entry(g).or_insert_with(|| GenderModifierProfile {
                cadence_multipliers: BTreeMap::new(),
                preferred_style: o.preferred_style.unwrap_or(NudgeStyle::Direct),
                style_weight: 0.0,
            });
            for (&intent, &m) in &o.cadence_multipliers {
                profile.cadence_multipliers.insert(intent, m);
            }
            if let Some(style) = o.preferred_style {
                profile.preferred_style = style;
            }
            if let Some(w) = o.style_weight {
                profile.style_weight = w;
            }
        }

        let calibration = Self {
            layers,
            establishment: config.establishment.clone(),
            drift: config.drift.clone(),
            alerts: config.alerts.clone(),
            genders,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn layer(&self, intent: IntentType) -> &LayerConfig {
        self.layers.get(intent)
    }

    pub fn layers(&self) -> &LayerCatalog {
        &self.layers
    }

    pub fn establishment(&self) -> &EstablishmentConfig {
        &self.establishment
    }

    pub fn drift(&self) -> &DriftConfig {
        &self.drift
    }

    pub fn alerts(&self) -> &AlertConfig {
        &self.alerts
    }

    /// Profile for a gender setting. `None` when no gender is set or it has no profile.
    pub fn gender_profile(&self, gender: Option<Gender>) -> Option<&GenderModifierProfile> {
        gender.and_then(|g| self.genders.get(&g))
    }

    /// Check every table invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for layer in self.layers.iter() {
            let name = layer.intent.as_str();
            if !layer.yellow_threshold.is_finite() || layer.yellow_threshold < 1.0 {
                return Err(invalid(
                    format!("layers.{name}.yellow_threshold"),
                    "must be at least 1.0",
                ));
            }
            if !layer.red_threshold.is_finite() || layer.red_threshold < layer.yellow_threshold {
                return Err(invalid(
                    format!("layers.{name}.red_threshold"),
                    "must be at least the yellow threshold",
                ));
            }
            if !layer.kin_decay_modifier.is_finite() || layer.kin_decay_modifier < 0.0 {
                return Err(invalid(
                    format!("layers.{name}.kin_decay_modifier"),
                    "must be non-negative",
                ));
            }
            match (layer.intent.is_active(), layer.default_cadence_days) {
                (true, Some(c)) if c.is_finite() && c > 0.0 => {}
                (true, _) => {
                    return Err(invalid(
                        format!("layers.{name}.default_cadence_days"),
                        "active layers need a positive cadence",
                    ))
                }
                (false, Some(_)) => {
                    return Err(invalid(
                        format!("layers.{name}.default_cadence_days"),
                        "inactive layers carry no default cadence",
                    ))
                }
                (false, None) => {}
            }
            if layer.intent != IntentType::Dormant && layer.nudge_templates.is_empty() {
                return Err(invalid(
                    format!("layers.{name}.nudge_templates"),
                    "only dormant may have an empty template pool",
                ));
            }
        }

        let mut previous: Option<f64> = None;
        for layer in self.layers.active() {
            let cadence = layer.default_cadence_days.unwrap_or_default();
            if previous.is_some_and(|p| cadence <= p) {
                return Err(invalid(
                    format!("layers.{}.default_cadence_days", layer.intent),
                    "cadence must strictly increase from inner_circle to transactional",
                ));
            }
            previous = Some(cadence);
        }

        let e = &self.establishment;
        if !(e.cadence_multiplier > 0.0 && e.cadence_multiplier <= 1.0) {
            return Err(invalid(
                "establishment.cadence_multiplier".to_string(),
                "must be in (0.0, 1.0]",
            ));
        }
        if !(e.fallback_cadence_days.is_finite() && e.fallback_cadence_days > 0.0) {
            return Err(invalid(
                "establishment.fallback_cadence_days".to_string(),
                "must be greater than 0",
            ));
        }

        let d = &self.drift;
        if d.window_days == 0 {
            return Err(invalid("drift.window_days".to_string(), "must be greater than 0"));
        }
        if d.min_interactions == 0 {
            return Err(invalid(
                "drift.min_interactions".to_string(),
                "must be at least 1",
            ));
        }
        if !(d.watching_buffer.is_finite() && d.watching_buffer >= 1.0) {
            return Err(invalid(
                "drift.watching_buffer".to_string(),
                "must be at least 1.0",
            ));
        }

        let a = &self.alerts;
        if a.watching_cooldown_hours < 0 || a.drifting_cooldown_hours < 0 || a.fallen_cooldown_hours < 0
        {
            return Err(invalid("alerts".to_string(), "cooldowns must be non-negative"));
        }

        for (g, profile) in &self.genders {
            if !(0.0..=1.0).contains(&profile.style_weight) {
                return Err(invalid(
                    format!("genders.{}.style_weight", g.as_str()),
                    "must be between 0.0 and 1.0",
                ));
            }
            if profile
                .cadence_multipliers
                .values()
                .any(|m| !(m.is_finite() && *m > 0.0))
            {
                return Err(invalid(
                    format!("genders.{}.cadence_multipliers", g.as_str()),
                    "must be positive",
                ));
            }
        }

        Ok(())
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            layers: LayerCatalog::default(),
            establishment: EstablishmentConfig::default(),
            drift: DriftConfig::default(),
            alerts: AlertConfig::default(),
            genders: gender::default_profiles(),
        }
    }
}

fn invalid(field: String, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field,
        message: message.to_string(),
    }
}
