//! Top-level Kith configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AlertConfig, DriftConfig, EstablishmentConfig, GenderOverride, LayerOverride,
    ObservabilityConfig,
};
use crate::calibration::Gender;
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::ConfigError;
use crate::intent::IntentType;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`KITH_*`)
/// 2. Project config (`kith.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KithConfig {
    pub establishment: EstablishmentConfig,
    pub drift: DriftConfig,
    pub alerts: AlertConfig,
    pub observability: ObservabilityConfig,
    pub layers: BTreeMap<IntentType, LayerOverride>,
    pub genders: BTreeMap<Gender, GenderOverride>,
}

impl KithConfig {
    /// Load configuration: defaults, then `kith.toml` under `root` if it
    /// exists, then environment overrides.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load configuration from an explicit TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut KithConfig) {
        if let Some(v) = env_parse::<u32>("KITH_ESTABLISHMENT_DAYS") {
            config.establishment.establishment_days = v;
        }
        if let Some(v) = env_parse::<f64>("KITH_ESTABLISHMENT_MULTIPLIER") {
            config.establishment.cadence_multiplier = v;
        }
        if let Some(v) = env_parse::<u32>("KITH_DRIFT_WINDOW_DAYS") {
            config.drift.window_days = v;
        }
        if let Some(v) = env_parse::<usize>("KITH_DRIFT_MIN_INTERACTIONS") {
            config.drift.min_interactions = v;
        }
        if let Some(v) = env_parse::<f64>("KITH_DRIFT_WATCHING_BUFFER") {
            config.drift.watching_buffer = v;
        }
        if let Ok(v) = std::env::var("KITH_LOG_LEVEL") {
            config.observability.log_level = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
