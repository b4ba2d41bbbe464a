//! Configuration system for Kith.
//! TOML-based, resolution: env > project `kith.toml` > defaults.

pub mod alert_config;
pub mod defaults;
pub mod drift_config;
pub mod establishment_config;
pub mod kith_config;
pub mod observability_config;
pub mod overrides;

pub use alert_config::AlertConfig;
pub use drift_config::DriftConfig;
pub use establishment_config::EstablishmentConfig;
pub use kith_config::KithConfig;
pub use observability_config::ObservabilityConfig;
pub use overrides::{GenderOverride, LayerOverride};
