//! # kith-core
//!
//! Foundation crate for the Kith relationship-decay model.
//! Defines the tier taxonomy, the layer catalog, the immutable calibration
//! tables, errors, config, output models, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod calibration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod layers;
pub mod models;
pub mod observability;
pub mod time;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use calibration::{Calibration, Gender, GenderModifierProfile};
pub use config::KithConfig;
pub use errors::{ConfigError, KithError, KithResult};
pub use intent::IntentType;
pub use layers::{LayerCatalog, LayerConfig, NudgeStyle, NudgeTemplate, NudgeTrigger};
pub use models::{
    AssessmentContext, ContactAssessment, ContactRecord, ContactSignals, DriftAlert,
    DriftEvidence, DriftSeverity, HealthBreakdown, HealthStatus,
};
