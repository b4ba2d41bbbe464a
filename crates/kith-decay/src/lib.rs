//! # kith-decay
//!
//! The relationship-decay model.
//! Cadence resolution (custom override, establishment tightening, gender
//! calibration), three-state health classification with kin-relaxed
//! thresholds, and outward-only drift detection over a rolling window.
//! Every function is pure and takes `now` explicitly.

pub mod cadence;
pub mod drift;
pub mod engine;
pub mod health;

pub use cadence::{resolve_cadence, resolve_cadence_breakdown};
pub use drift::{dampen, detect_drift};
pub use engine::RelationshipEngine;
pub use health::{classify_health, health_breakdown};
