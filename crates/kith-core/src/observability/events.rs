//! Structured log events for key model operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::intent::IntentType;
use crate::models::{DriftSeverity, HealthStatus};

/// Log a health classification.
pub fn health_evaluated(contact_id: &str, intent: IntentType, status: HealthStatus, ratio: Option<f64>) {
    tracing::debug!(
        event = "health_evaluated",
        contact_id = %contact_id,
        intent = %intent,
        status = ?status,
        ratio = ?ratio,
        "health evaluated"
    );
}

/// Log a drift detection.
pub fn drift_detected(
    contact_id: &str,
    current: IntentType,
    toward: IntentType,
    severity: DriftSeverity,
    avg_interval_days: f64,
) {
    tracing::info!(
        event = "drift_detected",
        contact_id = %contact_id,
        current = %current,
        toward = %toward,
        severity = ?severity,
        avg_interval_days = avg_interval_days,
        "drift detected"
    );
}

/// Log a drift alert suppressed by cooldown.
pub fn alert_dampened(contact_id: &str, severity: DriftSeverity) {
    tracing::debug!(
        event = "alert_dampened",
        contact_id = %contact_id,
        severity = ?severity,
        "drift alert dampened"
    );
}

/// Log completion of a batch assessment.
pub fn batch_assessed(contacts: usize, red: usize, yellow: usize, drifting: usize) {
    tracing::info!(
        event = "batch_assessed",
        contacts = contacts,
        red = red,
        yellow = yellow,
        drifting = drifting,
        "batch assessed"
    );
}
