//! Drift alert dampening: per-severity cooldown keyed by contact.

use chrono::{DateTime, Duration, Utc};
use kith_core::config::AlertConfig;
use kith_core::models::DriftAlert;
use kith_core::observability::events;

/// Drop alerts already covered by a recent alert for the same contact.
///
/// An alert is dampened when `recent` holds an alert for the same contact
/// with the same or higher severity, detected within the new alert's
/// severity cooldown. Escalations always pass.
pub fn dampen(
    alerts: Vec<DriftAlert>,
    recent: &[DriftAlert],
    config: &AlertConfig,
    now: DateTime<Utc>,
) -> Vec<DriftAlert> {
    alerts
        .into_iter()
        .filter(|alert| {
            let dampened = is_dampened(alert, recent, config, now);
            if dampened {
                events::alert_dampened(&alert.contact_id, alert.severity);
            }
            !dampened
        })
        .collect()
}

fn is_dampened(
    alert: &DriftAlert,
    recent: &[DriftAlert],
    config: &AlertConfig,
    now: DateTime<Utc>,
) -> bool {
    let cooldown = Duration::hours(config.cooldown_hours(alert.severity));
    recent.iter().any(|r| {
        r.contact_id == alert.contact_id
            && r.severity >= alert.severity
            && now - r.detected_at < cooldown
    })
}
