use kith_core::calibration::Calibration;
use kith_core::models::{AssessmentContext, ContactSignals, HealthBreakdown, HealthStatus};
use kith_core::time::{add_days, days_between};

use crate::cadence;

/// Three-state health of a relationship.
///
/// - no active cadence → green (untracked relationships never look unhealthy)
/// - no contact history → yellow
/// - otherwise compare `elapsed / cadence` against the layer's thresholds,
///   relaxed by `1 + kin_decay_modifier` for kin. Comparisons are inclusive.
pub fn classify_health(
    calibration: &Calibration,
    contact: &ContactSignals,
    ctx: &AssessmentContext,
) -> HealthStatus {
    health_breakdown(calibration, contact, ctx).status
}

/// Classify and report every intermediate value.
pub fn health_breakdown(
    calibration: &Calibration,
    contact: &ContactSignals,
    ctx: &AssessmentContext,
) -> HealthBreakdown {
    let cadence = cadence::resolve_cadence_breakdown(
        calibration,
        contact.intent,
        contact.custom_cadence_days,
        contact.created_at,
        ctx.now,
        ctx.gender,
    );

    let layer = calibration.layer(contact.intent);
    let kin_multiplier = layer.kin_multiplier(contact.is_kin);
    let effective_yellow = layer.yellow_threshold * kin_multiplier;
    let effective_red = layer.red_threshold * kin_multiplier;

    let mut breakdown = HealthBreakdown {
        status: HealthStatus::Green,
        cadence,
        elapsed_days: None,
        ratio: None,
        kin_multiplier,
        effective_yellow,
        effective_red,
        slipping_at: None,
        overdue_at: None,
    };

    let Some(cadence_days) = breakdown.cadence.effective_days else {
        return breakdown;
    };

    let Some(last_contact) = contact.last_contact else {
        breakdown.status = HealthStatus::Yellow;
        return breakdown;
    };

    let elapsed = days_between(ctx.now, last_contact);
    let ratio = elapsed / cadence_days;

    breakdown.status = threshold_status(ratio, effective_yellow, effective_red);
    breakdown.elapsed_days = Some(elapsed);
    breakdown.ratio = Some(ratio);
    breakdown.slipping_at = Some(add_days(last_contact, cadence_days * effective_yellow));
    breakdown.overdue_at = Some(add_days(last_contact, cadence_days * effective_red));
    breakdown
}

/// Boundary values belong to the higher-severity bucket.
fn threshold_status(ratio: f64, yellow: f64, red: f64) -> HealthStatus {
    if ratio >= red {
        HealthStatus::Red
    } else if ratio >= yellow {
        HealthStatus::Yellow
    } else {
        HealthStatus::Green
    }
}
