use chrono::{DateTime, Utc};
use kith_core::calibration::Calibration;
use kith_core::intent::IntentType;
use kith_core::models::{ContactSignals, DriftAlert, DriftEvidence, DriftSeverity};
use kith_core::time::{days_between, round1};

use super::gaps::{gap_sequence, mean_interval};
use crate::cadence;

/// Detect outward drift for one contact.
///
/// Returns `None` when there is no resolvable cadence, too few interactions,
/// an inactive tier, the outermost active tier, or an average interval still
/// inside the watching buffer. Otherwise walks the active layer order outward
/// and reports the furthest layer whose kin-adjusted cadence the average
/// interval has reached.
///
/// Only the custom override and the layer default feed the assigned cadence;
/// establishment and gender calibration are nudge-timing concerns.
pub fn detect_drift(
    calibration: &Calibration,
    contact: &ContactSignals,
    now: DateTime<Utc>,
) -> Option<DriftAlert> {
    let config = calibration.drift();
    let intent = contact.intent;

    let assigned = cadence::resolve_cadence(
        calibration,
        intent,
        contact.custom_cadence_days,
        None,
        now,
        None,
    )?;
    if contact.interaction_dates.len() < config.min_interactions {
        return None;
    }
    let current = intent.active_index()?;
    if intent.is_outermost() {
        return None;
    }

    let gaps = gap_sequence(now, &contact.interaction_dates);
    let avg = mean_interval(&gaps)?;

    let expected = assigned * calibration.layer(intent).kin_multiplier(contact.is_kin);
    if avg <= expected * config.watching_buffer {
        return None;
    }

    let mut matched = current;
    let mut matched_cadence = expected;
    for (idx, &candidate) in IntentType::ACTIVE_ORDER
        .iter()
        .enumerate()
        .skip(current + 1)
    {
        let layer = calibration.layer(candidate);
        let Some(days) = layer.default_cadence_days else {
            break;
        };
        let candidate_cadence = days * layer.kin_multiplier(contact.is_kin);
        if avg < candidate_cadence {
            break;
        }
        matched = idx;
        matched_cadence = candidate_cadence;
    }

    let toward_index = if matched > current { matched } else { current + 1 };
    let drifting_toward = IntentType::ACTIVE_ORDER[toward_index];
    let severity = DriftSeverity::from_layer_distance(matched - current);

    let last_seen = contact
        .last_contact
        .or_else(|| contact.interaction_dates.iter().max().copied());
    let days_since_last_contact = last_seen.map(|at| days_between(now, at)).unwrap_or(avg);

    tracing::trace!(
        contact_id = %contact.contact_id,
        avg_interval = avg,
        expected,
        matched = %IntentType::ACTIVE_ORDER[matched],
        "drift walk complete"
    );

    Some(DriftAlert {
        contact_id: contact.contact_id.clone(),
        current_layer: intent,
        drifting_toward,
        severity,
        evidence: DriftEvidence {
            avg_interval_days: round1(avg),
            expected_cadence_days: round1(expected),
            matched_layer_cadence_days: round1(matched_cadence),
            interaction_count: contact.interaction_dates.len(),
            window_days: config.window_days,
            days_since_last_contact: round1(days_since_last_contact),
        },
        detected_at: now,
    })
}
