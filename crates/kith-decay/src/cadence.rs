use chrono::{DateTime, Utc};
use kith_core::calibration::{Calibration, Gender};
use kith_core::intent::IntentType;
use kith_core::models::{CadenceBreakdown, CadenceSource};
use kith_core::time::days_between;

/// Effective reminder interval in days, or `None` for an untracked relationship.
///
/// ```text
/// custom override                 → returned verbatim, nothing else applies
/// layer default                   → default × establishment × gender
/// `new` inside establishment      → fallback × establishment × gender
/// otherwise                       → None
/// ```
///
/// Establishment and gender are independent multipliers on the cadence axis.
/// Kin relaxation is a threshold-axis effect and never enters here.
pub fn resolve_cadence(
    calibration: &Calibration,
    intent: IntentType,
    custom_cadence_days: Option<f64>,
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    gender: Option<Gender>,
) -> Option<f64> {
    resolve_cadence_breakdown(calibration, intent, custom_cadence_days, created_at, now, gender)
        .effective_days
}

/// Resolve cadence and report how each factor contributed.
pub fn resolve_cadence_breakdown(
    calibration: &Calibration,
    intent: IntentType,
    custom_cadence_days: Option<f64>,
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    gender: Option<Gender>,
) -> CadenceBreakdown {
    if let Some(custom) = custom_cadence_days {
        return CadenceBreakdown {
            source: CadenceSource::Custom,
            base_days: Some(custom),
            in_establishment: false,
            establishment_multiplier: 1.0,
            gender_multiplier: 1.0,
            effective_days: Some(custom),
        };
    }

    let establishment = calibration.establishment();
    let in_establishment = created_at
        .map(|created| days_between(now, created) <= f64::from(establishment.establishment_days))
        .unwrap_or(false);
    let gender_multiplier = calibration
        .gender_profile(gender)
        .map(|p| p.cadence_multiplier(intent))
        .unwrap_or(1.0);
    let establishment_multiplier = if in_establishment {
        establishment.cadence_multiplier
    } else {
        1.0
    };

    let (source, base) = match calibration.layer(intent).default_cadence_days {
        Some(days) => (CadenceSource::LayerDefault, days),
        None if intent == IntentType::New && in_establishment => (
            CadenceSource::EstablishmentFallback,
            establishment.fallback_cadence_days,
        ),
        None => {
            return CadenceBreakdown {
                source: CadenceSource::Untracked,
                base_days: None,
                in_establishment,
                establishment_multiplier,
                gender_multiplier,
                effective_days: None,
            }
        }
    };

    CadenceBreakdown {
        source,
        base_days: Some(base),
        in_establishment,
        establishment_multiplier,
        gender_multiplier,
        effective_days: Some(base * establishment_multiplier * gender_multiplier),
    }
}
