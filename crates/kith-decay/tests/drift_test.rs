use chrono::{DateTime, Duration, TimeZone, Utc};
use kith_core::calibration::Calibration;
use kith_core::config::KithConfig;
use kith_core::intent::IntentType;
use kith_core::models::{ContactSignals, DriftSeverity};
use kith_decay::detect_drift;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
}

/// Contact whose interactions happened `days_ago` days before `now()`.
fn contact(intent: IntentType, days_ago: &[i64]) -> ContactSignals {
    let dates = days_ago.iter().map(|&d| now() - Duration::days(d)).collect();
    ContactSignals::new("c-1", intent).with_interactions(dates)
}

// ── Worked scenarios ──────────────────────────────────────────────────────

#[test]
fn nurture_with_month_long_gaps_drifts_toward_maintain() {
    let c = contact(IntentType::Nurture, &[40, 78, 113]).with_last_contact(now() - Duration::days(40));
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();

    assert_eq!(alert.contact_id, "c-1");
    assert_eq!(alert.current_layer, IntentType::Nurture);
    assert_eq!(alert.drifting_toward, IntentType::Maintain);
    assert_eq!(alert.severity, DriftSeverity::Drifting);
    assert_eq!(alert.detected_at, now());

    let e = &alert.evidence;
    assert_eq!(e.avg_interval_days, 37.7);
    assert_eq!(e.expected_cadence_days, 14.0);
    assert_eq!(e.matched_layer_cadence_days, 30.0);
    assert_eq!(e.interaction_count, 3);
    assert_eq!(e.window_days, 180);
    assert_eq!(e.days_since_last_contact, 40.0);
}

#[test]
fn outermost_layer_never_drifts() {
    for pattern in [&[1, 2, 3][..], &[100, 200, 300], &[170, 175, 179, 180]] {
        let c = contact(IntentType::Transactional, pattern);
        assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
    }
}

// ── Preconditions ─────────────────────────────────────────────────────────

#[test]
fn inactive_layers_never_drift() {
    let cal = Calibration::canonical();
    assert!(detect_drift(cal, &contact(IntentType::Dormant, &[100, 200, 300]), now()).is_none());
    let new = contact(IntentType::New, &[100, 200, 300]).with_created_at(now() - Duration::days(5));
    assert!(detect_drift(cal, &new, now()).is_none());
    // Even with a custom cadence, `new` is outside the active order.
    let custom = contact(IntentType::New, &[100, 200, 300]).with_custom_cadence(7.0);
    assert!(detect_drift(cal, &custom, now()).is_none());
}

#[test]
fn too_few_interactions_is_not_assessed() {
    let c = contact(IntentType::InnerCircle, &[120, 170]);
    assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
    assert!(detect_drift(Calibration::canonical(), &contact(IntentType::InnerCircle, &[]), now()).is_none());
}

#[test]
fn on_track_contact_has_no_alert() {
    let c = contact(IntentType::Nurture, &[14, 28, 42]);
    assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
}

#[test]
fn average_exactly_at_watching_buffer_is_on_track() {
    // nurture: 14 × 1.5 = 21
    let c = contact(IntentType::Nurture, &[21, 42, 63]);
    assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
}

// ── Severity ──────────────────────────────────────────────────────────────

#[test]
fn watching_zone_points_at_next_layer() {
    let c = contact(IntentType::Nurture, &[25, 50, 75]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.severity, DriftSeverity::Watching);
    assert_eq!(alert.drifting_toward, IntentType::Maintain);
    assert_eq!(alert.evidence.matched_layer_cadence_days, 14.0);
}

#[test]
fn two_layers_out_is_fallen() {
    let c = contact(IntentType::InnerCircle, &[35, 70, 105]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.severity, DriftSeverity::Fallen);
    assert_eq!(alert.drifting_toward, IntentType::Maintain);
}

#[test]
fn inner_circle_gone_quarterly_falls_to_transactional() {
    let c = contact(IntentType::InnerCircle, &[100, 200, 300]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.severity, DriftSeverity::Fallen);
    assert_eq!(alert.drifting_toward, IntentType::Transactional);
    assert_eq!(alert.evidence.matched_layer_cadence_days, 90.0);
}

#[test]
fn maintain_can_only_drift_to_transactional() {
    let c = contact(IntentType::Maintain, &[95, 190, 285]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.drifting_toward, IntentType::Transactional);
    assert_eq!(alert.severity, DriftSeverity::Drifting);
}

// ── Modifiers ─────────────────────────────────────────────────────────────

#[test]
fn kin_relaxes_every_layer_boundary() {
    let c = contact(IntentType::Nurture, &[40, 78, 113]).with_kin(true);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    // maintain kin cadence 39 > 37.7, so only the watching buffer (16.8 × 1.5) is exceeded
    assert_eq!(alert.severity, DriftSeverity::Watching);
    assert_eq!(alert.drifting_toward, IntentType::Maintain);
    assert_eq!(alert.evidence.expected_cadence_days, 16.8);
}

#[test]
fn custom_cadence_sets_the_expectation() {
    let c = contact(IntentType::Nurture, &[40, 78, 113]).with_custom_cadence(40.0);
    assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
}

#[test]
fn silence_after_a_flurry_is_caught_by_the_now_gap() {
    // Three messages on consecutive days three months ago: pairwise gaps are 1 day.
    let c = contact(IntentType::Nurture, &[90, 91, 92]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.evidence.avg_interval_days, 30.7);
    assert_eq!(alert.drifting_toward, IntentType::Maintain);
}

#[test]
fn days_since_last_contact_falls_back_to_newest_interaction() {
    let c = contact(IntentType::InnerCircle, &[30, 60, 90]);
    let alert = detect_drift(Calibration::canonical(), &c, now()).unwrap();
    assert_eq!(alert.evidence.days_since_last_contact, 30.0);
}

#[test]
fn configured_minimum_and_buffer_apply() {
    let config = KithConfig::from_toml(
        r#"
[drift]
min_interactions = 2
watching_buffer = 1.2
"#,
    )
    .unwrap();
    let cal = Calibration::from_config(&config).unwrap();
    // avg 18 > 14 × 1.2 = 16.8, two interactions now suffice
    let c = contact(IntentType::Nurture, &[18, 36]);
    let alert = detect_drift(&cal, &c, now()).unwrap();
    assert_eq!(alert.severity, DriftSeverity::Watching);
    assert!(detect_drift(Calibration::canonical(), &c, now()).is_none());
}

#[test]
fn detection_is_idempotent() {
    let c = contact(IntentType::Nurture, &[40, 78, 113]);
    let a = detect_drift(Calibration::canonical(), &c, now());
    let b = detect_drift(Calibration::canonical(), &c, now());
    assert_eq!(a, b);
}
