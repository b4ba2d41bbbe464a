use chrono::{TimeZone, Utc};
use kith_core::errors::KithErrorCode;
use kith_core::intent::IntentType;
use kith_core::models::{ContactRecord, ContactSignals};
use kith_core::{ConfigError, KithError};

fn record() -> ContactRecord {
    ContactRecord {
        contact_id: "c-42".into(),
        intent: "nurture".into(),
        last_contact: Some("2024-06-01T09:30:00Z".into()),
        custom_cadence_days: None,
        created_at: Some("2023-01-15T00:00:00+01:00".into()),
        is_kin: true,
        interaction_dates: vec!["2024-06-01T09:30:00Z".into(), "2024-05-10T18:00:00Z".into()],
    }
}

#[test]
fn valid_record_converts() {
    let signals = ContactSignals::try_from(record()).unwrap();
    assert_eq!(signals.intent, IntentType::Nurture);
    assert_eq!(
        signals.last_contact,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap())
    );
    assert_eq!(
        signals.created_at,
        Some(Utc.with_ymd_and_hms(2023, 1, 14, 23, 0, 0).unwrap())
    );
    assert!(signals.is_kin);
    assert_eq!(signals.interaction_dates.len(), 2);
}

#[test]
fn record_deserializes_with_missing_optional_fields() {
    let json = r#"{"contact_id":"c-1","intent":"dormant"}"#;
    let rec: ContactRecord = serde_json::from_str(json).unwrap();
    let signals = ContactSignals::try_from(rec).unwrap();
    assert_eq!(signals.intent, IntentType::Dormant);
    assert!(signals.last_contact.is_none());
    assert!(!signals.is_kin);
    assert!(signals.interaction_dates.is_empty());
}

#[test]
fn unknown_intent_is_invalid_input() {
    let mut rec = record();
    rec.intent = "bestie".into();
    let err = ContactSignals::try_from(rec).unwrap_err();
    assert!(matches!(err, KithError::InvalidInput { ref field, .. } if field == "intent"));
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn malformed_timestamp_is_invalid_input() {
    let mut rec = record();
    rec.interaction_dates.push("yesterday".into());
    let err = ContactSignals::try_from(rec).unwrap_err();
    assert!(err.to_string().contains("interaction_dates"));
    assert!(err.boundary_string().starts_with("[INVALID_INPUT]"));
}

#[test]
fn non_positive_custom_cadence_is_invalid_input() {
    for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut rec = record();
        rec.custom_cadence_days = Some(bad);
        assert!(ContactSignals::try_from(rec).is_err(), "{bad}");
    }
}

#[test]
fn config_error_wraps_with_its_own_code() {
    let err: KithError = ConfigError::ValidationFailed {
        field: "drift.watching_buffer".into(),
        message: "must be at least 1.0".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("drift.watching_buffer"));
}
