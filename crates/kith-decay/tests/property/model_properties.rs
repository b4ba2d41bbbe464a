use chrono::{DateTime, Duration, TimeZone, Utc};
use kith_core::calibration::{Calibration, Gender};
use kith_core::intent::IntentType;
use kith_core::models::{AssessmentContext, ContactSignals, HealthStatus};
use kith_decay::{classify_health, detect_drift, resolve_cadence};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
}

fn arb_intent() -> impl Strategy<Value = IntentType> {
    prop::sample::select(IntentType::ALL.to_vec())
}

fn arb_active() -> impl Strategy<Value = IntentType> {
    prop::sample::select(IntentType::ACTIVE_ORDER.to_vec())
}

fn arb_gender() -> impl Strategy<Value = Option<Gender>> {
    prop_oneof![
        Just(None),
        Just(Some(Gender::Male)),
        Just(Some(Gender::Female)),
        Just(Some(Gender::Other)),
    ]
}

proptest! {
    #[test]
    fn health_is_monotonic_in_elapsed_time(
        intent in arb_active(),
        is_kin in any::<bool>(),
        gender in arb_gender(),
        created_days_ago in proptest::option::of(0i64..400),
        earlier in 0i64..500_000,
        extra in 0i64..500_000,
    ) {
        let ctx = AssessmentContext { now: now(), gender };
        let make = |minutes_ago: i64| {
            let mut c = ContactSignals::new("p", intent)
                .with_kin(is_kin)
                .with_last_contact(now() - Duration::minutes(minutes_ago));
            if let Some(d) = created_days_ago {
                c = c.with_created_at(now() - Duration::days(d));
            }
            c
        };
        let cal = Calibration::canonical();
        let sooner = classify_health(cal, &make(earlier), &ctx);
        let later = classify_health(cal, &make(earlier + extra), &ctx);
        prop_assert!(sooner <= later, "{:?} then {:?}", sooner, later);
    }

    #[test]
    fn no_cadence_means_green(
        intent in arb_intent(),
        is_kin in any::<bool>(),
        gender in arb_gender(),
        last_days_ago in proptest::option::of(-30i64..5000),
        created_days_ago in proptest::option::of(0i64..1000),
    ) {
        let cal = Calibration::canonical();
        let created = created_days_ago.map(|d| now() - Duration::days(d));
        prop_assume!(resolve_cadence(cal, intent, None, created, now(), gender).is_none());

        let mut c = ContactSignals::new("p", intent).with_kin(is_kin);
        c.created_at = created;
        c.last_contact = last_days_ago.map(|d| now() - Duration::days(d));
        let ctx = AssessmentContext { now: now(), gender };
        prop_assert_eq!(classify_health(cal, &c, &ctx), HealthStatus::Green);
    }

    #[test]
    fn no_history_means_yellow_when_tracked(
        intent in arb_active(),
        is_kin in any::<bool>(),
        gender in arb_gender(),
        custom in proptest::option::of(1.0f64..365.0),
    ) {
        let mut c = ContactSignals::new("p", intent).with_kin(is_kin);
        c.custom_cadence_days = custom;
        let ctx = AssessmentContext { now: now(), gender };
        prop_assert_eq!(classify_health(Calibration::canonical(), &c, &ctx), HealthStatus::Yellow);
    }

    #[test]
    fn drift_only_points_outward(
        intent in arb_intent(),
        is_kin in any::<bool>(),
        custom in proptest::option::of(1.0f64..120.0),
        days in prop::collection::vec(0i64..180, 0..12),
    ) {
        let mut c = ContactSignals::new("p", intent)
            .with_kin(is_kin)
            .with_interactions(days.iter().map(|&d| now() - Duration::days(d)).collect());
        c.custom_cadence_days = custom;

        if let Some(alert) = detect_drift(Calibration::canonical(), &c, now()) {
            let current = alert.current_layer.active_index().unwrap();
            let toward = alert.drifting_toward.active_index().unwrap();
            prop_assert!(toward > current);
            prop_assert!(!alert.current_layer.is_outermost());
            prop_assert!(alert.evidence.interaction_count >= 3);
        }
    }

    #[test]
    fn model_is_idempotent(
        intent in arb_intent(),
        is_kin in any::<bool>(),
        gender in arb_gender(),
        last_days_ago in proptest::option::of(0i64..400),
        days in prop::collection::vec(0i64..180, 0..8),
    ) {
        let mut c = ContactSignals::new("p", intent)
            .with_kin(is_kin)
            .with_interactions(days.iter().map(|&d| now() - Duration::days(d)).collect());
        c.last_contact = last_days_ago.map(|d| now() - Duration::days(d));
        let ctx = AssessmentContext { now: now(), gender };
        let cal = Calibration::canonical();

        prop_assert_eq!(classify_health(cal, &c, &ctx), classify_health(cal, &c, &ctx));
        prop_assert_eq!(detect_drift(cal, &c, now()), detect_drift(cal, &c, now()));
    }
}
