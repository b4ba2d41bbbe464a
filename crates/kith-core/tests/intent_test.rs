use kith_core::intent::IntentType;
use kith_core::KithError;

#[test]
fn intent_has_6_variants() {
    assert_eq!(IntentType::COUNT, 6);
    assert_eq!(IntentType::ALL.len(), 6);
}

#[test]
fn active_order_is_innermost_first() {
    assert_eq!(IntentType::InnerCircle.active_index(), Some(0));
    assert_eq!(IntentType::Transactional.active_index(), Some(3));
    assert_eq!(IntentType::Dormant.active_index(), None);
    assert_eq!(IntentType::New.active_index(), None);
    assert!(IntentType::Transactional.is_outermost());
    assert!(!IntentType::Maintain.is_outermost());
    assert!(!IntentType::Dormant.is_active());
}

#[test]
fn intent_serde_uses_wire_names() {
    for intent in IntentType::ALL {
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, format!("\"{}\"", intent.as_str()));
        let back: IntentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}

#[test]
fn from_str_accepts_wire_names_only() {
    assert_eq!("inner_circle".parse::<IntentType>().unwrap(), IntentType::InnerCircle);
    assert_eq!("new".parse::<IntentType>().unwrap(), IntentType::New);

    for bad in ["InnerCircle", "inner circle", "", "acquaintance"] {
        let err = bad.parse::<IntentType>().unwrap_err();
        assert!(matches!(err, KithError::InvalidInput { .. }), "{bad:?}");
    }
}
