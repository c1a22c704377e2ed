use chrono::NaiveDateTime;
use sehatkan::engine::{Thresholds, interpret};
use sehatkan::errors::AppError;
use sehatkan::messaging::{
    MessageField, MessagingConfig, build_link, build_message, normalize_phone, percent_encode,
};
use sehatkan::models::{Department, HealthRecord, Identity, Measurement, WorkUnit};
use sehatkan::store::Table;

fn record(phone: &str) -> HealthRecord {
    let measurement = Measurement {
        weight_kg: 60.0,
        height_cm: 165.0,
        temperature_c: 36.5,
        blood_pressure: "145/95".to_string(),
        oxygen_saturation_pct: 88.0,
        blood_alcohol_pct: 0.0,
    };
    HealthRecord {
        entry_at: NaiveDateTime::parse_from_str("2025-03-10 08:15", "%Y-%m-%d %H:%M")
            .expect("timestamp"),
        identity: Identity {
            name: "Budi Santoso".to_string(),
            birthplace: String::new(),
            birth_date: None,
            national_id: "3512000000000001".to_string(),
            department: Department::Security,
            work_unit: WorkUnit::Panarukan,
            phone: phone.to_string(),
            examiner_name: String::new(),
        },
        interpretation: interpret(&measurement, &Thresholds::default()),
        measurement,
        photo_filename: "x.png".to_string(),
    }
}

#[test]
fn test_normalize_phone() {
    assert_eq!(normalize_phone("0812-3456 789", "62").as_deref(), Some("628123456789"));
    assert_eq!(normalize_phone("+62 812 3456", "62").as_deref(), Some("628123456"));
    assert_eq!(normalize_phone("62812", "62").as_deref(), Some("62812"));
    assert_eq!(normalize_phone("(0812) 34.56", "61").as_deref(), Some("618123456"));
    assert_eq!(normalize_phone("   ", "62"), None);
    assert_eq!(normalize_phone("", "62"), None);
}

#[test]
fn test_message_lists_configured_fields() {
    let msg = build_message(&record("0812"), &MessagingConfig::default());
    let lines: Vec<&str> = msg.lines().collect();

    assert_eq!(lines[0], "HEALTH MONITORING RESULT 10/03/2025");
    assert!(msg.contains("Name: Budi Santoso"));
    assert!(msg.contains("National ID: 3512000000000001"));
    assert!(msg.contains("* Blood pressure: 145/95 (Hypertension Stage 1)"));
    assert!(msg.contains("* Temperature: 36.5°C (Normal)"));
    assert!(msg.contains("* Oxygen saturation: 88% (Hypoxemia (Emergency))"));
    assert!(msg.contains("* Blood alcohol: 0% (Safe)"));
    assert!(!msg.contains("BMI"));
    assert_eq!(lines.last().copied(), Some("SEHATKAN - PLN"));
}

#[test]
fn test_message_fields_are_configurable() {
    let cfg = MessagingConfig {
        fields: vec![MessageField::Bmi, MessageField::Weight],
        ..MessagingConfig::default()
    };
    let msg = build_message(&record("0812"), &cfg);

    assert!(msg.contains("* BMI: 22.04 (Normal)"));
    assert!(msg.contains("* Weight: 60 kg"));
    assert!(!msg.contains("Blood pressure"));
}

#[test]
fn test_percent_encoding_keeps_only_unreserved() {
    assert_eq!(percent_encode("a-b_c.d~e/f"), "a-b_c.d~e/f");
    assert_eq!(percent_encode("a b"), "a%20b");
    assert_eq!(percent_encode("x\ny"), "x%0Ay");
    assert_eq!(percent_encode("(Safe)"), "%28Safe%29");
    assert_eq!(percent_encode("°"), "%C2%B0");
    assert_eq!(percent_encode("*:"), "%2A%3A");
}

#[test]
fn test_link_targets_normalized_phone() {
    let link = build_link(&record("0812 3456"), &MessagingConfig::default()).expect("link");

    assert!(link.starts_with("https://wa.me/628123456?text="));
    let text = link.split_once("?text=").map(|(_, t)| t).unwrap_or_default();
    assert!(!text.contains(' '));
    assert!(!text.contains('\n'));
    assert!(text.contains("Budi%20Santoso"));
}

#[test]
fn test_link_needs_a_phone() {
    let err = build_link(&record(""), &MessagingConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::MissingField(f) if f == "phone"));
}

#[test]
fn test_stored_row_renders_like_fresh_record() {
    let r = record("0812");
    let table = Table::empty().append(&r);
    let view = table.row_view(0).expect("row 0");

    let cfg = MessagingConfig::default();
    assert_eq!(build_message(&view, &cfg), build_message(&r, &cfg));
    assert_eq!(
        build_link(&view, &cfg).expect("stored link"),
        build_link(&r, &cfg).expect("fresh link")
    );
    assert!(table.row_view(1).is_err());
}
