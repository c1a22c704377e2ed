use sehatkan::engine::blood_pressure::{classify, parse_reading, status_of};
use sehatkan::engine::{Thresholds, compute_bmi, interpret};
use sehatkan::models::Measurement;
use sehatkan::models::status::{
    AlcoholStatus, BloodPressureStatus, BmiStatus, OxygenStatus, TemperatureStatus,
};

fn measurement(weight: f64, height: f64, temp: f64, bp: &str, oxygen: f64, alcohol: f64) -> Measurement {
    Measurement {
        weight_kg: weight,
        height_cm: height,
        temperature_c: temp,
        blood_pressure: bp.to_string(),
        oxygen_saturation_pct: oxygen,
        blood_alcohol_pct: alcohol,
    }
}

#[test]
fn test_checkpoint_example() {
    let m = measurement(60.0, 165.0, 36.5, "145/95", 88.0, 0.0);
    let r = interpret(&m, &Thresholds::default());

    assert_eq!(r.bmi, 22.04);
    assert_eq!(r.bmi_status, BmiStatus::Normal);
    assert_eq!(r.blood_pressure_status, BloodPressureStatus::HypertensionStage1);
    assert_eq!(r.oxygen_status, OxygenStatus::Hypoxemia);
    assert_eq!(r.oxygen_status.label(), "Hypoxemia (Emergency)");
    assert_eq!(r.alcohol_status, AlcoholStatus::Safe);
    assert_eq!(r.temperature_status, Some(TemperatureStatus::Normal));
}

#[test]
fn test_blood_pressure_band_boundaries() {
    use BloodPressureStatus::*;

    let cases = [
        ("89/59", Hypotension),
        ("90/60", Normal),
        ("129/84", Normal),
        ("130/85", PreHypertension),
        ("139/89", PreHypertension),
        ("140/90", NormalBorderline),
        ("141/80", HypertensionStage1),
        ("120/91", HypertensionStage1),
        ("180/120", HypertensionStage1),
        ("181/121", HypertensiveCrisis),
        ("181/80", HypertensiveCrisis),
        ("120/121", HypertensiveCrisis),
        ("120/80", Normal),
        ("85/70", Hypotension),
        ("110/55", Hypotension),
    ];

    for (reading, expected) in cases {
        assert_eq!(status_of(reading), expected, "reading {reading}");
    }
}

#[test]
fn test_borderline_only_for_140_or_90() {
    for s in 0..=260u32 {
        for d in 0..=160u32 {
            if classify(s, d) == BloodPressureStatus::NormalBorderline {
                assert!(s == 140 || d == 90, "{s}/{d} fell through to borderline");
            }
        }
    }

    assert_eq!(classify(140, 70), BloodPressureStatus::NormalBorderline);
    assert_eq!(classify(120, 90), BloodPressureStatus::NormalBorderline);
    // an earlier band still wins when it matches
    assert_eq!(classify(135, 90), BloodPressureStatus::PreHypertension);
    assert_eq!(classify(140, 86), BloodPressureStatus::PreHypertension);
}

#[test]
fn test_blood_pressure_invalid_format() {
    for raw in [
        "", "   ", "abc", "120", "120/", "/80", "120-80", "120 / 80", "-120/80", "+120/80",
        "120.5/80", "120/80/70",
    ] {
        assert_eq!(status_of(raw), BloodPressureStatus::InvalidFormat, "input {raw:?}");
    }
}

#[test]
fn test_oversized_blood_pressure_saturates() {
    assert_eq!(parse_reading("99999999999/80"), Some((u32::MAX, 80)));
    assert_eq!(status_of("99999999999/80"), BloodPressureStatus::HypertensiveCrisis);
    assert_eq!(status_of("120/99999999999999999999999"), BloodPressureStatus::HypertensiveCrisis);
}

#[test]
fn test_blood_pressure_trims_whitespace() {
    assert_eq!(parse_reading("  120/80 \n"), Some((120, 80)));
    assert_eq!(status_of(" 145/95 "), BloodPressureStatus::HypertensionStage1);
}

#[test]
fn test_bmi_partition() {
    let t = Thresholds::default();
    let status = |bmi: f64| sehatkan::engine::bmi_status(bmi, &t);

    assert_eq!(status(18.49), BmiStatus::Underweight);
    assert_eq!(status(18.5), BmiStatus::Normal);
    assert_eq!(status(24.99), BmiStatus::Normal);
    assert_eq!(status(25.0), BmiStatus::Overweight);
    assert_eq!(status(29.99), BmiStatus::Overweight);
    assert_eq!(status(30.0), BmiStatus::Obese);
}

#[test]
fn test_bmi_rounding_and_zero_height() {
    assert_eq!(compute_bmi(70.0, 175.0), 22.86);
    assert_eq!(compute_bmi(100.0, 150.0), 44.44);

    // zero height never panics; the comparison chain ends on Obese
    let r = interpret(&measurement(60.0, 0.0, 36.5, "120/80", 98.0, 0.0), &Thresholds::default());
    assert!(!r.bmi.is_finite());
    assert_eq!(r.bmi_status, BmiStatus::Obese);
}

#[test]
fn test_oxygen_and_alcohol_boundaries() {
    let t = Thresholds::default();
    let oxy = |v: f64| sehatkan::engine::oxygen_status(v, &t);
    let alc = |v: f64| sehatkan::engine::alcohol_status(v, &t);

    assert_eq!(oxy(95.0), OxygenStatus::Normal);
    assert_eq!(oxy(94.9), OxygenStatus::Caution);
    assert_eq!(oxy(90.0), OxygenStatus::Caution);
    assert_eq!(oxy(89.9), OxygenStatus::Hypoxemia);

    assert_eq!(alc(0.02), AlcoholStatus::Safe);
    assert_eq!(alc(0.021), AlcoholStatus::Impaired);
    assert_eq!(alc(0.15), AlcoholStatus::Impaired);
    assert_eq!(alc(0.16), AlcoholStatus::Danger);
}

#[test]
fn test_temperature_rules_and_status_toggle() {
    let t = Thresholds::default();
    let temp = |v: f64| sehatkan::engine::temperature_status(v, &t);

    assert_eq!(temp(34.9), TemperatureStatus::Hypothermia);
    assert_eq!(temp(35.0), TemperatureStatus::Normal);
    assert_eq!(temp(37.5), TemperatureStatus::Normal);
    assert_eq!(temp(37.6), TemperatureStatus::Fever);

    let m = measurement(60.0, 165.0, 39.0, "120/80", 98.0, 0.0);
    assert_eq!(interpret(&m, &without_temperature_status()).temperature_status, None);
    assert_eq!(
        interpret(&m, &Thresholds::default()).temperature_status,
        Some(TemperatureStatus::Fever)
    );
}

#[test]
fn test_custom_thresholds_from_yaml() {
    let t: Thresholds = serde_yaml::from_str("oxygen_normal_from: 96\nalcohol_safe_max: 0.0\n")
        .expect("parse thresholds");

    assert_eq!(t.oxygen_normal_from, 96.0);
    assert_eq!(t.alcohol_safe_max, 0.0);
    // untouched keys keep their default
    assert_eq!(t.bmi_obese_from, 30.0);
    assert!(t.temperature_status);

    assert_eq!(sehatkan::engine::oxygen_status(95.5, &t), OxygenStatus::Caution);
    assert_eq!(sehatkan::engine::alcohol_status(0.01, &t), AlcoholStatus::Impaired);
}

/// Rule set of the first release: same cut points, no temperature status.
fn without_temperature_status() -> Thresholds {
    Thresholds {
        temperature_status: false,
        ..Thresholds::default()
    }
}
