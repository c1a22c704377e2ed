//! Medical interpretation engine.
//!
//! Pure functions turning raw vitals into derived metrics and categorical
//! statuses. No I/O, no panics on implausible numbers.

pub mod blood_pressure;
pub mod thresholds;

pub use thresholds::Thresholds;

use crate::models::Measurement;
use crate::models::status::{
    AlcoholStatus, BloodPressureStatus, BmiStatus, OxygenStatus, TemperatureStatus,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interpretation {
    pub bmi: f64,
    pub bmi_status: BmiStatus,
    /// `None` when the configured rule set has no temperature status.
    pub temperature_status: Option<TemperatureStatus>,
    pub blood_pressure_status: BloodPressureStatus,
    pub oxygen_status: OxygenStatus,
    pub alcohol_status: AlcoholStatus,
}

/// Interpret one set of vitals under the given thresholds.
pub fn interpret(m: &Measurement, t: &Thresholds) -> Interpretation {
    let bmi = compute_bmi(m.weight_kg, m.height_cm);

    Interpretation {
        bmi,
        bmi_status: bmi_status(bmi, t),
        temperature_status: t
            .temperature_status
            .then(|| temperature_status(m.temperature_c, t)),
        blood_pressure_status: blood_pressure::status_of(&m.blood_pressure),
        oxygen_status: oxygen_status(m.oxygen_saturation_pct, t),
        alcohol_status: alcohol_status(m.blood_alcohol_pct, t),
    }
}

/// weight / (height in metres)², rounded to 2 decimals.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn bmi_status(bmi: f64, t: &Thresholds) -> BmiStatus {
    if bmi < t.bmi_underweight_below {
        BmiStatus::Underweight
    } else if bmi < t.bmi_overweight_from {
        BmiStatus::Normal
    } else if bmi < t.bmi_obese_from {
        BmiStatus::Overweight
    } else {
        // also NaN / +inf from a zero height
        BmiStatus::Obese
    }
}

pub fn temperature_status(celsius: f64, t: &Thresholds) -> TemperatureStatus {
    if celsius < t.hypothermia_below {
        TemperatureStatus::Hypothermia
    } else if celsius <= t.fever_above {
        TemperatureStatus::Normal
    } else {
        TemperatureStatus::Fever
    }
}

pub fn oxygen_status(pct: f64, t: &Thresholds) -> OxygenStatus {
    if pct >= t.oxygen_normal_from {
        OxygenStatus::Normal
    } else if pct >= t.oxygen_caution_from {
        OxygenStatus::Caution
    } else {
        OxygenStatus::Hypoxemia
    }
}

pub fn alcohol_status(pct: f64, t: &Thresholds) -> AlcoholStatus {
    if pct <= t.alcohol_safe_max {
        AlcoholStatus::Safe
    } else if pct <= t.alcohol_impaired_max {
        AlcoholStatus::Impaired
    } else {
        AlcoholStatus::Danger
    }
}
