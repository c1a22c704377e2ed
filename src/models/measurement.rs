use serde::Serialize;

/// Raw vital signs as entered at the checkpoint.
///
/// Values are taken as given: plausibility is the caller's concern, the
/// engine only guards the blood-pressure text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub temperature_c: f64,
    /// "systolic/diastolic", kept verbatim even when malformed
    pub blood_pressure: String,
    pub oxygen_saturation_pct: f64,
    pub blood_alcohol_pct: f64,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            weight_kg: 60.0,
            height_cm: 165.0,
            temperature_c: 36.5,
            blood_pressure: String::new(),
            oxygen_saturation_pct: 98.0,
            blood_alcohol_pct: 0.0,
        }
    }
}
