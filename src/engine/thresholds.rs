use serde::{Deserialize, Serialize};

/// Configurable cut points of the classification rules.
///
/// Every field defaults to the current rule set, so a config file written by
/// an older release (or one that omits the section) keeps working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_bmi_underweight_below")]
    pub bmi_underweight_below: f64,
    #[serde(default = "default_bmi_overweight_from")]
    pub bmi_overweight_from: f64,
    #[serde(default = "default_bmi_obese_from")]
    pub bmi_obese_from: f64,

    /// `false` reproduces the earlier rule set, which had no temperature status.
    #[serde(default = "default_temperature_status")]
    pub temperature_status: bool,
    #[serde(default = "default_hypothermia_below")]
    pub hypothermia_below: f64,
    #[serde(default = "default_fever_above")]
    pub fever_above: f64,

    #[serde(default = "default_oxygen_normal_from")]
    pub oxygen_normal_from: f64,
    #[serde(default = "default_oxygen_caution_from")]
    pub oxygen_caution_from: f64,

    #[serde(default = "default_alcohol_safe_max")]
    pub alcohol_safe_max: f64,
    #[serde(default = "default_alcohol_impaired_max")]
    pub alcohol_impaired_max: f64,
}

fn default_bmi_underweight_below() -> f64 {
    18.5
}
fn default_bmi_overweight_from() -> f64 {
    25.0
}
fn default_bmi_obese_from() -> f64 {
    30.0
}
fn default_temperature_status() -> bool {
    true
}
fn default_hypothermia_below() -> f64 {
    35.0
}
fn default_fever_above() -> f64 {
    37.5
}
fn default_oxygen_normal_from() -> f64 {
    95.0
}
fn default_oxygen_caution_from() -> f64 {
    90.0
}
fn default_alcohol_safe_max() -> f64 {
    0.02
}
fn default_alcohol_impaired_max() -> f64 {
    0.15
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bmi_underweight_below: default_bmi_underweight_below(),
            bmi_overweight_from: default_bmi_overweight_from(),
            bmi_obese_from: default_bmi_obese_from(),
            temperature_status: default_temperature_status(),
            hypothermia_below: default_hypothermia_below(),
            fever_above: default_fever_above(),
            oxygen_normal_from: default_oxygen_normal_from(),
            oxygen_caution_from: default_oxygen_caution_from(),
            alcohol_safe_max: default_alcohol_safe_max(),
            alcohol_impaired_max: default_alcohol_impaired_max(),
        }
    }
}
