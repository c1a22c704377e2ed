//! Blood-pressure parsing and the ordered band table.
//!
//! | order | condition                                   | status               |
//! |-------|---------------------------------------------|----------------------|
//! | 1     | systolic > 180 or diastolic > 120           | Hypertensive Crisis  |
//! | 2     | systolic > 140 or diastolic > 90            | Hypertension Stage 1 |
//! | 3     | 130 ≤ systolic ≤ 139 or 85 ≤ diastolic ≤ 89 | Pre-Hypertension     |
//! | 4     | 90 ≤ systolic ≤ 129 and 60 ≤ diastolic ≤ 84 | Normal               |
//! | 5     | systolic < 90 or diastolic < 60             | Hypotension          |
//! | 6     | anything else                               | Normal (borderline)  |
//!
//! The first matching row wins. Row 6 only catches readings with systolic
//! exactly 140 or diastolic exactly 90 that no earlier row claims.

use crate::models::status::BloodPressureStatus;
use regex::Regex;
use std::sync::LazyLock;

static READING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").unwrap());

/// Parse "systolic/diastolic". Surrounding whitespace is ignored; signs,
/// decimals and inner spaces are rejected. Digit runs too long for `u32`
/// saturate, so an absurdly high reading still lands in the top band.
pub fn parse_reading(raw: &str) -> Option<(u32, u32)> {
    let caps = READING.captures(raw.trim())?;
    Some((saturating(&caps[1]), saturating(&caps[2])))
}

// the regex guarantees ASCII digits, so overflow is the only parse failure
fn saturating(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

pub fn classify(systolic: u32, diastolic: u32) -> BloodPressureStatus {
    let (s, d) = (systolic, diastolic);

    if s > 180 || d > 120 {
        BloodPressureStatus::HypertensiveCrisis
    } else if s > 140 || d > 90 {
        BloodPressureStatus::HypertensionStage1
    } else if (130..=139).contains(&s) || (85..=89).contains(&d) {
        BloodPressureStatus::PreHypertension
    } else if (90..=129).contains(&s) && (60..=84).contains(&d) {
        BloodPressureStatus::Normal
    } else if s < 90 || d < 60 {
        BloodPressureStatus::Hypotension
    } else {
        BloodPressureStatus::NormalBorderline
    }
}

/// Status of a raw reading; unparseable text yields `InvalidFormat`.
pub fn status_of(raw: &str) -> BloodPressureStatus {
    match parse_reading(raw) {
        Some((s, d)) => classify(s, d),
        None => BloodPressureStatus::InvalidFormat,
    }
}
