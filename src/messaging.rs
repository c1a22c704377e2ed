//! Click-to-chat link carrying a short result summary for the examinee.

use crate::errors::{AppError, AppResult};
use crate::store::Cells;
use crate::store::schema;
use serde::{Deserialize, Serialize};

/// Result lines that can appear in the message, in the configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageField {
    BloodPressure,
    Temperature,
    Oxygen,
    Alcohol,
    Bmi,
    Weight,
    Height,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingConfig {
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_closing")]
    pub closing: String,
    #[serde(default = "default_signature")]
    pub signature: String,
    #[serde(default = "default_fields")]
    pub fields: Vec<MessageField>,
}

fn default_country_code() -> String {
    "62".to_string()
}
fn default_base_url() -> String {
    "https://wa.me/".to_string()
}
fn default_title() -> String {
    "HEALTH MONITORING RESULT".to_string()
}
fn default_closing() -> String {
    "Follow OHS rules and stay healthy".to_string()
}
fn default_signature() -> String {
    "SEHATKAN - PLN".to_string()
}
fn default_fields() -> Vec<MessageField> {
    vec![
        MessageField::BloodPressure,
        MessageField::Temperature,
        MessageField::Oxygen,
        MessageField::Alcohol,
    ]
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            base_url: default_base_url(),
            title: default_title(),
            closing: default_closing(),
            signature: default_signature(),
            fields: default_fields(),
        }
    }
}

const RULE: &str = "--------------------------------------------";

/// Strip separators and rewrite a national leading "0" to the country code.
pub fn normalize_phone(raw: &str, country_code: &str) -> Option<String> {
    let digits: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();

    if digits.is_empty() {
        return None;
    }

    match digits.strip_prefix('0') {
        Some(rest) => Some(format!("{country_code}{rest}")),
        None => Some(digits),
    }
}

fn value_or_dash(src: &impl Cells, column: &str) -> String {
    src.cell_value(column).unwrap_or_else(|| "-".to_string())
}

fn with_status(value: String, status: Option<String>) -> String {
    match status {
        Some(s) => format!("{value} ({s})"),
        None => value,
    }
}

fn field_line(src: &impl Cells, field: MessageField) -> String {
    match field {
        MessageField::BloodPressure => format!(
            "* Blood pressure: {}",
            with_status(
                value_or_dash(src, schema::BLOOD_PRESSURE),
                src.cell_value(schema::BLOOD_PRESSURE_STATUS)
            )
        ),
        MessageField::Temperature => format!(
            "* Temperature: {}",
            with_status(
                format!("{}°C", value_or_dash(src, schema::TEMPERATURE_C)),
                src.cell_value(schema::TEMPERATURE_STATUS)
            )
        ),
        MessageField::Oxygen => format!(
            "* Oxygen saturation: {}",
            with_status(
                format!("{}%", value_or_dash(src, schema::OXYGEN_SATURATION_PCT)),
                src.cell_value(schema::OXYGEN_STATUS)
            )
        ),
        MessageField::Alcohol => format!(
            "* Blood alcohol: {}",
            with_status(
                format!("{}%", value_or_dash(src, schema::BLOOD_ALCOHOL_PCT)),
                src.cell_value(schema::ALCOHOL_STATUS)
            )
        ),
        MessageField::Bmi => format!(
            "* BMI: {}",
            with_status(
                value_or_dash(src, schema::BMI),
                src.cell_value(schema::BMI_STATUS)
            )
        ),
        MessageField::Weight => format!("* Weight: {} kg", value_or_dash(src, schema::WEIGHT_KG)),
        MessageField::Height => format!("* Height: {} cm", value_or_dash(src, schema::HEIGHT_CM)),
    }
}

/// Plain-text summary of one record.
pub fn build_message(src: &impl Cells, cfg: &MessagingConfig) -> String {
    let date = src
        .cell_value(schema::ENTRY_TIMESTAMP)
        .and_then(|ts| ts.split(' ').next().map(str::to_string))
        .unwrap_or_default();

    let mut lines = vec![
        format!("{} {}", cfg.title, date).trim_end().to_string(),
        RULE.to_string(),
        format!("Name: {}", value_or_dash(src, schema::NAME)),
        format!("National ID: {}", value_or_dash(src, schema::NATIONAL_ID)),
        String::new(),
        "Examination results:".to_string(),
    ];

    lines.extend(cfg.fields.iter().map(|f| field_line(src, *f)));

    lines.push(String::new());
    lines.push(cfg.closing.clone());
    lines.push(RULE.to_string());
    lines.push(cfg.signature.clone());

    lines.join("\n")
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ~ /`.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Click-to-open URL for the record's phone number.
pub fn build_link(src: &impl Cells, cfg: &MessagingConfig) -> AppResult<String> {
    let phone = src
        .cell_value(schema::PHONE)
        .and_then(|p| normalize_phone(&p, &cfg.country_code))
        .ok_or_else(|| AppError::MissingField(schema::PHONE.to_string()))?;

    let text = build_message(src, cfg);
    Ok(format!(
        "{}{}?text={}",
        cfg.base_url,
        phone,
        percent_encode(&text)
    ))
}
