/// ANSI color helper utilities for terminal output.
use crate::models::status::{Severity, severity_of_label};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub fn color_for_severity(s: Severity) -> &'static str {
    match s {
        Severity::Ok => GREEN,
        Severity::Caution => YELLOW,
        Severity::Alert => RED,
    }
}

/// Colour a stored status label by how worrying it is; empty cells are grey.
pub fn colorize_status(label: Option<&str>) -> String {
    match label {
        Some(l) if !l.trim().is_empty() => {
            format!("{}{l}{RESET}", color_for_severity(severity_of_label(l)))
        }
        _ => format!("{GREY}--{RESET}"),
    }
}

/// Returns a grey "--" for null cells, the plain value otherwise.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
