//! Unified application error type.
//! All modules (store, engine, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Row {0} does not exist")]
    RowOutOfRange(usize),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Missing required field(s): {0}")]
    MissingField(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Access denied: wrong username or password")]
    AccessDenied,

    // ---------------------------
    // Photo
    // ---------------------------
    #[error("Photo error: {0}")]
    Photo(#[from] image::ImageError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
