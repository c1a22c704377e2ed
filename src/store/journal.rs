//! Append-only operations journal kept next to the register.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    /// Logged-in operator; empty in journals written before it was recorded.
    #[serde(default)]
    pub operator: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// `register.csv` → `register.journal.csv`, in the same directory.
pub fn journal_path(store_path: &Path) -> PathBuf {
    let stem = store_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "sehatkan".to_string());
    store_path.with_file_name(format!("{stem}.journal.csv"))
}

/// Write one journal line on behalf of `operator`.
pub fn write(
    store_path: &Path,
    operator: &str,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let path = journal_path(store_path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let is_new = !path.exists() || fs::metadata(&path)?.len() == 0;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    wtr.serialize(JournalEntry {
        date: Local::now().to_rfc3339(),
        operator: operator.to_string(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// All journal lines, oldest first. A missing journal is empty.
pub fn read_all(store_path: &Path) -> AppResult<Vec<JournalEntry>> {
    let path = journal_path(store_path);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(&path)?;
    let mut out = Vec::new();
    for entry in rdr.deserialize() {
        out.push(entry?);
    }
    Ok(out)
}
