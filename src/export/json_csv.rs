// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{get_headers, json_rows};
use crate::export::notify_export_success;
use crate::store::Table;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&json_rows(table))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with header; same layout as the register file.
pub(crate) fn export_csv(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(get_headers(table))?;

    for row in table.rows() {
        wtr.write_record(row.cells.iter().map(|c| c.as_deref().unwrap_or("")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
