// src/export/logic.rs

use crate::auth::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::store::{CsvStore, journal};
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::range::parse_range;
use std::path::Path;

/// High-level export of the register.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the register, optionally restricted to a period.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns `false` when the period selects no rows; no file is written then.
    pub fn export(
        store: &CsvStore,
        session: &Session,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        let table = store.load();
        let table = match bounds {
            Some((start, end)) => table.filter_by_date_range(start, end),
            None => table,
        };

        if table.is_empty() {
            warning("No records found for the selected period.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&table, path)?,
            ExportFormat::Json => export_json(&table, path)?,
            ExportFormat::Xlsx => export_xlsx(&table, path)?,
            ExportFormat::Pdf => export_pdf(&table, path, &build_pdf_title(range))?,
        }

        if let Err(e) = journal::write(
            store.path(),
            session.operator(),
            "export",
            file,
            &format!("{} record(s) exported as {}", table.len(), format.as_str()),
        ) {
            warning(format!("Failed to write journal: {e}"));
        }

        Ok(true)
    }
}

/// PDF title for the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    const BASE: &str = "Health examination records";

    let Some(p) = period.as_deref().map(str::trim) else {
        return BASE.to_string();
    };

    if p.eq_ignore_ascii_case("all") {
        return BASE.to_string();
    }

    if let Some((start, end)) = p.split_once(':') {
        return format!("{BASE} from {start} to {end}");
    }

    match p.len() {
        4 => format!("{BASE} for year {p}"),
        7 => match p.split_once('-') {
            Some((year, month)) => format!("{BASE} for {} {year}", month_name(month)),
            None => BASE.to_string(),
        },
        10 => format!("{BASE} for {p}"),
        _ => BASE.to_string(),
    }
}

