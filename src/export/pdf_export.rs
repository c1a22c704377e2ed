// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{PDF_COLUMNS, table_to_rows};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::store::Table;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF using PdfManager and the display subset of columns.
pub(crate) fn export_pdf(table: &Table, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let data_vec = table_to_rows(table, &PDF_COLUMNS);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &PDF_COLUMNS, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
