// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, table_to_rows};
use crate::export::notify_export_success;
use crate::models::status::{Severity, severity_of_label};
use crate::store::Table;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styled header, banded rows and auto column width.
pub(crate) fn export_xlsx(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Health records").map_err(to_app_error)?;

    let headers = get_headers(table);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let status_cols: Vec<bool> = headers.iter().map(|h| h.ends_with("_status")).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in table_to_rows(table, &headers).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let v = value.as_str();
            let is_status = status_cols.get(col).copied().unwrap_or(false);

            write_xlsx_cell(worksheet, row, col as u16, v, band_color, is_status)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Write one cell: dates as Excel dates, numbers as numbers, status labels
/// coloured by severity, anything else as text. Empty cells stay blank.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    is_status: bool,
) -> AppResult<()> {
    if s.is_empty() {
        worksheet
            .write_blank(row, col, &base_format(bg))
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = base_format(bg).set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if is_status {
        let fmt = match severity_of_label(s) {
            Severity::Ok => base_format(bg),
            Severity::Caution => base_format(bg).set_font_color(Color::RGB(0x9C5700)),
            Severity::Alert => base_format(bg).set_bold().set_font_color(Color::RGB(0xC00000)),
        };
        worksheet
            .write_with_format(row, col, s, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    // national IDs and phone numbers are digit strings, not numbers
    let id_like = s.chars().all(|c| c.is_ascii_digit())
        && (s.len() >= 12 || (s.len() > 1 && s.starts_with('0')));
    if !id_like
        && let Ok(num) = s.parse::<f64>()
        && num.is_finite()
    {
        let fmt = base_format(bg).set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base_format(bg))
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
