// src/export/model.rs

use crate::store::Table;
use crate::store::schema;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Columns shown in the PDF report (the full register does not fit a page).
pub(crate) const PDF_COLUMNS: [&str; 12] = [
    schema::ENTRY_TIMESTAMP,
    schema::NAME,
    schema::NATIONAL_ID,
    schema::DEPARTMENT,
    schema::BLOOD_PRESSURE,
    schema::BLOOD_PRESSURE_STATUS,
    schema::OXYGEN_SATURATION_PCT,
    schema::OXYGEN_STATUS,
    schema::BLOOD_ALCOHOL_PCT,
    schema::ALCOHOL_STATUS,
    schema::BMI,
    schema::BMI_STATUS,
];

/// Header for CSV / JSON / XLSX: every stored column, canonical order.
pub(crate) fn get_headers(table: &Table) -> Vec<&str> {
    table.columns().iter().map(String::as_str).collect()
}

/// Rows as plain strings, null → "".
pub(crate) fn table_to_rows(table: &Table, columns: &[&str]) -> Vec<Vec<String>> {
    (0..table.len())
        .map(|i| {
            columns
                .iter()
                .map(|c| table.get(i, c).unwrap_or("").to_string())
                .collect()
        })
        .collect()
}

/// One register row as a JSON object, keys in column order, null cells as `null`.
pub(crate) struct JsonRow<'a> {
    pub columns: &'a [String],
    pub cells: &'a [Option<String>],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (col, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(col, cell)?;
        }
        map.end()
    }
}

pub(crate) fn json_rows(table: &Table) -> Vec<JsonRow<'_>> {
    table
        .rows()
        .iter()
        .map(|r| JsonRow {
            columns: table.columns(),
            cells: &r.cells,
        })
        .collect()
}
