use crate::errors::{AppError, AppResult};
use crate::models::HealthRecord;
use crate::models::record::ENTRY_TIMESTAMP_FORMAT;
use crate::store::schema::{self, ENTRY_TIMESTAMP};
use chrono::{NaiveDate, NaiveDateTime};

/// One stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Option<String>>,
    /// Parsed `entry_timestamp`; in-memory only, never persisted.
    pub entry_at: Option<NaiveDateTime>,
}

/// Whole content of the store: canonical columns plus rows of nullable cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parse the stored timestamp ("DD/MM/YYYY HH:MM"); a bare date means midnight.
pub fn parse_entry_at(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, ENTRY_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%d/%m/%Y")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl Table {
    /// Empty table with exactly the canonical columns.
    pub fn empty() -> Self {
        Self {
            columns: schema::canonical_names(),
            rows: Vec::new(),
        }
    }

    /// Build a table from already aligned rows, deriving `entry_at`.
    pub fn from_cells(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let ts_idx = columns.iter().position(|c| c == ENTRY_TIMESTAMP);
        let rows = rows
            .into_iter()
            .map(|cells| {
                let entry_at = ts_idx
                    .and_then(|i| cells.get(i).cloned().flatten())
                    .and_then(|s| parse_entry_at(&s));
                Row { cells, entry_at }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn require_column(&self, name: &str) -> AppResult<usize> {
        self.column_index(name)
            .ok_or_else(|| AppError::UnknownColumn(name.to_string()))
    }

    /// Cell value at a 0-based row; `None` for null or out-of-range.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.cells.get(idx)?.as_deref()
    }

    pub fn column_values(&self, column: &str) -> AppResult<Vec<Option<&str>>> {
        let idx = self.require_column(column)?;
        Ok(self
            .rows
            .iter()
            .map(|r| r.cells.get(idx).and_then(|c| c.as_deref()))
            .collect())
    }

    /// New table with `record` as the last row. No uniqueness check.
    /// Tables only ever hold the canonical columns, so the record's cells
    /// line up as they are.
    pub fn append(mut self, record: &HealthRecord) -> Self {
        self.rows.push(Row {
            cells: record.to_cells(),
            entry_at: Some(record.entry_at),
        });
        self
    }

    /// Rows whose entry date lies in `[start, end]`, both ends inclusive.
    /// Rows without a parseable timestamp never match.
    pub fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Table {
        let rows = self
            .rows
            .iter()
            .filter(|r| {
                r.entry_at
                    .map(|dt| dt.date() >= start && dt.date() <= end)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Overwrite one cell (0-based row). Editing the timestamp re-derives `entry_at`.
    pub fn set_cell(&mut self, row: usize, column: &str, value: Option<String>) -> AppResult<()> {
        let idx = self.require_column(column)?;
        let target = self
            .rows
            .get_mut(row)
            .ok_or(AppError::RowOutOfRange(row + 1))?;

        let value = value.filter(|v| !v.trim().is_empty());

        if column == ENTRY_TIMESTAMP {
            target.entry_at = value.as_deref().and_then(parse_entry_at);
        }

        if let Some(cell) = target.cells.get_mut(idx) {
            *cell = value;
        }
        Ok(())
    }

    /// Drop the given 0-based rows. All indices are checked before anything
    /// is removed.
    pub fn remove_rows(&mut self, indices: &[usize]) -> AppResult<()> {
        if let Some(bad) = indices.iter().find(|i| **i >= self.rows.len()) {
            return Err(AppError::RowOutOfRange(bad + 1));
        }

        let mut i = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
        Ok(())
    }

    /// Earliest and latest parsed entry time, if any row has one.
    pub fn entry_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut it = self.rows.iter().filter_map(|r| r.entry_at);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), dt| (lo.min(dt), hi.max(dt))))
    }
}

/// Read access to the cells of one record, stored or freshly built.
pub trait Cells {
    fn cell_value(&self, column: &str) -> Option<String>;
}

impl Cells for HealthRecord {
    fn cell_value(&self, column: &str) -> Option<String> {
        self.cell(column)
    }
}

/// Borrowed view of one stored row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    index: usize,
}

impl Cells for RowView<'_> {
    fn cell_value(&self, column: &str) -> Option<String> {
        self.table.get(self.index, column).map(str::to_string)
    }
}

impl Table {
    /// View of the 0-based row `index`.
    pub fn row_view(&self, index: usize) -> AppResult<RowView<'_>> {
        if index >= self.rows.len() {
            return Err(AppError::RowOutOfRange(index + 1));
        }
        Ok(RowView { table: self, index })
    }
}
