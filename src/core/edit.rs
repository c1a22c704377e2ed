use crate::auth::Session;
use crate::errors::{AppError, AppResult};
use crate::store::{CsvStore, Table, journal};
use crate::ui::messages::warning;

/// One `column=value` assignment on a 1-based row. An empty value clears
/// the cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub row: usize,
    pub column: String,
    pub value: Option<String>,
}

impl CellEdit {
    /// Parse `ROW:COLUMN=VALUE`, e.g. `3:phone=0812345678`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let bad = || {
            AppError::InvalidValue(format!(
                "edit '{s}' must look like ROW:COLUMN=VALUE (e.g. 3:phone=0812345678)"
            ))
        };

        let (row_part, rest) = s.split_once(':').ok_or_else(bad)?;
        let (column, value) = rest.split_once('=').ok_or_else(bad)?;
        let row: usize = row_part.trim().parse().map_err(|_| bad())?;

        if row == 0 {
            return Err(AppError::RowOutOfRange(0));
        }

        let value = value.trim();
        Ok(Self {
            row,
            column: column.trim().to_string(),
            value: (!value.is_empty()).then(|| value.to_string()),
        })
    }
}

/// Result summary of an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSummary {
    pub cells_changed: usize,
    pub rows_deleted: usize,
    pub rows_left: usize,
}

/// Whole-table edit: apply changes in memory, then overwrite the register.
pub struct EditLogic;

impl EditLogic {
    /// Apply `edits` then drop `delete_rows` (1-based, as printed by `list`).
    /// Row numbers refer to the table as loaded, before any deletion.
    pub fn apply_to(table: &mut Table, edits: &[CellEdit], delete_rows: &[usize]) -> AppResult<()> {
        for e in edits {
            table.set_cell(e.row - 1, &e.column, e.value.clone())?;
        }

        let mut zero_based = Vec::with_capacity(delete_rows.len());
        for r in delete_rows {
            if *r == 0 {
                return Err(AppError::RowOutOfRange(0));
            }
            zero_based.push(r - 1);
        }
        table.remove_rows(&zero_based)
    }

    pub fn apply(
        store: &CsvStore,
        session: &Session,
        edits: &[CellEdit],
        delete_rows: &[usize],
    ) -> AppResult<EditSummary> {
        let mut table = store.load();
        Self::apply_to(&mut table, edits, delete_rows)?;
        store.save(&table)?;

        let mut deleted = delete_rows.to_vec();
        deleted.sort_unstable();
        deleted.dedup();

        let summary = EditSummary {
            cells_changed: edits.len(),
            rows_deleted: deleted.len(),
            rows_left: table.len(),
        };

        if let Err(e) = journal::write(
            store.path(),
            session.operator(),
            "edit",
            &store.path().to_string_lossy(),
            &format!(
                "{} cell(s) changed, {} row(s) deleted",
                summary.cells_changed, summary.rows_deleted
            ),
        ) {
            warning(format!("Failed to write journal: {e}"));
        }

        Ok(summary)
    }
}
