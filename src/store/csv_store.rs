use crate::errors::AppResult;
use crate::models::HealthRecord;
use crate::store::schema::{
    CANONICAL_COLUMNS, Migrated, SCHEMA_VERSION, detect_version, migrate_columns,
};
use crate::store::table::Table;
use crate::ui::messages::warning;
use csv::{ReaderBuilder, Writer};
use std::fs;
use std::path::{Path, PathBuf};

/// The on-disk CSV register. Every operation reads or writes the whole file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

/// What `try_load` found besides the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub table: Table,
    /// Schema version the file was written with.
    pub schema_version: u32,
    pub backfilled: Vec<String>,
    pub dropped: Vec<String>,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the register. Never fails: a missing file is an empty table, an
    /// unreadable one is reported and treated as empty so data entry is never
    /// blocked by a damaged history file.
    pub fn load(&self) -> Table {
        match self.try_load() {
            Ok(report) => report.table,
            Err(e) => {
                warning(format!(
                    "Could not read {} ({e}); continuing with an empty register.",
                    self.path.display()
                ));
                Table::empty()
            }
        }
    }

    /// Strict variant of [`CsvStore::load`] that surfaces parse errors and
    /// reports which columns had to be back-filled.
    pub fn try_load(&self) -> AppResult<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport {
                table: Table::empty(),
                schema_version: SCHEMA_VERSION,
                backfilled: Vec::new(),
                dropped: Vec::new(),
            });
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(
                rec.iter()
                    .map(|v| {
                        if v.is_empty() {
                            None
                        } else {
                            Some(v.to_string())
                        }
                    })
                    .collect(),
            );
        }

        let schema_version = detect_version(&header);

        let Migrated {
            columns,
            rows,
            backfilled,
            dropped,
        } = migrate_columns(&header, rows, &CANONICAL_COLUMNS);

        Ok(LoadReport {
            table: Table::from_cells(columns, rows),
            schema_version,
            backfilled,
            dropped,
        })
    }

    /// Return `table` with `record` appended. Nothing is written; follow with
    /// [`CsvStore::save`]. Not idempotent: every call adds a row.
    pub fn append(&self, table: Table, record: &HealthRecord) -> Table {
        table.append(record)
    }

    /// Overwrite the file with `table`. Only the stored cells are written;
    /// the parsed entry time stays in memory.
    pub fn save(&self, table: &Table) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = Writer::from_path(&self.path)?;
        wtr.write_record(table.columns())?;

        for row in table.rows() {
            wtr.write_record(row.cells.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Load, append one record, save. Returns the saved table.
    pub fn submit(&self, record: &HealthRecord) -> AppResult<Table> {
        let table = self.append(self.load(), record);
        self.save(&table)?;
        Ok(table)
    }

    /// Delete the file. Returns `false` when there was nothing to delete.
    pub fn reset(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}
