//! Canonical column set of the record store and the column migration.
//!
//! The schema only ever grows: each column remembers the release that
//! introduced it, and loading an older file back-fills what it lacks.

pub const ENTRY_TIMESTAMP: &str = "entry_timestamp";
pub const NAME: &str = "name";
pub const BIRTHPLACE: &str = "birthplace";
pub const BIRTH_DATE: &str = "birth_date";
pub const NATIONAL_ID: &str = "national_id";
pub const DEPARTMENT: &str = "department";
pub const WORK_UNIT: &str = "work_unit";
pub const PHONE: &str = "phone";
pub const WEIGHT_KG: &str = "weight_kg";
pub const HEIGHT_CM: &str = "height_cm";
pub const TEMPERATURE_C: &str = "temperature_c";
pub const BLOOD_PRESSURE: &str = "blood_pressure";
pub const OXYGEN_SATURATION_PCT: &str = "oxygen_saturation_pct";
pub const OXYGEN_STATUS: &str = "oxygen_status";
pub const BLOOD_ALCOHOL_PCT: &str = "blood_alcohol_pct";
pub const ALCOHOL_STATUS: &str = "alcohol_status";
pub const BMI: &str = "bmi";
pub const BMI_STATUS: &str = "bmi_status";
pub const BLOOD_PRESSURE_STATUS: &str = "blood_pressure_status";
pub const EXAMINER_NAME: &str = "examiner_name";
pub const PHOTO_FILENAME: &str = "photo_filename";
pub const TEMPERATURE_STATUS: &str = "temperature_status";

/// Latest schema version written by this release.
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Schema version that introduced the column.
    pub since: u32,
    /// Value back-filled into rows of files that predate the column.
    pub default: Option<&'static str>,
}

const fn col(name: &'static str, since: u32) -> ColumnSpec {
    ColumnSpec {
        name,
        since,
        default: None,
    }
}

pub static CANONICAL_COLUMNS: [ColumnSpec; 22] = [
    col(ENTRY_TIMESTAMP, 1),
    col(NAME, 1),
    col(BIRTHPLACE, 1),
    col(BIRTH_DATE, 1),
    col(NATIONAL_ID, 1),
    col(DEPARTMENT, 1),
    col(WORK_UNIT, 1),
    col(PHONE, 1),
    col(WEIGHT_KG, 1),
    col(HEIGHT_CM, 1),
    col(TEMPERATURE_C, 1),
    col(BLOOD_PRESSURE, 1),
    col(OXYGEN_SATURATION_PCT, 1),
    col(OXYGEN_STATUS, 1),
    col(BLOOD_ALCOHOL_PCT, 1),
    col(ALCOHOL_STATUS, 1),
    col(BMI, 1),
    col(BMI_STATUS, 1),
    col(BLOOD_PRESSURE_STATUS, 1),
    col(EXAMINER_NAME, 2),
    col(PHOTO_FILENAME, 1),
    col(TEMPERATURE_STATUS, 2),
];

/// Names of the canonical columns, in canonical order.
pub fn canonical_names() -> Vec<String> {
    CANONICAL_COLUMNS.iter().map(|c| c.name.to_string()).collect()
}

/// Columns a file written by schema `version` is expected to carry.
pub fn columns_for_version(version: u32) -> Vec<&'static str> {
    CANONICAL_COLUMNS
        .iter()
        .filter(|c| c.since <= version)
        .map(|c| c.name)
        .collect()
}

/// Newest schema version whose columns all appear in `header`; 0 when even
/// the first version's columns are incomplete.
pub fn detect_version(header: &[String]) -> u32 {
    (1..=SCHEMA_VERSION)
        .take_while(|v| {
            columns_for_version(*v)
                .iter()
                .all(|c| header.iter().any(|h| h.trim() == *c))
        })
        .last()
        .unwrap_or(0)
}

/// Result of aligning a loaded table to a target schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Migrated {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
    /// Target columns that were absent and got their default.
    pub backfilled: Vec<String>,
    /// Source columns unknown to the target schema.
    pub dropped: Vec<String>,
}

/// Align `rows` (laid out as `header`) to `target`.
///
/// Output columns are exactly the target columns in target order. Missing
/// columns are filled with their declared default, unknown ones are dropped,
/// and short rows are padded with nulls. Row count never changes.
pub fn migrate_columns(
    header: &[String],
    rows: Vec<Vec<Option<String>>>,
    target: &[ColumnSpec],
) -> Migrated {
    let source_index: Vec<Option<usize>> = target
        .iter()
        .map(|target_col| header.iter().position(|h| h.trim() == target_col.name))
        .collect();

    let backfilled = target
        .iter()
        .zip(&source_index)
        .filter(|(_, idx)| idx.is_none())
        .map(|(target_col, _)| target_col.name.to_string())
        .collect();

    let dropped = header
        .iter()
        .filter(|h| !target.iter().any(|target_col| target_col.name == h.trim()))
        .cloned()
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| {
            target
                .iter()
                .zip(&source_index)
                .map(|(target_col, idx)| match idx {
                    Some(i) => row.get(*i).cloned().flatten(),
                    None => target_col.default.map(str::to_string),
                })
                .collect()
        })
        .collect();

    Migrated {
        columns: target.iter().map(|c| c.name.to_string()).collect(),
        rows,
        backfilled,
        dropped,
    }
}
