use chrono::{NaiveDate, NaiveDateTime};
use sehatkan::engine::{Thresholds, interpret};
use sehatkan::models::{Department, HealthRecord, Identity, Measurement, WorkUnit};
use sehatkan::store::schema::{self, CANONICAL_COLUMNS, migrate_columns};
use sehatkan::store::{CsvStore, Table, journal};
use std::fs;

mod common;
use common::{scratch_dir, write_register};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("timestamp")
}

fn record(name: &str, national_id: &str, entry: &str, bp: &str) -> HealthRecord {
    let measurement = Measurement {
        blood_pressure: bp.to_string(),
        ..Measurement::default()
    };
    HealthRecord {
        entry_at: at(entry),
        identity: Identity {
            name: name.to_string(),
            birthplace: "Situbondo".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 1),
            national_id: national_id.to_string(),
            department: Department::Yantek,
            work_unit: WorkUnit::Besuki,
            phone: String::new(),
            examiner_name: "Dr. Sari".to_string(),
        },
        interpretation: interpret(&measurement, &Thresholds::default()),
        measurement,
        photo_filename: format!("{national_id}_photo.png"),
    }
}

#[test]
fn test_missing_file_loads_empty_canonical_table() {
    let dir = scratch_dir("store_missing");
    let store = CsvStore::new(dir.join("none.csv"));

    let table = store.load();
    assert!(table.is_empty());
    assert_eq!(table.columns(), schema::canonical_names().as_slice());
    assert!(!store.exists());
}

#[test]
fn test_record_cells_follow_canonical_order() {
    let r = record("Budi", "3512000000000001", "2025-03-10 08:15", "145/95");
    let cells = r.to_cells();

    assert_eq!(cells.len(), CANONICAL_COLUMNS.len());
    assert_eq!(cells[0].as_deref(), Some("10/03/2025 08:15"));
    assert_eq!(r.cell(schema::BIRTH_DATE).as_deref(), Some("01-01-1995"));
    assert_eq!(r.cell(schema::WORK_UNIT).as_deref(), Some("ULP Besuki"));
    assert_eq!(r.cell(schema::BMI).as_deref(), Some("22.04"));
    assert_eq!(
        r.cell(schema::BLOOD_PRESSURE_STATUS).as_deref(),
        Some("Hypertension Stage 1")
    );
    // empty phone is a null cell
    assert_eq!(r.cell(schema::PHONE), None);
}

#[test]
fn test_append_save_load_roundtrip() {
    let dir = scratch_dir("store_roundtrip");
    let store = CsvStore::new(dir.join("nested").join("register.csv"));

    let first = record("Budi", "3512000000000001", "2025-03-10 08:15", "145/95");
    let second = record("Sari", "3512000000000002", "2025-03-11 09:00", "120/80");

    store.submit(&first).expect("submit first");
    let saved = store.submit(&second).expect("submit second");
    assert_eq!(saved.len(), 2);

    let loaded = store.try_load().expect("load");
    assert!(loaded.backfilled.is_empty());
    assert_eq!(loaded.schema_version, schema::SCHEMA_VERSION);
    assert!(loaded.dropped.is_empty());

    let table = loaded.table;
    assert_eq!(table.len(), 2);
    for (row, original) in table.rows().iter().zip([&first, &second]) {
        assert_eq!(row.cells, original.to_cells());
        assert_eq!(row.entry_at, Some(original.entry_at));
    }
    assert_eq!(table.get(0, schema::NAME), Some("Budi"));
    assert_eq!(table.get(1, schema::BLOOD_PRESSURE_STATUS), Some("Normal"));
    assert_eq!(table.get(1, schema::PHONE), None);
    assert_eq!(table.rows()[1].entry_at, Some(at("2025-03-11 09:00")));

    // the parsed time is never written
    let raw = fs::read_to_string(store.path()).expect("read register");
    let header = raw.lines().next().expect("header");
    assert_eq!(header, schema::canonical_names().join(","));
}

#[test]
fn test_append_is_not_idempotent() {
    let r = record("Budi", "3512000000000001", "2025-03-10 08:15", "145/95");
    let table = Table::empty().append(&r).append(&r);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_older_register_gets_missing_columns() {
    let dir = scratch_dir("store_backfill");
    let path = dir.join("register.csv");
    let path_str = path.to_string_lossy().to_string();

    let v1 = schema::columns_for_version(1);
    let mut row: Vec<&str> = vec![""; v1.len()];
    row[0] = "10/03/2025 08:15";
    row[1] = "Budi";
    row[v1.iter().position(|c| *c == schema::BLOOD_PRESSURE_STATUS).expect("bp column")] =
        "Normal";
    write_register(&path_str, &v1, &[row.as_slice()]);

    assert_eq!(
        schema::columns_for_version(schema::SCHEMA_VERSION).len(),
        CANONICAL_COLUMNS.len()
    );

    let report = CsvStore::new(&path).try_load().expect("load v1 register");
    assert_eq!(report.schema_version, 1);
    assert_eq!(
        report.backfilled,
        vec![
            schema::EXAMINER_NAME.to_string(),
            schema::TEMPERATURE_STATUS.to_string()
        ]
    );

    let table = report.table;
    assert_eq!(table.columns(), schema::canonical_names().as_slice());
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, schema::NAME), Some("Budi"));
    assert_eq!(table.get(0, schema::EXAMINER_NAME), None);
    assert_eq!(table.get(0, schema::BLOOD_PRESSURE_STATUS), Some("Normal"));
}

#[test]
fn test_detect_version_from_header() {
    let names = |cols: Vec<&str>| cols.iter().map(|c| c.to_string()).collect::<Vec<_>>();

    assert_eq!(schema::detect_version(&schema::canonical_names()), 2);
    assert_eq!(schema::detect_version(&names(schema::columns_for_version(1))), 1);
    assert_eq!(schema::detect_version(&names(vec![schema::NAME])), 0);
}

#[test]
fn test_migrate_columns_reorders_and_drops() {
    let header: Vec<String> = ["nickname", schema::NAME, schema::ENTRY_TIMESTAMP]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = vec![vec![
        Some("Bud".to_string()),
        Some("Budi".to_string()),
        Some("10/03/2025 08:15".to_string()),
    ]];

    let m = migrate_columns(&header, rows, &CANONICAL_COLUMNS);

    assert_eq!(m.columns, schema::canonical_names());
    assert_eq!(m.dropped, vec!["nickname".to_string()]);
    assert_eq!(m.backfilled.len(), CANONICAL_COLUMNS.len() - 2);
    assert_eq!(m.rows.len(), 1);
    assert_eq!(m.rows[0][0].as_deref(), Some("10/03/2025 08:15"));
    assert_eq!(m.rows[0][1].as_deref(), Some("Budi"));
    assert!(m.rows[0][2..].iter().all(Option::is_none));
}

#[test]
fn test_corrupt_register_loads_empty() {
    let dir = scratch_dir("store_corrupt");
    let path = dir.join("register.csv");
    fs::write(&path, [0xff, 0xfe, 0x00, b'\n', 0xc3, 0x28]).expect("write garbage");

    let table = CsvStore::new(&path).load();
    assert!(table.is_empty());
    assert_eq!(table.columns(), schema::canonical_names().as_slice());
}

#[test]
fn test_filter_by_date_range_is_inclusive() {
    let table = Table::empty()
        .append(&record("A", "1", "2025-02-28 23:59", "120/80"))
        .append(&record("B", "2", "2025-03-01 00:00", "120/80"))
        .append(&record("C", "3", "2025-03-31 23:59", "120/80"))
        .append(&record("D", "4", "2025-04-01 00:00", "120/80"));

    let start = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
    let end = NaiveDate::from_ymd_opt(2025, 3, 31).expect("date");
    let march = table.filter_by_date_range(start, end);

    let names: Vec<_> = march.column_values(schema::NAME).expect("names");
    assert_eq!(names, vec![Some("B"), Some("C")]);

    // rows without a readable timestamp never match
    let mut broken = table.clone();
    broken
        .set_cell(1, schema::ENTRY_TIMESTAMP, Some("yesterday".to_string()))
        .expect("set cell");
    assert_eq!(broken.filter_by_date_range(start, end).len(), 1);
}

#[test]
fn test_set_cell_and_remove_rows() {
    let mut table = Table::empty()
        .append(&record("A", "1", "2025-03-01 08:00", "120/80"))
        .append(&record("B", "2", "2025-03-02 08:00", "120/80"))
        .append(&record("C", "3", "2025-03-03 08:00", "120/80"));

    table
        .set_cell(0, schema::PHONE, Some("0812".to_string()))
        .expect("set phone");
    table.set_cell(1, schema::NAME, None).expect("clear name");
    assert_eq!(table.get(0, schema::PHONE), Some("0812"));
    assert_eq!(table.get(1, schema::NAME), None);

    assert!(table.set_cell(0, "nickname", None).is_err());
    assert!(table.set_cell(9, schema::NAME, None).is_err());

    // an out-of-range index rejects the whole call
    assert!(table.remove_rows(&[0, 7]).is_err());
    assert_eq!(table.len(), 3);

    table.remove_rows(&[0, 2]).expect("remove");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, schema::NATIONAL_ID), Some("2"));
}

#[test]
fn test_reset_deletes_register() {
    let dir = scratch_dir("store_reset");
    let store = CsvStore::new(dir.join("register.csv"));

    assert!(!store.reset().expect("reset missing"));

    store
        .submit(&record("A", "1", "2025-03-01 08:00", "120/80"))
        .expect("submit");
    assert!(store.exists());
    assert!(store.reset().expect("reset"));
    assert!(!store.exists());
    assert!(store.load().is_empty());
}

#[test]
fn test_journal_appends_entries() {
    let dir = scratch_dir("store_journal");
    let store_path = dir.join("register.csv");

    journal::write(&store_path, "admin", "add", "1", "first").expect("journal add");
    journal::write(&store_path, "nurse", "edit", "register.csv", "second, with comma")
        .expect("journal edit");

    assert_eq!(
        journal::journal_path(&store_path),
        dir.join("register.journal.csv")
    );

    let entries = journal::read_all(&store_path).expect("read journal");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "add");
    assert_eq!(entries[0].operator, "admin");
    assert_eq!(entries[1].operator, "nurse");
    assert_eq!(entries[1].message, "second, with comma");
}
