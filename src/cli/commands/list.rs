use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::status::{Severity, severity_of_label};
use crate::store::schema;
use crate::store::{CsvStore, Table};
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::range::parse_range;
use crate::utils::table::{Column, TextTable};

const STATUS_COLUMNS: [&str; 5] = [
    schema::BMI_STATUS,
    schema::TEMPERATURE_STATUS,
    schema::BLOOD_PRESSURE_STATUS,
    schema::OXYGEN_STATUS,
    schema::ALCOHOL_STATUS,
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, alerts } = cmd {
        let store = CsvStore::new(cfg.store_path());
        let table = select(&store.load(), period)?;

        if table.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let mut out = TextTable::new(vec![
            Column::new("#", 5),
            Column::new("Date", 16),
            Column::new("Name", 24),
            Column::new("National ID", 18),
            Column::new("Department", 10),
            Column::new("BP", 9),
            Column::new("BP status", 22),
            Column::new("SpO2", 5),
            Column::new("Oxygen", 22),
            Column::new("Alcohol", 8),
            Column::new("BMI", 6),
            Column::new("BMI status", 12),
        ]);

        let mut shown = 0;
        for i in 0..table.len() {
            if *alerts && !has_alert(&table, i) {
                continue;
            }

            let get = |c: &str| table.get(i, c);
            out.add_row(vec![
                (i + 1).to_string(),
                colorize_optional(get(schema::ENTRY_TIMESTAMP)),
                colorize_optional(get(schema::NAME)),
                colorize_optional(get(schema::NATIONAL_ID)),
                colorize_optional(get(schema::DEPARTMENT)),
                colorize_optional(get(schema::BLOOD_PRESSURE)),
                colorize_status(get(schema::BLOOD_PRESSURE_STATUS)),
                colorize_optional(get(schema::OXYGEN_SATURATION_PCT)),
                colorize_status(get(schema::OXYGEN_STATUS)),
                colorize_status(get(schema::ALCOHOL_STATUS)),
                colorize_optional(get(schema::BMI)),
                colorize_status(get(schema::BMI_STATUS)),
            ]);
            shown += 1;
        }

        if shown == 0 {
            info("No records with an alarming status.");
            return Ok(());
        }

        println!("{}", out.render());
        println!("{shown} of {} record(s)", table.len());
    }
    Ok(())
}

/// Rows in the period; no period or `all` keeps everything.
pub(crate) fn select(table: &Table, period: &Option<String>) -> AppResult<Table> {
    let bounds = match period {
        Some(p) => parse_range(p)?,
        None => None,
    };
    Ok(match bounds {
        Some((start, end)) => table.filter_by_date_range(start, end),
        None => table.clone(),
    })
}

fn has_alert(table: &Table, row: usize) -> bool {
    STATUS_COLUMNS.iter().any(|c| {
        table
            .get(row, c)
            .is_some_and(|l| severity_of_label(l) == Severity::Alert)
    })
}
