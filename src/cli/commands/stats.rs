use crate::cli::commands::list::select;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{EMPTY_LABEL, status_distribution};
use crate::errors::AppResult;
use crate::models::record::ENTRY_TIMESTAMP_FORMAT;
use crate::models::status::severity_of_label;
use crate::store::{CsvStore, Table, schema};
use crate::ui::messages::{field, header, info};
use crate::utils::colors::{GREY, RESET, color_for_severity};
use crate::utils::{bar, fit};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let store = CsvStore::new(cfg.store_path());
        let table = select(&store.load(), period)?;

        if table.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        header("Register");
        field("Records", table.len());
        if let Some((first, last)) = table.entry_span() {
            field("First entry", first.format(ENTRY_TIMESTAMP_FORMAT));
            field("Last entry", last.format(ENTRY_TIMESTAMP_FORMAT));
        }

        print_chart(&table, "Blood pressure", schema::BLOOD_PRESSURE_STATUS)?;
        print_chart(&table, "Oxygen saturation", schema::OXYGEN_STATUS)?;
    }
    Ok(())
}

fn print_chart(table: &Table, title: &str, column: &str) -> AppResult<()> {
    let dist = status_distribution(table, column)?;
    let max = dist.first().map(|(_, n)| *n).unwrap_or(0);

    header(title);
    for (label, count) in &dist {
        // pad before colouring so the ANSI codes don't count as width
        let padded = fit(label, LABEL_WIDTH);
        let shown = if label == EMPTY_LABEL {
            format!("{GREY}{padded}{RESET}")
        } else {
            format!("{}{padded}{RESET}", color_for_severity(severity_of_label(label)))
        };
        println!("   {shown} {:>4} {}", count, bar(*count, max, BAR_WIDTH));
    }
    Ok(())
}
