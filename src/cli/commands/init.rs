use crate::auth::Session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::schema::SCHEMA_VERSION;
use crate::store::{CsvStore, Table, journal};
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the register, with the canonical header, unless it already exists
///  - the photo directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    if let Some(dir) = &cli.photo_dir {
        cfg.photo_dir = dir.clone();
    }

    let store = CsvStore::new(cfg.store_path());
    let photo_dir = cfg.photo_path();

    println!("⚙️  Initializing sehatkan…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Register   : {}", store.path().display());
    println!("📷 Photos     : {}", photo_dir.display());

    fs::create_dir_all(&photo_dir)?;

    if store.exists() {
        let report = store.try_load()?;
        if !report.backfilled.is_empty() {
            // rewrite once so the file carries the current header
            store.save(&report.table)?;
            warning(format!(
                "Register upgraded from schema v{} to v{SCHEMA_VERSION}, added column(s): {}",
                report.schema_version,
                report.backfilled.join(", ")
            ));
        }
        success(format!(
            "Register already present ({} record(s))",
            report.table.len()
        ));
    } else {
        store.save(&Table::empty())?;
        success(format!("Register created at {}", store.path().display()));
    }

    // init needs no login, but a valid one is still recorded
    let operator = Session::from_args(
        &cfg.credentials,
        cli.user.as_deref(),
        cli.password.as_deref(),
    )
    .map(|s| s.operator().to_string())
    .unwrap_or_default();

    if let Err(e) = journal::write(
        store.path(),
        &operator,
        "init",
        &store.path().to_string_lossy(),
        "Register initialized",
    ) {
        warning(format!("Failed to write journal: {e}"));
    }

    println!("🎉 sehatkan initialization completed!");
    Ok(())
}
