use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{CellEdit, EditLogic};
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit { set, delete } = cmd {
        if set.is_empty() && delete.is_empty() {
            info("Nothing to change: use --set ROW:COLUMN=VALUE and/or --delete ROW.");
            return Ok(());
        }

        let edits = set
            .iter()
            .map(|s| CellEdit::parse(s))
            .collect::<AppResult<Vec<_>>>()?;

        let store = CsvStore::new(cfg.store_path());
        let summary = EditLogic::apply(&store, session, &edits, delete)?;

        success(format!(
            "Register saved: {} cell(s) changed, {} row(s) deleted, {} record(s) left",
            summary.cells_changed, summary.rows_deleted, summary.rows_left
        ));
    }
    Ok(())
}
