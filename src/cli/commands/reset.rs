use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        let store = CsvStore::new(cfg.store_path());

        if !store.exists() {
            info("There is no register to delete.");
            return Ok(());
        }

        if !*force
            && !ask_confirmation(&format!(
                "This deletes every record in {}. Make a backup first if unsure.",
                store.path().display()
            ))
        {
            info("Reset cancelled.");
            return Ok(());
        }

        if ResetLogic::apply(&store, session)? {
            success("Register deleted.");
        }
    }
    Ok(())
}
