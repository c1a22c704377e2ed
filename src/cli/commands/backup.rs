use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::CsvStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = CsvStore::new(cfg.store_path());
        BackupLogic::backup(&store, session, file, *compress, *force)?;
    }

    Ok(())
}
