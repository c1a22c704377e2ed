use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::CsvStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = CsvStore::new(cfg.store_path());
        ExportLogic::export(&store, session, *format, file, range, *force)?;
    }
    Ok(())
}
