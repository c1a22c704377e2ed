use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::messaging;
use crate::store::CsvStore;
use crate::ui::messages::{header, warning};

/// Re-issue the result message of a stored record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Message { row } = cmd {
        let store = CsvStore::new(cfg.store_path());
        let table = store.load();

        let index = row.checked_sub(1).ok_or(AppError::RowOutOfRange(0))?;
        let view = table.row_view(index)?;

        header("Message");
        println!("{}", messaging::build_message(&view, &cfg.messaging));

        match messaging::build_link(&view, &cfg.messaging) {
            Ok(link) => {
                header("Link");
                println!("{link}");
            }
            Err(AppError::MissingField(_)) => {
                warning("This record has no usable phone number, no link generated.")
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
