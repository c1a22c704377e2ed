use crate::auth::Session;
use crate::errors::AppResult;
use crate::store::{CsvStore, journal};
use crate::ui::messages::warning;

pub struct ResetLogic;

impl ResetLogic {
    /// Delete the whole register. No backup is taken here; callers confirm
    /// first. Returns `false` when there was no register to delete.
    pub fn apply(store: &CsvStore, session: &Session) -> AppResult<bool> {
        let rows = store.load().len();
        let removed = store.reset()?;

        if removed
            && let Err(e) = journal::write(
                store.path(),
                session.operator(),
                "reset",
                &store.path().to_string_lossy(),
                &format!("Register deleted ({rows} record(s))"),
            )
        {
            warning(format!("Failed to write journal: {e}"));
        }

        Ok(removed)
    }
}
