use crate::auth::Session;
use crate::config::Config;
use crate::engine;
use crate::errors::{AppError, AppResult};
use crate::messaging;
use crate::models::{HealthRecord, Identity, Measurement};
use crate::photo;
use crate::store::{CsvStore, journal};
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;

/// Everything the checkpoint form collects for one examinee.
#[derive(Debug, Clone)]
pub struct Submission {
    pub identity: Identity,
    pub measurement: Measurement,
    /// Captured image to attach; required.
    pub photo: Option<PathBuf>,
}

/// Outcome of a stored submission.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub record: HealthRecord,
    pub photo_path: PathBuf,
    /// `None` when the examinee left no phone number.
    pub link: Option<String>,
}

impl Submission {
    /// Name, national ID and photo must be present. All missing fields are
    /// reported at once.
    pub fn validate(&self) -> AppResult<()> {
        let mut missing = Vec::new();
        if self.identity.name.trim().is_empty() {
            missing.push("name");
        }
        if self.identity.national_id.trim().is_empty() {
            missing.push("national_id");
        }
        if self.photo.is_none() {
            missing.push("photo");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingField(missing.join(", ")))
        }
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate, interpret, store the photo, append exactly one row and
    /// journal it. A rejected or unsaved submission leaves neither a row nor
    /// a photo behind.
    pub fn apply(
        store: &CsvStore,
        cfg: &Config,
        session: &Session,
        submission: Submission,
        at: NaiveDateTime,
    ) -> AppResult<Submitted> {
        submission.validate()?;

        let Submission {
            identity,
            measurement,
            photo,
        } = submission;

        let source = photo.ok_or_else(|| AppError::MissingField("photo".into()))?;

        let interpretation = engine::interpret(&measurement, &cfg.thresholds);

        let photo_filename = photo::photo_filename(&identity.national_id, at);
        let photo_path = photo::save_photo(&source, &cfg.photo_path(), &photo_filename)?;

        let record = HealthRecord {
            entry_at: at,
            identity,
            measurement,
            interpretation,
            photo_filename,
        };

        // no row means no photo either
        if let Err(e) = store.submit(&record) {
            if let Err(rm) = fs::remove_file(&photo_path) {
                warning(format!(
                    "Failed to remove photo {}: {rm}",
                    photo_path.display()
                ));
            }
            return Err(e);
        }

        if let Err(e) = journal::write(
            store.path(),
            session.operator(),
            "add",
            &record.identity.national_id,
            &format!(
                "Examination recorded for {} ({})",
                record.identity.name,
                record.interpretation.blood_pressure_status
            ),
        ) {
            warning(format!("Failed to write journal: {e}"));
        }

        let link = match messaging::build_link(&record, &cfg.messaging) {
            Ok(link) => Some(link),
            Err(AppError::MissingField(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Submitted {
            record,
            photo_path,
            link,
        })
    }
}
