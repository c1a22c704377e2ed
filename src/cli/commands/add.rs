use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, Submission};
use crate::errors::{AppError, AppResult};
use crate::models::{Department, Identity, Measurement, WorkUnit};
use crate::store::CsvStore;
use crate::ui::messages::{field, header, info, success};
use crate::utils::colors::colorize_status;
use crate::utils::date;
use std::path::PathBuf;

/// Record one examination.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        name,
        national_id,
        birthplace,
        birth_date,
        department,
        work_unit,
        phone,
        examiner,
        weight,
        height,
        temperature,
        blood_pressure,
        oxygen,
        alcohol,
        photo,
    } = cmd
    {
        //
        // 1. Closed lists
        //
        let department = Department::from_code(department).ok_or_else(|| {
            AppError::InvalidValue(format!(
                "unknown department '{department}'. Use one of: {}",
                Department::ALL.map(|d| d.as_str()).join(", ")
            ))
        })?;

        let work_unit = WorkUnit::from_code(work_unit).ok_or_else(|| {
            AppError::InvalidValue(format!(
                "unknown work unit '{work_unit}'. Use one of: {}",
                WorkUnit::ALL.map(|u| u.as_str()).join(", ")
            ))
        })?;

        //
        // 2. Birth date (optional)
        //
        let birth_date = match birth_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?),
        };

        //
        // 3. Build the submission; required fields are checked by the logic
        //
        let submission = Submission {
            identity: Identity {
                name: name.clone().unwrap_or_default().trim().to_string(),
                birthplace: birthplace.trim().to_string(),
                birth_date,
                national_id: national_id.clone().unwrap_or_default().trim().to_string(),
                department,
                work_unit,
                phone: phone.trim().to_string(),
                examiner_name: examiner.trim().to_string(),
            },
            measurement: Measurement {
                weight_kg: *weight,
                height_cm: *height,
                temperature_c: *temperature,
                blood_pressure: blood_pressure.trim().to_string(),
                oxygen_saturation_pct: *oxygen,
                blood_alcohol_pct: *alcohol,
            },
            photo: photo.as_ref().map(PathBuf::from),
        };

        //
        // 4. Execute logic
        //
        let store = CsvStore::new(cfg.store_path());
        let done = AddLogic::apply(&store, cfg, session, submission, date::now())?;

        let r = &done.record;
        let i = &r.interpretation;

        success(format!(
            "Examination of {} saved at {}",
            r.identity.name,
            r.entry_timestamp()
        ));

        header("Result");
        field("BMI", format!("{} ({})", i.bmi, colorize_status(Some(i.bmi_status.label()))));
        if let Some(t) = i.temperature_status {
            field(
                "Temperature",
                format!("{} °C ({})", r.measurement.temperature_c, colorize_status(Some(t.label()))),
            );
        }
        field(
            "Blood pressure",
            format!(
                "{} ({})",
                r.measurement.blood_pressure,
                colorize_status(Some(i.blood_pressure_status.label()))
            ),
        );
        field(
            "Oxygen",
            format!(
                "{}% ({})",
                r.measurement.oxygen_saturation_pct,
                colorize_status(Some(i.oxygen_status.label()))
            ),
        );
        field(
            "Alcohol",
            format!(
                "{}% ({})",
                r.measurement.blood_alcohol_pct,
                colorize_status(Some(i.alcohol_status.label()))
            ),
        );
        field("Photo", done.photo_path.display());

        match &done.link {
            Some(link) => {
                header("Send result");
                println!("{link}");
            }
            None => info("No phone number given, no message link generated."),
        }
    }

    Ok(())
}
