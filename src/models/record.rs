use super::measurement::Measurement;
use super::organization::{Department, WorkUnit};
use crate::engine::Interpretation;
use crate::store::schema::{self, CANONICAL_COLUMNS};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Display format of `entry_timestamp` in the store.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
/// Display format of `birth_date` in the store.
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub name: String,
    pub birthplace: String,
    pub birth_date: Option<NaiveDate>,
    pub national_id: String,
    pub department: Department,
    pub work_unit: WorkUnit,
    pub phone: String,
    pub examiner_name: String,
}

/// One examination event, as it is appended to the store.
///
/// Statuses are the snapshot taken at submission time and are written next
/// to the raw values; nothing is recomputed when the row is read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    pub entry_at: NaiveDateTime,
    pub identity: Identity,
    pub measurement: Measurement,
    pub interpretation: Interpretation,
    pub photo_filename: String,
}

impl HealthRecord {
    pub fn entry_timestamp(&self) -> String {
        self.entry_at.format(ENTRY_TIMESTAMP_FORMAT).to_string()
    }

    /// Value of a canonical column, `None` for a null cell.
    pub fn cell(&self, column: &str) -> Option<String> {
        let id = &self.identity;
        let m = &self.measurement;
        let i = &self.interpretation;

        let v = match column {
            schema::ENTRY_TIMESTAMP => self.entry_timestamp(),
            schema::NAME => id.name.clone(),
            schema::BIRTHPLACE => id.birthplace.clone(),
            schema::BIRTH_DATE => id.birth_date?.format(BIRTH_DATE_FORMAT).to_string(),
            schema::NATIONAL_ID => id.national_id.clone(),
            schema::DEPARTMENT => id.department.as_str().to_string(),
            schema::WORK_UNIT => id.work_unit.as_str().to_string(),
            schema::PHONE => id.phone.clone(),
            schema::WEIGHT_KG => m.weight_kg.to_string(),
            schema::HEIGHT_CM => m.height_cm.to_string(),
            schema::TEMPERATURE_C => m.temperature_c.to_string(),
            schema::BLOOD_PRESSURE => m.blood_pressure.clone(),
            schema::OXYGEN_SATURATION_PCT => m.oxygen_saturation_pct.to_string(),
            schema::OXYGEN_STATUS => i.oxygen_status.label().to_string(),
            schema::BLOOD_ALCOHOL_PCT => m.blood_alcohol_pct.to_string(),
            schema::ALCOHOL_STATUS => i.alcohol_status.label().to_string(),
            schema::BMI => i.bmi.to_string(),
            schema::BMI_STATUS => i.bmi_status.label().to_string(),
            schema::BLOOD_PRESSURE_STATUS => i.blood_pressure_status.label().to_string(),
            schema::EXAMINER_NAME => id.examiner_name.clone(),
            schema::PHOTO_FILENAME => self.photo_filename.clone(),
            schema::TEMPERATURE_STATUS => i.temperature_status?.label().to_string(),
            _ => return None,
        };

        if v.is_empty() { None } else { Some(v) }
    }

    /// One optional cell per canonical column, in canonical order.
    pub fn to_cells(&self) -> Vec<Option<String>> {
        CANONICAL_COLUMNS
            .iter()
            .map(|c| self.cell(c.name))
            .collect()
    }
}
