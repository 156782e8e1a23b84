use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::string_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

string_enum!(Frequency, "frequency", {
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Medication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub dosing_schedule: String,
}

/// A time of day a dose is due. `recurring_days` is a comma-separated
/// weekday list ("Mon,Wed,Fri"); blank means every day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicationDoseTime {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub scheduled_time: NaiveTime,
    pub recurring_days: String,
}

/// A medication with all of its dose times loaded.
#[derive(Debug, Clone, Serialize)]
pub struct MedicationSchedule {
    pub medication: Medication,
    pub dose_times: Vec<MedicationDoseTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Taken,
    NotTaken,
    #[default]
    NotRecorded,
}

string_enum!(LogStatus, "log status", {
    Taken => "taken",
    NotTaken => "not_taken",
    NotRecorded => "not_recorded",
});

/// Whether one scheduled dose was taken on a given date. At most one row
/// exists per (medication, date, dose time).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicationLog {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub date: NaiveDate,
    pub dose_time_id: Uuid,
    #[sqlx(try_from = "String")]
    pub status: LogStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoseTimeForm {
    pub scheduled_time: NaiveTime,
    #[serde(default)]
    pub recurring_days: String,
}

#[derive(Debug, Deserialize)]
pub struct MedicationForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub dosing_schedule: String,
    #[serde(default)]
    pub dose_times: Vec<DoseTimeForm>,
}

/// Status posted for a log. Kept as text so unknown values can be answered
/// with a 400 instead of a body-parse error.
#[derive(Debug, Deserialize)]
pub struct LogStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdherenceCounts {
    pub taken: usize,
    pub not_taken: usize,
    pub not_recorded: usize,
}

#[derive(Debug, Serialize)]
pub struct MedicationDashboard {
    pub medications: Vec<MedicationSchedule>,
    pub today: NaiveDate,
    pub today_logs: Vec<MedicationLog>,
    pub today_counts: AdherenceCounts,
    pub overall_counts: AdherenceCounts,
}
