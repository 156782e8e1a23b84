use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::string_enum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Attended,
    Missed,
}

string_enum!(AppointmentStatus, "appointment status", {
    Pending => "pending",
    Attended => "attended",
    Missed => "missed",
});

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub location: String,
    #[sqlx(try_from = "String")]
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }
}

#[derive(Debug, Deserialize)]
pub struct AppointmentForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: AppointmentStatus,
}

/// Entry for the calendar widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub start: String,
}

#[derive(Debug, Serialize)]
pub struct AppointmentDashboard {
    pub appointments: Vec<Appointment>,
    pub events: Vec<CalendarEvent>,
    pub old_appointments: Vec<Appointment>,
    pub upcoming_appointments: Vec<Appointment>,
}
