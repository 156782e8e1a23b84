use std::ops::RangeInclusive;

use crate::models::appointment::AppointmentForm;
use crate::models::goal::GoalForm;
use crate::models::health_metric::{HealthMetricForm, NewHealthMetric, WeightUnit};
use crate::models::medication::{LogStatus, MedicationForm};
use crate::models::sleep::SleepRecordForm;
use crate::tracking::adherence::RecurringDays;
use crate::utils::health_calculations::lbs_to_kg;

pub const SYSTOLIC_RANGE: RangeInclusive<i32> = 40..=300;
pub const DIASTOLIC_RANGE: RangeInclusive<i32> = 20..=200;
pub const HEART_RATE_RANGE: RangeInclusive<i32> = 20..=250;
pub const CALORIES_RANGE: RangeInclusive<i32> = 0..=20_000;
pub const ACTIVITY_MINUTES_RANGE: RangeInclusive<i32> = 0..=1440;
pub const SLEEP_QUALITY_RANGE: RangeInclusive<i32> = 1..=5;
pub const MAX_SLEEP_HOURS: f64 = 24.0;

const MAX_GOAL_DESCRIPTION: usize = 2000;
const MAX_MEDICATION_NAME: usize = 100;
const MAX_DOSING_SCHEDULE: usize = 100;
const MAX_APPOINTMENT_TITLE: usize = 200;
const MAX_LOCATION: usize = 255;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} is too long (maximum {max} characters)")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Form checks applied before anything is stored.
pub struct TrackingValidator;

impl Default for TrackingValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a health entry and converts its weight to kilograms.
    pub fn validate_health_metric(&self, form: &HealthMetricForm) -> Result<NewHealthMetric, ValidationError> {
        if !form.weight.is_finite() || form.weight <= 0.0 {
            return Err(ValidationError::NotPositive { field: "weight" });
        }

        self.validate_optional_range("blood_pressure_systolic", form.blood_pressure_systolic, SYSTOLIC_RANGE)?;
        self.validate_optional_range("blood_pressure_diastolic", form.blood_pressure_diastolic, DIASTOLIC_RANGE)?;
        self.validate_optional_range("heart_rate", form.heart_rate, HEART_RATE_RANGE)?;
        self.validate_optional_range("calories_intake", form.calories_intake, CALORIES_RANGE)?;
        self.validate_optional_range(
            "physical_activity_minutes",
            form.physical_activity_minutes,
            ACTIVITY_MINUTES_RANGE,
        )?;

        let weight_kg = match form.weight_unit {
            WeightUnit::Kg => form.weight,
            WeightUnit::Lbs => lbs_to_kg(form.weight),
        };

        Ok(NewHealthMetric {
            date: form.date,
            weight_kg,
            blood_pressure_systolic: form.blood_pressure_systolic,
            blood_pressure_diastolic: form.blood_pressure_diastolic,
            heart_rate: form.heart_rate,
            calories_intake: form.calories_intake,
            physical_activity_minutes: form.physical_activity_minutes,
        })
    }

    pub fn validate_sleep_record(&self, form: &SleepRecordForm) -> Result<(), ValidationError> {
        if !form.duration.is_finite() || form.duration <= 0.0 || form.duration > MAX_SLEEP_HOURS {
            return Err(ValidationError::OutOfRange {
                field: "duration",
                min: 0.0,
                max: MAX_SLEEP_HOURS,
                value: form.duration,
            });
        }
        self.validate_range("quality", form.quality, SLEEP_QUALITY_RANGE)
    }

    pub fn validate_goal(&self, form: &GoalForm) -> Result<(), ValidationError> {
        if !form.target_value.is_finite() || form.target_value < 0.0 {
            return Err(ValidationError::Invalid {
                field: "target_value",
                reason: "must be a non-negative number".to_string(),
            });
        }
        self.validate_length("description", &form.description, MAX_GOAL_DESCRIPTION)
    }

    pub fn validate_medication(&self, form: &MedicationForm) -> Result<(), ValidationError> {
        self.validate_required_text("name", &form.name, MAX_MEDICATION_NAME)?;
        self.validate_length("dosing_schedule", &form.dosing_schedule, MAX_DOSING_SCHEDULE)?;
        for dose in &form.dose_times {
            self.validate_recurring_days(&dose.recurring_days)?;
        }
        Ok(())
    }

    pub fn validate_recurring_days(&self, raw: &str) -> Result<(), ValidationError> {
        RecurringDays::parse(raw)
            .map(|_| ())
            .map_err(|e| ValidationError::Invalid {
                field: "recurring_days",
                reason: e.to_string(),
            })
    }

    pub fn validate_appointment(&self, form: &AppointmentForm) -> Result<(), ValidationError> {
        self.validate_required_text("title", &form.title, MAX_APPOINTMENT_TITLE)?;
        self.validate_length("location", &form.location, MAX_LOCATION)
    }

    pub fn parse_log_status(&self, raw: &str) -> Result<LogStatus, ValidationError> {
        raw.trim().parse::<LogStatus>().map_err(|e| ValidationError::Invalid {
            field: "status",
            reason: e.to_string(),
        })
    }

    fn validate_required_text(&self, field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Required { field });
        }
        self.validate_length(field, value.trim(), max)
    }

    fn validate_length(&self, field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }
        Ok(())
    }

    fn validate_range(&self, field: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<(), ValidationError> {
        if !range.contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                min: f64::from(*range.start()),
                max: f64::from(*range.end()),
                value: f64::from(value),
            });
        }
        Ok(())
    }

    fn validate_optional_range(
        &self,
        field: &'static str,
        value: Option<i32>,
        range: RangeInclusive<i32>,
    ) -> Result<(), ValidationError> {
        match value {
            Some(value) => self.validate_range(field, value, range),
            None => Ok(()),
        }
    }
}
