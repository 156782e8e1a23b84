use chrono::{NaiveDate, NaiveTime};

use healthy_you_backend::models::appointment::{AppointmentForm, AppointmentStatus};
use healthy_you_backend::models::goal::{Comparison, GoalForm, GoalKind};
use healthy_you_backend::models::health_metric::{HealthMetricForm, WeightUnit};
use healthy_you_backend::models::medication::{DoseTimeForm, Frequency, LogStatus, MedicationForm};
use healthy_you_backend::models::sleep::{SleepRecordForm, DEFAULT_SLEEP_QUALITY};
use healthy_you_backend::tracking::validation::{TrackingValidator, ValidationError};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 12).unwrap()
}

fn health_form(weight: f64, unit: WeightUnit) -> HealthMetricForm {
    HealthMetricForm {
        date: date(),
        weight,
        weight_unit: unit,
        blood_pressure_systolic: Some(120),
        blood_pressure_diastolic: Some(80),
        heart_rate: Some(64),
        calories_intake: None,
        physical_activity_minutes: Some(45),
    }
}

#[test]
fn pounds_are_stored_as_kilograms() {
    let validator = TrackingValidator::new();

    let entry = validator.validate_health_metric(&health_form(154.324, WeightUnit::Lbs)).unwrap();
    assert!((entry.weight_kg - 70.0).abs() < 0.001);

    let entry = validator.validate_health_metric(&health_form(70.0, WeightUnit::Kg)).unwrap();
    assert_eq!(entry.weight_kg, 70.0);
    assert_eq!(entry.physical_activity_minutes, Some(45));
}

#[test]
fn implausible_health_readings_are_rejected() {
    let validator = TrackingValidator::new();

    assert_eq!(
        validator.validate_health_metric(&health_form(0.0, WeightUnit::Kg)),
        Err(ValidationError::NotPositive { field: "weight" })
    );
    assert!(validator.validate_health_metric(&health_form(f64::NAN, WeightUnit::Kg)).is_err());

    let mut form = health_form(70.0, WeightUnit::Kg);
    form.blood_pressure_systolic = Some(20);
    assert!(matches!(
        validator.validate_health_metric(&form),
        Err(ValidationError::OutOfRange { field: "blood_pressure_systolic", .. })
    ));

    let mut form = health_form(70.0, WeightUnit::Kg);
    form.physical_activity_minutes = Some(2000);
    assert!(validator.validate_health_metric(&form).is_err());
}

#[test]
fn health_form_defaults_to_kilograms() {
    let form: HealthMetricForm = serde_json::from_value(serde_json::json!({
        "date": "2026-04-12",
        "weight": 72.5
    }))
    .unwrap();

    assert_eq!(form.weight_unit, WeightUnit::Kg);
    assert_eq!(form.heart_rate, None);
}

#[test]
fn sleep_quality_and_duration_are_bounded() {
    let validator = TrackingValidator::new();
    let form = |duration, quality| SleepRecordForm { date: date(), duration, quality };

    assert!(validator.validate_sleep_record(&form(7.5, DEFAULT_SLEEP_QUALITY)).is_ok());
    assert!(validator.validate_sleep_record(&form(24.0, 5)).is_ok());
    assert!(validator.validate_sleep_record(&form(0.0, 3)).is_err());
    assert!(validator.validate_sleep_record(&form(24.5, 3)).is_err());
    assert!(validator.validate_sleep_record(&form(7.0, 0)).is_err());
    assert!(validator.validate_sleep_record(&form(7.0, 6)).is_err());
}

#[test]
fn goal_target_must_be_a_non_negative_number() {
    let validator = TrackingValidator::new();
    let form = |target_value| GoalForm {
        goal_type: GoalKind::Activity,
        target_value,
        comparison: Comparison::Max,
        description: String::new(),
        due_date: None,
    };

    assert!(validator.validate_goal(&form(0.0)).is_ok());
    assert!(validator.validate_goal(&form(30.0)).is_ok());
    assert!(validator.validate_goal(&form(-1.0)).is_err());
    assert!(validator.validate_goal(&form(f64::INFINITY)).is_err());
}

#[test]
fn medication_needs_a_name_and_readable_weekdays() {
    let validator = TrackingValidator::new();
    let form = |name: &str, days: &str| MedicationForm {
        name: name.to_string(),
        description: None,
        frequency: Frequency::Weekly,
        start_date: date(),
        dosing_schedule: "with food".to_string(),
        dose_times: vec![DoseTimeForm {
            scheduled_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            recurring_days: days.to_string(),
        }],
    };

    assert!(validator.validate_medication(&form("Metformin", "Mon, Thu")).is_ok());
    assert!(validator.validate_medication(&form("Metformin", "")).is_ok());
    assert_eq!(
        validator.validate_medication(&form("   ", "")),
        Err(ValidationError::Required { field: "name" })
    );
    assert!(validator.validate_medication(&form(&"x".repeat(101), "")).is_err());
    assert!(matches!(
        validator.validate_medication(&form("Metformin", "Mon,Blursday")),
        Err(ValidationError::Invalid { field: "recurring_days", .. })
    ));
}

#[test]
fn appointment_title_is_required() {
    let validator = TrackingValidator::new();
    let form = |title: &str| AppointmentForm {
        title: title.to_string(),
        description: String::new(),
        appointment_date: date(),
        appointment_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        location: "Clinic".to_string(),
        status: AppointmentStatus::Pending,
    };

    assert!(validator.validate_appointment(&form("Dentist")).is_ok());
    assert!(validator.validate_appointment(&form(" ")).is_err());
    assert!(validator.validate_appointment(&form(&"t".repeat(201))).is_err());
}

#[test]
fn log_status_accepts_only_known_values() {
    let validator = TrackingValidator::new();

    assert_eq!(validator.parse_log_status("taken"), Ok(LogStatus::Taken));
    assert_eq!(validator.parse_log_status("not_taken"), Ok(LogStatus::NotTaken));
    assert_eq!(validator.parse_log_status("not_recorded"), Ok(LogStatus::NotRecorded));
    assert!(validator.parse_log_status("skipped").is_err());
}
