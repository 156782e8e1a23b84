use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::ScatterPoint;
use crate::utils::health_calculations::mean_arterial_pressure;

/// One day's health readings. Weight is stored in kilograms.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HealthMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub calories_intake: Option<i32>,
    pub physical_activity_minutes: Option<i32>,
}

impl HealthMetric {
    pub fn mean_arterial_pressure(&self) -> Option<f64> {
        mean_arterial_pressure(self.blood_pressure_systolic, self.blood_pressure_diastolic)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

/// Health entry as submitted by the client.
#[derive(Debug, Deserialize)]
pub struct HealthMetricForm {
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub blood_pressure_systolic: Option<i32>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<i32>,
    #[serde(default)]
    pub heart_rate: Option<i32>,
    #[serde(default)]
    pub calories_intake: Option<i32>,
    #[serde(default)]
    pub physical_activity_minutes: Option<i32>,
}

/// A validated health entry, weight already converted to kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthMetric {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub calories_intake: Option<i32>,
    pub physical_activity_minutes: Option<i32>,
}

/// Raw date filter; values are parsed leniently by the handler.
#[derive(Debug, Deserialize)]
pub struct HealthDashboardQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthDashboard {
    pub agg_dates: Vec<String>,
    pub agg_weight_lbs: Vec<Option<f64>>,
    pub agg_calories: Vec<Option<f64>>,
    pub agg_activity: Vec<Option<f64>>,
    pub agg_map: Vec<Option<f64>>,
    pub agg_hr: Vec<Option<f64>>,
    pub overall_weight: f64,
    pub overall_calories: f64,
    pub overall_activity: f64,
    pub overall_map: f64,
    pub overall_hr: f64,
    pub national_avg_hr: f64,
    pub national_avg_map: f64,
    pub feedback: Vec<crate::tracking::feedback::FieldFeedback>,
    pub detailed_feedback: String,
    pub entries: Vec<HealthMetric>,
    pub individual_weight: Vec<ScatterPoint>,
    pub individual_hr: Vec<ScatterPoint>,
    pub individual_map: Vec<ScatterPoint>,
    pub current_date: String,
}
