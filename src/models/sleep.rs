use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::ScatterPoint;

/// Sleep logged for one night; quality is rated 1 (poor) to 5 (excellent).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SleepRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub duration: f64,
    pub quality: i32,
}

pub const DEFAULT_SLEEP_QUALITY: i32 = 3;

fn default_quality() -> i32 {
    DEFAULT_SLEEP_QUALITY
}

#[derive(Debug, Deserialize)]
pub struct SleepRecordForm {
    pub date: NaiveDate,
    pub duration: f64,
    #[serde(default = "default_quality")]
    pub quality: i32,
}

#[derive(Debug, Serialize)]
pub struct SleepDashboard {
    pub agg_dates: Vec<String>,
    pub agg_duration: Vec<Option<f64>>,
    pub agg_quality: Vec<Option<f64>>,
    pub overall_duration: f64,
    pub overall_quality: f64,
    pub individual_duration: Vec<ScatterPoint>,
    pub individual_quality: Vec<ScatterPoint>,
    pub feedback: String,
    pub records: Vec<SleepRecord>,
}
