use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::string_enum;

/// What a goal tracks. Each kind reads its current value from a different
/// source and carries its own feedback text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    #[default]
    Weight,
    Calories,
    Activity,
    Sleep,
}

string_enum!(GoalKind, "goal type", {
    Weight => "weight",
    Calories => "calories",
    Activity => "activity",
    Sleep => "sleep",
});

impl GoalKind {
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Weight => "Weight",
            GoalKind::Calories => "Caloric Intake",
            GoalKind::Activity => "Physical Activity",
            GoalKind::Sleep => "Sleep",
        }
    }
}

/// Whether the user wants to stay at or below the target (`Min`) or reach
/// at least the target (`Max`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    #[default]
    Min,
    Max,
}

string_enum!(Comparison, "comparison", {
    Min => "min",
    Max => "max",
});

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(try_from = "String")]
    pub goal_type: GoalKind,
    pub target_value: f64,
    #[sqlx(try_from = "String")]
    pub comparison: Comparison,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct GoalForm {
    #[serde(default)]
    pub goal_type: GoalKind,
    pub target_value: f64,
    #[serde(default)]
    pub comparison: Comparison,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// A goal together with how far the user has come.
#[derive(Debug, Serialize)]
pub struct GoalStatus {
    pub goal: Goal,
    pub current_value: Option<f64>,
    pub progress: Option<f64>,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct GoalDashboard {
    pub goal_data: Vec<GoalStatus>,
}
