use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::health_metric::{HealthMetric, NewHealthMetric};
use crate::tracking::windows::DateRange;

const COLUMNS: &str = "id, user_id, date, weight, blood_pressure_systolic, blood_pressure_diastolic, \
                       heart_rate, calories_intake, physical_activity_minutes";

pub async fn insert_health_metric(
    pool: &PgPool,
    user_id: Uuid,
    entry: &NewHealthMetric,
) -> Result<HealthMetric, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        INSERT INTO health_metrics (
            user_id, date, weight, blood_pressure_systolic, blood_pressure_diastolic,
            heart_rate, calories_intake, physical_activity_minutes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(entry.date)
    .bind(entry.weight_kg)
    .bind(entry.blood_pressure_systolic)
    .bind(entry.blood_pressure_diastolic)
    .bind(entry.heart_rate)
    .bind(entry.calories_intake)
    .bind(entry.physical_activity_minutes)
    .fetch_one(pool)
    .await
}

/// All entries of a user, oldest first.
pub async fn health_metrics_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        "SELECT {COLUMNS} FROM health_metrics WHERE user_id = $1 ORDER BY date, created_at"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn health_metrics_in_range(
    pool: &PgPool,
    user_id: Uuid,
    range: DateRange,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM health_metrics
        WHERE user_id = $1 AND date BETWEEN $2 AND $3
        ORDER BY date, created_at
        "#
    ))
    .bind(user_id)
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
}

/// The most recently created entry of a user for `date`.
pub async fn health_metric_on(
    pool: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> Result<Option<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM health_metrics
        WHERE user_id = $1 AND date = $2
        ORDER BY created_at DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_optional(pool)
    .await
}

pub async fn update_health_metric(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    entry: &NewHealthMetric,
) -> Result<Option<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        UPDATE health_metrics
        SET date = $3, weight = $4, blood_pressure_systolic = $5, blood_pressure_diastolic = $6,
            heart_rate = $7, calories_intake = $8, physical_activity_minutes = $9
        WHERE id = $1 AND user_id = $2
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(user_id)
    .bind(entry.date)
    .bind(entry.weight_kg)
    .bind(entry.blood_pressure_systolic)
    .bind(entry.blood_pressure_diastolic)
    .bind(entry.heart_rate)
    .bind(entry.calories_intake)
    .bind(entry.physical_activity_minutes)
    .fetch_optional(pool)
    .await
}
