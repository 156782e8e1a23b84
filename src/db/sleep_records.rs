use sqlx::PgPool;
use uuid::Uuid;

use crate::models::sleep::{SleepRecord, SleepRecordForm};
use crate::tracking::windows::DateRange;

pub async fn insert_sleep_record(
    pool: &PgPool,
    user_id: Uuid,
    form: &SleepRecordForm,
) -> Result<SleepRecord, sqlx::Error> {
    sqlx::query_as::<_, SleepRecord>(
        r#"
        INSERT INTO sleep_records (user_id, date, duration, quality)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, date, duration, quality
        "#,
    )
    .bind(user_id)
    .bind(form.date)
    .bind(form.duration)
    .bind(form.quality)
    .fetch_one(pool)
    .await
}

pub async fn sleep_records_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<SleepRecord>, sqlx::Error> {
    sqlx::query_as::<_, SleepRecord>(
        r#"
        SELECT id, user_id, date, duration, quality
        FROM sleep_records
        WHERE user_id = $1
        ORDER BY date, created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn sleep_records_in_range(
    pool: &PgPool,
    user_id: Uuid,
    range: DateRange,
) -> Result<Vec<SleepRecord>, sqlx::Error> {
    sqlx::query_as::<_, SleepRecord>(
        r#"
        SELECT id, user_id, date, duration, quality
        FROM sleep_records
        WHERE user_id = $1 AND date BETWEEN $2 AND $3
        ORDER BY date, created_at
        "#,
    )
    .bind(user_id)
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
}
