use sqlx::PgPool;
use uuid::Uuid;

use crate::models::appointment::{Appointment, AppointmentForm};

const COLUMNS: &str =
    "id, user_id, title, description, appointment_date, appointment_time, location, status, created_at";

pub async fn appointments_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM appointments
        WHERE user_id = $1
        ORDER BY appointment_date, appointment_time
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_appointment(
    pool: &PgPool,
    user_id: Uuid,
    form: &AppointmentForm,
) -> Result<Appointment, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!(
        r#"
        INSERT INTO appointments (user_id, title, description, appointment_date, appointment_time, location, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(form.title.trim())
    .bind(&form.description)
    .bind(form.appointment_date)
    .bind(form.appointment_time)
    .bind(&form.location)
    .bind(form.status.as_str())
    .fetch_one(pool)
    .await
}

pub async fn find_appointment(
    pool: &PgPool,
    user_id: Uuid,
    appointment_id: Uuid,
) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE id = $1 AND user_id = $2"
    ))
    .bind(appointment_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_appointment(
    pool: &PgPool,
    user_id: Uuid,
    appointment_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1 AND user_id = $2")
        .bind(appointment_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
