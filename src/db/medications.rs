use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::medication::{
    DoseTimeForm, LogStatus, Medication, MedicationDoseTime, MedicationForm, MedicationLog,
    MedicationSchedule,
};
use crate::tracking::adherence::MedicationLogStore;

/// Medications of a user with their dose times, ordered by name.
pub async fn schedules_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<MedicationSchedule>, sqlx::Error> {
    let medications = sqlx::query_as::<_, Medication>(
        r#"
        SELECT id, user_id, name, description, frequency, start_date, dosing_schedule
        FROM medications
        WHERE user_id = $1
        ORDER BY name, id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let dose_times = sqlx::query_as::<_, MedicationDoseTime>(
        r#"
        SELECT d.id, d.medication_id, d.scheduled_time, d.recurring_days
        FROM medication_dose_times d
        JOIN medications m ON m.id = d.medication_id
        WHERE m.user_id = $1
        ORDER BY d.scheduled_time
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut by_medication: HashMap<Uuid, Vec<MedicationDoseTime>> = HashMap::new();
    for dose in dose_times {
        by_medication.entry(dose.medication_id).or_default().push(dose);
    }

    Ok(medications
        .into_iter()
        .map(|medication| MedicationSchedule {
            dose_times: by_medication.remove(&medication.id).unwrap_or_default(),
            medication,
        })
        .collect())
}

async fn insert_dose_times(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    medication_id: Uuid,
    dose_times: &[DoseTimeForm],
) -> Result<Vec<MedicationDoseTime>, sqlx::Error> {
    let mut inserted = Vec::with_capacity(dose_times.len());
    for dose in dose_times {
        let row = sqlx::query_as::<_, MedicationDoseTime>(
            r#"
            INSERT INTO medication_dose_times (medication_id, scheduled_time, recurring_days)
            VALUES ($1, $2, $3)
            RETURNING id, medication_id, scheduled_time, recurring_days
            "#,
        )
        .bind(medication_id)
        .bind(dose.scheduled_time)
        .bind(dose.recurring_days.trim())
        .fetch_one(&mut **tx)
        .await?;
        inserted.push(row);
    }
    Ok(inserted)
}

pub async fn insert_medication(
    pool: &PgPool,
    user_id: Uuid,
    form: &MedicationForm,
) -> Result<MedicationSchedule, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let medication = sqlx::query_as::<_, Medication>(
        r#"
        INSERT INTO medications (user_id, name, description, frequency, start_date, dosing_schedule)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, name, description, frequency, start_date, dosing_schedule
        "#,
    )
    .bind(user_id)
    .bind(form.name.trim())
    .bind(&form.description)
    .bind(form.frequency.as_str())
    .bind(form.start_date)
    .bind(&form.dosing_schedule)
    .fetch_one(&mut *tx)
    .await?;

    let dose_times = insert_dose_times(&mut tx, medication.id, &form.dose_times).await?;
    tx.commit().await?;

    Ok(MedicationSchedule {
        medication,
        dose_times,
    })
}

/// Updates a medication and replaces all of its dose times. Logs of removed
/// dose times go with them.
pub async fn update_medication(
    pool: &PgPool,
    user_id: Uuid,
    medication_id: Uuid,
    form: &MedicationForm,
) -> Result<Option<MedicationSchedule>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let medication = sqlx::query_as::<_, Medication>(
        r#"
        UPDATE medications
        SET name = $3, description = $4, frequency = $5, start_date = $6, dosing_schedule = $7
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, name, description, frequency, start_date, dosing_schedule
        "#,
    )
    .bind(medication_id)
    .bind(user_id)
    .bind(form.name.trim())
    .bind(&form.description)
    .bind(form.frequency.as_str())
    .bind(form.start_date)
    .bind(&form.dosing_schedule)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(medication) = medication else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM medication_dose_times WHERE medication_id = $1")
        .bind(medication_id)
        .execute(&mut *tx)
        .await?;

    let dose_times = insert_dose_times(&mut tx, medication_id, &form.dose_times).await?;
    tx.commit().await?;

    Ok(Some(MedicationSchedule {
        medication,
        dose_times,
    }))
}

/// Adds a dose time to a medication owned by `user_id`. `None` when the
/// medication is unknown to that user.
pub async fn add_dose_time(
    pool: &PgPool,
    user_id: Uuid,
    medication_id: Uuid,
    form: &DoseTimeForm,
) -> Result<Option<MedicationDoseTime>, sqlx::Error> {
    sqlx::query_as::<_, MedicationDoseTime>(
        r#"
        INSERT INTO medication_dose_times (medication_id, scheduled_time, recurring_days)
        SELECT m.id, $3, $4
        FROM medications m
        WHERE m.id = $1 AND m.user_id = $2
        RETURNING id, medication_id, scheduled_time, recurring_days
        "#,
    )
    .bind(medication_id)
    .bind(user_id)
    .bind(form.scheduled_time)
    .bind(form.recurring_days.trim())
    .fetch_optional(pool)
    .await
}

/// Sets the status of a log whose medication belongs to `user_id`.
pub async fn update_log_status(
    pool: &PgPool,
    user_id: Uuid,
    log_id: Uuid,
    status: LogStatus,
) -> Result<Option<MedicationLog>, sqlx::Error> {
    sqlx::query_as::<_, MedicationLog>(
        r#"
        UPDATE medication_logs l
        SET status = $3
        FROM medications m
        WHERE l.id = $1 AND l.medication_id = m.id AND m.user_id = $2
        RETURNING l.id, l.medication_id, l.date, l.dose_time_id, l.status
        "#,
    )
    .bind(log_id)
    .bind(user_id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
}

/// Medication log storage backed by Postgres.
pub struct PgMedicationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgMedicationStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicationLogStore for PgMedicationStore<'_> {
    async fn get_or_create_log(
        &self,
        medication_id: Uuid,
        dose_time_id: Uuid,
        date: NaiveDate,
    ) -> Result<MedicationLog, StoreError> {
        // The unique constraint makes concurrent inserts for the same dose collapse.
        sqlx::query(
            r#"
            INSERT INTO medication_logs (medication_id, date, dose_time_id, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (medication_id, date, dose_time_id) DO NOTHING
            "#,
        )
        .bind(medication_id)
        .bind(date)
        .bind(dose_time_id)
        .bind(LogStatus::NotRecorded.as_str())
        .execute(self.pool)
        .await?;

        let log = sqlx::query_as::<_, MedicationLog>(
            r#"
            SELECT id, medication_id, date, dose_time_id, status
            FROM medication_logs
            WHERE medication_id = $1 AND date = $2 AND dose_time_id = $3
            "#,
        )
        .bind(medication_id)
        .bind(date)
        .bind(dose_time_id)
        .fetch_one(self.pool)
        .await?;

        Ok(log)
    }

    async fn logs_for_user(&self, user_id: Uuid) -> Result<Vec<MedicationLog>, StoreError> {
        let logs = sqlx::query_as::<_, MedicationLog>(
            r#"
            SELECT l.id, l.medication_id, l.date, l.dose_time_id, l.status
            FROM medication_logs l
            JOIN medications m ON m.id = l.medication_id
            WHERE m.user_id = $1
            ORDER BY l.date, l.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(logs)
    }
}
