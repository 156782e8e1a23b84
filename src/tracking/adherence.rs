//! Daily medication adherence.
//!
//! Opening the medication dashboard makes sure every dose due today has a
//! log row, creating missing ones as `not_recorded`, and then counts the
//! statuses of today's logs and of the whole history. Past days are never
//! backfilled.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::medication::{
    AdherenceCounts, LogStatus, MedicationDoseTime, MedicationLog, MedicationSchedule,
};

/// Weekdays a dose recurs on. An empty set means every day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringDays {
    days: Vec<Weekday>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("'{0}' is not a weekday name")]
pub struct InvalidWeekday(pub String);

impl RecurringDays {
    pub fn every_day() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list such as `"Mon,Wed,Fri"`. Names are
    /// case-insensitive and may be abbreviated to three letters.
    pub fn parse(raw: &str) -> Result<Self, InvalidWeekday> {
        let mut days = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let day = token
                .parse::<Weekday>()
                .map_err(|_| InvalidWeekday(token.to_string()))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(Self { days })
    }

    pub fn is_every_day(&self) -> bool {
        self.days.is_empty()
    }

    pub fn includes(&self, weekday: Weekday) -> bool {
        self.days.is_empty() || self.days.contains(&weekday)
    }
}

/// Stored values are validated on write; an unreadable one is never due.
fn is_due(dose: &MedicationDoseTime, weekday: Weekday) -> bool {
    match RecurringDays::parse(&dose.recurring_days) {
        Ok(days) => days.includes(weekday),
        Err(e) => {
            tracing::warn!(dose_time_id = %dose.id, "Skipping dose time: {}", e);
            false
        }
    }
}

/// Dose times due on `today` across all medications that have started.
pub fn doses_due<'a>(
    schedules: &'a [MedicationSchedule],
    today: NaiveDate,
) -> Vec<(Uuid, &'a MedicationDoseTime)> {
    schedules
        .iter()
        .filter(|schedule| schedule.medication.start_date <= today)
        .flat_map(|schedule| {
            schedule
                .dose_times
                .iter()
                .filter(move |dose| is_due(dose, today.weekday()))
                .map(move |dose| (schedule.medication.id, dose))
        })
        .collect()
}

pub fn tally<'a, I>(logs: I) -> AdherenceCounts
where
    I: IntoIterator<Item = &'a MedicationLog>,
{
    logs.into_iter()
        .fold(AdherenceCounts::default(), |mut counts, log| {
            match log.status {
                LogStatus::Taken => counts.taken += 1,
                LogStatus::NotTaken => counts.not_taken += 1,
                LogStatus::NotRecorded => counts.not_recorded += 1,
            }
            counts
        })
}

/// Storage for medication logs.
#[async_trait]
pub trait MedicationLogStore {
    /// Returns the log for (medication, date, dose time), inserting one with
    /// status `not_recorded` when none exists. Must be safe to call
    /// concurrently for the same key.
    async fn get_or_create_log(
        &self,
        medication_id: Uuid,
        dose_time_id: Uuid,
        date: NaiveDate,
    ) -> Result<MedicationLog, StoreError>;

    /// Every log of every medication owned by `user_id`.
    async fn logs_for_user(&self, user_id: Uuid) -> Result<Vec<MedicationLog>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct AdherenceRollup {
    pub today_logs: Vec<MedicationLog>,
    pub today_counts: AdherenceCounts,
    pub overall_counts: AdherenceCounts,
}

/// Ensures today's logs exist and counts adherence for `user_id`.
#[tracing::instrument(
    name = "Roll up medication adherence",
    skip(store, schedules),
    fields(user_id = %user_id, medications = schedules.len())
)]
pub async fn roll_up<S>(
    store: &S,
    user_id: Uuid,
    schedules: &[MedicationSchedule],
    today: NaiveDate,
) -> Result<AdherenceRollup, StoreError>
where
    S: MedicationLogStore + Sync + ?Sized,
{
    let mut today_logs = Vec::new();
    for (medication_id, dose) in doses_due(schedules, today) {
        let log = store.get_or_create_log(medication_id, dose.id, today).await?;
        today_logs.push(log);
    }

    let today_counts = tally(&today_logs);
    let history = store.logs_for_user(user_id).await?;
    let overall_counts = tally(&history);

    tracing::info!(
        due_today = today_logs.len(),
        taken_today = today_counts.taken,
        "Medication adherence rolled up"
    );

    Ok(AdherenceRollup {
        today_logs,
        today_counts,
        overall_counts,
    })
}
