//! Dashboard payloads assembled from already-loaded records.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::appointment::{Appointment, AppointmentDashboard};
use crate::models::common::ScatterPoint;
use crate::models::goal::{Goal, GoalDashboard, GoalStatus};
use crate::models::health_metric::{HealthDashboard, HealthMetric};
use crate::models::medication::{MedicationDashboard, MedicationSchedule};
use crate::models::report::{ReportAverages, ReportDashboard};
use crate::models::sleep::{SleepDashboard, SleepRecord};
use crate::tracking::adherence::AdherenceRollup;
use crate::tracking::aggregator::{
    aggregate_by_date, DailyAggregates, DailySample, Metric, HEALTH_DASHBOARD_PLAN, REPORT_HEALTH_PLAN,
    REPORT_SLEEP_PLAN, SLEEP_DASHBOARD_PLAN,
};
use crate::tracking::appointments::{calendar_events, split_by_now};
use crate::tracking::feedback::{
    health_feedback, report_analysis, sleep_feedback, NATIONAL_AVG_HEART_RATE, NATIONAL_AVG_MAP,
};
use crate::tracking::goal_progress::evaluate_goal;
use crate::tracking::windows::{format_date, DateRange};
use crate::utils::health_calculations::{display_weight_lbs, round2};

fn formatted_dates(aggregates: &DailyAggregates) -> Vec<String> {
    aggregates.dates().into_iter().map(format_date).collect()
}

/// One point per record that has a value.
fn scatter<R, F>(records: &[R], value: F) -> Vec<ScatterPoint>
where
    R: DailySample,
    F: Fn(&R) -> Option<f64>,
{
    records
        .iter()
        .filter_map(|record| {
            value(record).map(|y| ScatterPoint {
                x: format_date(record.date()),
                y,
            })
        })
        .collect()
}

/// Aggregates and feedback cover the whole history; `range` only narrows
/// the returned entries.
pub fn health_dashboard(
    metrics: Vec<HealthMetric>,
    range: Option<DateRange>,
    today: NaiveDate,
) -> HealthDashboard {
    let aggregates = aggregate_by_date(&metrics, HEALTH_DASHBOARD_PLAN);
    let feedback = health_feedback(&aggregates);
    let overall = |metric| aggregates.overall(metric).map(round2).unwrap_or(0.0);

    let individual_weight = scatter(&metrics, |m| Some(display_weight_lbs(m.weight)));
    let individual_hr = scatter(&metrics, |m| m.heart_rate.map(f64::from));
    let individual_map = scatter(&metrics, |m| m.mean_arterial_pressure().map(round2));

    let entries = match range {
        Some(range) => metrics.into_iter().filter(|m| range.contains(m.date)).collect(),
        None => metrics,
    };

    HealthDashboard {
        agg_dates: formatted_dates(&aggregates),
        agg_weight_lbs: aggregates.series(Metric::Weight),
        agg_calories: aggregates.series(Metric::Calories),
        agg_activity: aggregates.series(Metric::Activity),
        agg_map: aggregates.series(Metric::MeanArterialPressure),
        agg_hr: aggregates.series(Metric::HeartRate),
        overall_weight: overall(Metric::Weight),
        overall_calories: overall(Metric::Calories),
        overall_activity: overall(Metric::Activity),
        overall_map: overall(Metric::MeanArterialPressure),
        overall_hr: overall(Metric::HeartRate),
        national_avg_hr: NATIONAL_AVG_HEART_RATE,
        national_avg_map: NATIONAL_AVG_MAP,
        detailed_feedback: feedback.composite(),
        feedback: feedback.fields,
        entries,
        individual_weight,
        individual_hr,
        individual_map,
        current_date: format_date(today),
    }
}

pub fn sleep_dashboard(records: Vec<SleepRecord>) -> SleepDashboard {
    let aggregates = aggregate_by_date(&records, SLEEP_DASHBOARD_PLAN);
    let overall_duration = aggregates.overall(Metric::SleepDuration).unwrap_or(0.0);
    let overall_quality = aggregates.overall(Metric::SleepQuality).unwrap_or(0.0);
    let feedback = sleep_feedback(overall_duration, overall_quality);

    SleepDashboard {
        agg_dates: formatted_dates(&aggregates),
        agg_duration: aggregates.series(Metric::SleepDuration),
        agg_quality: aggregates.series(Metric::SleepQuality),
        overall_duration: round2(overall_duration),
        overall_quality: round2(overall_quality),
        individual_duration: scatter(&records, |r| Some(r.duration)),
        individual_quality: scatter(&records, |r| Some(f64::from(r.quality))),
        feedback,
        records,
    }
}

/// `window` is the trailing window the non-weight goals are averaged over.
pub fn goal_dashboard(
    goals: Vec<Goal>,
    metrics: &[HealthMetric],
    sleep: &[SleepRecord],
    window: DateRange,
) -> GoalDashboard {
    let goal_data = goals
        .into_iter()
        .map(|goal| {
            let current_value = goal.goal_type.current_value(metrics, sleep, window);
            let evaluation = evaluate_goal(&goal, current_value);
            GoalStatus {
                goal,
                current_value,
                progress: evaluation.progress,
                feedback: evaluation.feedback,
            }
        })
        .collect();

    GoalDashboard { goal_data }
}

/// `metrics` and `sleep` must already be limited to the report window.
pub fn report_dashboard(
    window_days: i64,
    metrics: &[HealthMetric],
    sleep: &[SleepRecord],
) -> ReportDashboard {
    let health = aggregate_by_date(metrics, REPORT_HEALTH_PLAN);
    let nights = aggregate_by_date(sleep, REPORT_SLEEP_PLAN);
    let average =
        |aggregates: &DailyAggregates, metric| aggregates.overall(metric).map(round2).unwrap_or(0.0);

    let averages = ReportAverages {
        weight_lbs: average(&health, Metric::Weight),
        calories: average(&health, Metric::Calories),
        activity: average(&health, Metric::Activity),
        map: average(&health, Metric::MeanArterialPressure),
        heart_rate: average(&health, Metric::HeartRate),
        sleep_hours: average(&nights, Metric::SleepDuration),
    };

    ReportDashboard {
        window_days,
        hm_dates: formatted_dates(&health),
        hm_weight_lbs: health.series(Metric::Weight),
        hm_calories: health.series(Metric::Calories),
        hm_activity: health.series(Metric::Activity),
        hm_map: health.series(Metric::MeanArterialPressure),
        hm_hr: health.series(Metric::HeartRate),
        sl_dates: formatted_dates(&nights),
        sl_duration: nights.series(Metric::SleepDuration),
        analysis: report_analysis(window_days, &averages),
        averages,
    }
}

pub fn medication_dashboard(
    medications: Vec<MedicationSchedule>,
    today: NaiveDate,
    rollup: AdherenceRollup,
) -> MedicationDashboard {
    MedicationDashboard {
        medications,
        today,
        today_logs: rollup.today_logs,
        today_counts: rollup.today_counts,
        overall_counts: rollup.overall_counts,
    }
}

pub fn appointment_dashboard(appointments: Vec<Appointment>, now: NaiveDateTime) -> AppointmentDashboard {
    let timeline = split_by_now(&appointments, now);

    AppointmentDashboard {
        events: calendar_events(&appointments),
        old_appointments: timeline.past,
        upcoming_appointments: timeline.upcoming,
        appointments,
    }
}
