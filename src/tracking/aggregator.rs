//! Per-day aggregation of dated records.
//!
//! Records are grouped by their exact date and every planned field is
//! reduced over the group, skipping missing values. A day on which a field
//! was never recorded keeps `None` for it rather than a zero. The overall
//! figure for a field is the mean of its per-day values, not of the raw
//! records, so days with many entries weigh the same as days with one.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::health_metric::HealthMetric;
use crate::models::sleep::SleepRecord;
use crate::utils::health_calculations::{
    display_weight_lbs, mean_of_present, round2, sum_of_present,
};

/// A numeric field that can be read from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Body weight, read in kilograms and presented in pounds.
    Weight,
    Calories,
    Activity,
    MeanArterialPressure,
    HeartRate,
    SleepDuration,
    SleepQuality,
}

impl Metric {
    /// Presentation value of a per-day aggregate.
    pub fn present(self, value: f64) -> f64 {
        match self {
            Metric::Weight => display_weight_lbs(value),
            _ => round2(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Mean,
}

impl Reduction {
    pub fn reduce<I>(self, values: I) -> Option<f64>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        match self {
            Reduction::Sum => sum_of_present(values),
            Reduction::Mean => mean_of_present(values),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPlan {
    pub metric: Metric,
    pub reduction: Reduction,
}

impl FieldPlan {
    pub const fn new(metric: Metric, reduction: Reduction) -> Self {
        Self { metric, reduction }
    }
}

pub const HEALTH_DASHBOARD_PLAN: &[FieldPlan] = &[
    FieldPlan::new(Metric::Weight, Reduction::Mean),
    FieldPlan::new(Metric::Calories, Reduction::Sum),
    FieldPlan::new(Metric::Activity, Reduction::Sum),
    FieldPlan::new(Metric::MeanArterialPressure, Reduction::Mean),
    FieldPlan::new(Metric::HeartRate, Reduction::Mean),
];

pub const SLEEP_DASHBOARD_PLAN: &[FieldPlan] = &[
    FieldPlan::new(Metric::SleepDuration, Reduction::Sum),
    FieldPlan::new(Metric::SleepQuality, Reduction::Mean),
];

pub const REPORT_HEALTH_PLAN: &[FieldPlan] = &[
    FieldPlan::new(Metric::Weight, Reduction::Mean),
    FieldPlan::new(Metric::Calories, Reduction::Mean),
    FieldPlan::new(Metric::Activity, Reduction::Mean),
    FieldPlan::new(Metric::MeanArterialPressure, Reduction::Mean),
    FieldPlan::new(Metric::HeartRate, Reduction::Mean),
];

pub const REPORT_SLEEP_PLAN: &[FieldPlan] = &[
    FieldPlan::new(Metric::SleepDuration, Reduction::Sum),
];

/// A record that belongs to a calendar date and exposes numeric fields.
pub trait DailySample {
    fn date(&self) -> NaiveDate;

    /// Raw value of `metric`, or `None` when the record has no such value.
    fn metric(&self, metric: Metric) -> Option<f64>;
}

impl DailySample for HealthMetric {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => Some(self.weight),
            Metric::Calories => self.calories_intake.map(f64::from),
            Metric::Activity => self.physical_activity_minutes.map(f64::from),
            Metric::MeanArterialPressure => self.mean_arterial_pressure(),
            Metric::HeartRate => self.heart_rate.map(f64::from),
            Metric::SleepDuration | Metric::SleepQuality => None,
        }
    }
}

impl DailySample for SleepRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::SleepDuration => Some(self.duration),
            Metric::SleepQuality => Some(f64::from(self.quality)),
            _ => None,
        }
    }
}

/// Aggregated values for one date, in plan order.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregates {
    plan: Vec<FieldPlan>,
    days: Vec<DailyAggregate>,
}

impl DailyAggregates {
    pub fn plan(&self) -> &[FieldPlan] {
        &self.plan
    }

    pub fn days(&self) -> &[DailyAggregate] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|day| day.date).collect()
    }

    fn column(&self, metric: Metric) -> Option<usize> {
        self.plan.iter().position(|field| field.metric == metric)
    }

    /// Per-day presentation values of `metric`, oldest first. Empty when the
    /// metric is not part of the plan.
    pub fn series(&self, metric: Metric) -> Vec<Option<f64>> {
        match self.column(metric) {
            Some(col) => self.days.iter().map(|day| day.values[col]).collect(),
            None => Vec::new(),
        }
    }

    /// Value of `metric` on the most recent date.
    pub fn latest(&self, metric: Metric) -> Option<f64> {
        let col = self.column(metric)?;
        self.days.last().and_then(|day| day.values[col])
    }

    /// Mean of the non-missing per-day values of `metric`. Not rounded;
    /// feedback thresholds compare against the exact mean.
    pub fn overall(&self, metric: Metric) -> Option<f64> {
        mean_of_present(self.series(metric))
    }
}

/// Groups `records` by date and reduces every field of `plan` per group.
pub fn aggregate_by_date<'a, R, I>(records: I, plan: &[FieldPlan]) -> DailyAggregates
where
    R: DailySample + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut groups: BTreeMap<NaiveDate, Vec<&R>> = BTreeMap::new();
    for record in records {
        groups.entry(record.date()).or_default().push(record);
    }

    let days = groups
        .into_iter()
        .map(|(date, group)| {
            let values = plan
                .iter()
                .map(|field| {
                    field
                        .reduction
                        .reduce(group.iter().map(|record| record.metric(field.metric)))
                        .map(|value| field.metric.present(value))
                })
                .collect();
            DailyAggregate { date, values }
        })
        .collect();

    DailyAggregates {
        plan: plan.to_vec(),
        days,
    }
}
