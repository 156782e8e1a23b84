use crate::models::goal::{Comparison, Goal, GoalKind};
use crate::models::health_metric::HealthMetric;
use crate::models::sleep::SleepRecord;
use crate::tracking::aggregator::{DailySample, Metric};
use crate::tracking::windows::DateRange;
use crate::utils::health_calculations::{display_weight_lbs, mean_of_present, round2};

pub const MAX_PROGRESS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GoalEvaluation {
    pub progress: Option<f64>,
    pub feedback: String,
}

impl GoalEvaluation {
    fn undefined() -> Self {
        Self {
            progress: None,
            feedback: String::new(),
        }
    }
}

impl Comparison {
    /// Whether `current` satisfies a goal of `target` in this direction.
    pub fn is_met(&self, current: f64, target: f64) -> bool {
        match self {
            Comparison::Min => current <= target,
            Comparison::Max => current >= target,
        }
    }
}

impl GoalKind {
    fn feedback(&self, met: bool) -> &'static str {
        match (self, met) {
            (GoalKind::Weight, true) => "Your current weight meets your goal.",
            (GoalKind::Weight, false) => {
                "Consider adjusting your diet or exercise to achieve your weight goal."
            }
            (GoalKind::Calories, true) => "Your calorie intake meets your goal.",
            (GoalKind::Calories, false) => "Consider reducing your calorie intake to meet your target.",
            (GoalKind::Activity, true) => "Your activity level meets your goal.",
            (GoalKind::Activity, false) => "Increase your activity to reach your physical activity goal.",
            (GoalKind::Sleep, true) => "Your sleep duration meets your goal.",
            (GoalKind::Sleep, false) => "Try to improve your sleep habits to meet your target.",
        }
    }

    /// The value this goal is measured against.
    ///
    /// Weight goals use the most recent entry, in pounds. The other kinds use
    /// the mean of the raw records inside `window`.
    pub fn current_value(
        &self,
        metrics: &[HealthMetric],
        sleep: &[SleepRecord],
        window: DateRange,
    ) -> Option<f64> {
        match self {
            GoalKind::Weight => latest_weight_lbs(metrics),
            GoalKind::Calories => window_mean(metrics, Metric::Calories, window),
            GoalKind::Activity => window_mean(metrics, Metric::Activity, window),
            GoalKind::Sleep => window_mean(sleep, Metric::SleepDuration, window),
        }
    }
}

fn latest_weight_lbs(metrics: &[HealthMetric]) -> Option<f64> {
    metrics
        .iter()
        .max_by_key(|metric| metric.date)
        .map(|metric| display_weight_lbs(metric.weight))
}

fn window_mean<R: DailySample>(records: &[R], metric: Metric, window: DateRange) -> Option<f64> {
    mean_of_present(
        records
            .iter()
            .filter(|record| window.contains(record.date()))
            .map(|record| record.metric(metric)),
    )
    .map(round2)
}

/// Progress towards `target` as a percentage capped at 100.
///
/// `None` when there is no current value, when the target is zero, or when
/// a minimising goal has a current value of zero.
pub fn progress_percentage(comparison: Comparison, target: f64, current: Option<f64>) -> Option<f64> {
    let current = current?;
    if target == 0.0 {
        return None;
    }

    let ratio = match comparison {
        Comparison::Max => current / target,
        Comparison::Min if current == 0.0 => return None,
        Comparison::Min => target / current,
    };

    Some(round2((ratio * 100.0).min(MAX_PROGRESS)))
}

/// Progress and feedback for a goal of `kind` given its current value.
pub fn evaluate(
    kind: GoalKind,
    comparison: Comparison,
    target: f64,
    current: Option<f64>,
) -> GoalEvaluation {
    let Some(value) = current else {
        return GoalEvaluation::undefined();
    };
    if comparison == Comparison::Min && value == 0.0 {
        tracing::debug!("Minimising goal with a current value of zero has no defined progress");
        return GoalEvaluation::undefined();
    }

    GoalEvaluation {
        progress: progress_percentage(comparison, target, current),
        feedback: kind.feedback(comparison.is_met(value, target)).to_string(),
    }
}

pub fn evaluate_goal(goal: &Goal, current: Option<f64>) -> GoalEvaluation {
    evaluate(goal.goal_type, goal.comparison, goal.target_value, current)
}
