use serde::Serialize;

use crate::models::report::ReportAverages;
use crate::tracking::aggregator::{DailyAggregates, Metric};

/// Population reference values shown next to the user's own averages.
pub const NATIONAL_AVG_HEART_RATE: f64 = 70.0;
pub const NATIONAL_AVG_MAP: f64 = 93.0;

pub const HEALTHY_SLEEP_HOURS: f64 = 7.0;
pub const SATISFACTORY_SLEEP_QUALITY: f64 = 3.0;

pub const REPORT_WEIGHT_LIMIT_LBS: f64 = 180.0;
pub const REPORT_CALORIE_LIMIT: f64 = 2500.0;
pub const REPORT_MIN_ACTIVITY_MINUTES: f64 = 30.0;

/// Which side of the user's own average is the worrying one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Concern {
    AboveAverage,
    BelowAverage,
}

struct FieldRule {
    label: &'static str,
    metric: Metric,
    concern: Concern,
    warning: &'static str,
    reassurance: &'static str,
}

/// Fields are reported in this order.
const HEALTH_RULES: &[FieldRule] = &[
    FieldRule {
        label: "MAP",
        metric: Metric::MeanArterialPressure,
        concern: Concern::AboveAverage,
        warning: "Your MAP is trending above your average; consider stress reduction and a consult if this continues.",
        reassurance: "Your MAP is within a healthy range.",
    },
    FieldRule {
        label: "Weight",
        metric: Metric::Weight,
        concern: Concern::AboveAverage,
        warning: "Your weight is trending upward; review your diet and exercise.",
        reassurance: "Your weight appears stable.",
    },
    FieldRule {
        label: "Heart Rate",
        metric: Metric::HeartRate,
        concern: Concern::AboveAverage,
        warning: "Your heart rate is higher than average; consider aerobic exercise and stress management.",
        reassurance: "Your heart rate is within normal range.",
    },
    FieldRule {
        label: "Calories",
        metric: Metric::Calories,
        concern: Concern::AboveAverage,
        warning: "Your calorie intake is higher than average; adjust portion sizes if needed.",
        reassurance: "Your calorie intake is consistent.",
    },
    FieldRule {
        label: "Activity",
        metric: Metric::Activity,
        concern: Concern::BelowAverage,
        warning: "Your physical activity is lower than average; try to increase daily movement.",
        reassurance: "Your activity level is consistent.",
    },
];

impl FieldRule {
    fn evaluate(&self, latest: Option<f64>, overall: Option<f64>) -> String {
        let (latest, overall) = match (latest, overall) {
            (Some(latest), Some(overall)) if overall != 0.0 => (latest, overall),
            _ => return String::new(),
        };

        let worrying = match self.concern {
            Concern::AboveAverage => latest > overall,
            Concern::BelowAverage => latest < overall,
        };

        let message = if worrying { self.warning } else { self.reassurance };
        message.to_string()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldFeedback {
    pub label: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthFeedback {
    pub fields: Vec<FieldFeedback>,
}

impl HealthFeedback {
    pub fn message_for(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.message.as_str())
    }

    /// All fields as `Label: message` lines, in the fixed field order.
    pub fn composite(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compares the most recent day against the user's own average for every
/// monitored health field.
pub fn health_feedback(aggregates: &DailyAggregates) -> HealthFeedback {
    let fields = HEALTH_RULES
        .iter()
        .map(|rule| FieldFeedback {
            label: rule.label,
            message: rule.evaluate(aggregates.latest(rule.metric), aggregates.overall(rule.metric)),
        })
        .collect();

    HealthFeedback { fields }
}

/// Summary and advice for the sleep dashboard.
pub fn sleep_feedback(overall_duration: f64, overall_quality: f64) -> String {
    let mut feedback = format!(
        "Your sleep dashboard shows an average total sleep of {:.2} hours and an average quality of {:.1} out of 5. ",
        overall_duration, overall_quality
    );

    if overall_duration < HEALTHY_SLEEP_HOURS {
        feedback.push_str(
            "You might be getting insufficient sleep; consider establishing a consistent sleep schedule and reducing screen time before bed. ",
        );
    } else {
        feedback.push_str("Your sleep duration is in a healthy range. ");
    }

    if overall_quality < SATISFACTORY_SLEEP_QUALITY {
        feedback.push_str(
            "Your sleep quality is low; consider optimizing your sleep environment (e.g., keeping your room cool and dark) and reducing caffeine in the evening.",
        );
    } else {
        feedback.push_str("Your sleep quality appears satisfactory.");
    }

    feedback
}

/// Text analysis of the report window.
pub fn report_analysis(window_days: i64, averages: &ReportAverages) -> String {
    let mut analysis = format!(
        "Over the past {} days, your average metrics were as follows: \
         Weight: {} lbs, Calorie Intake: {} calories, Activity: {} minutes, MAP: {} mmHg, \
         Heart Rate: {} bpm, and Sleep Duration: {} hours per day. ",
        window_days,
        averages.weight_lbs,
        averages.calories,
        averages.activity,
        averages.map,
        averages.heart_rate,
        averages.sleep_hours,
    );

    if averages.weight_lbs > REPORT_WEIGHT_LIMIT_LBS {
        analysis.push_str("Your weight is higher than ideal; consider nutritional adjustments and exercise. ");
    }
    if averages.calories > REPORT_CALORIE_LIMIT {
        analysis.push_str("Your calorie intake seems high; review portion sizes. ");
    }
    if averages.activity < REPORT_MIN_ACTIVITY_MINUTES {
        analysis.push_str("Your daily physical activity is low; increasing exercise could boost your health. ");
    }
    if averages.sleep_hours < HEALTHY_SLEEP_HOURS {
        analysis.push_str("You are not getting enough sleep; aim for at least 7 hours per night. ");
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health_metric::HealthMetric;
    use crate::tracking::aggregator::{aggregate_by_date, HEALTH_DASHBOARD_PLAN};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(day: u32, weight: f64, activity: Option<i32>) -> HealthMetric {
        HealthMetric {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
            weight,
            blood_pressure_systolic: None,
            blood_pressure_diastolic: None,
            heart_rate: None,
            calories_intake: None,
            physical_activity_minutes: activity,
        }
    }

    #[test]
    fn no_data_means_no_feedback() {
        let agg = aggregate_by_date(&Vec::<HealthMetric>::new(), HEALTH_DASHBOARD_PLAN);
        let feedback = health_feedback(&agg);

        assert_eq!(feedback.fields.len(), 5);
        assert!(feedback.fields.iter().all(|f| f.message.is_empty()));
    }

    #[test]
    fn rising_weight_is_flagged() {
        let agg = aggregate_by_date(&[entry(1, 70.0, None), entry(2, 75.0, None)], HEALTH_DASHBOARD_PLAN);
        let feedback = health_feedback(&agg);

        assert_eq!(
            feedback.message_for("Weight"),
            Some("Your weight is trending upward; review your diet and exercise.")
        );
    }

    #[test]
    fn falling_activity_is_flagged_and_rising_activity_is_not() {
        let falling = aggregate_by_date(&[entry(1, 70.0, Some(60)), entry(2, 70.0, Some(20))], HEALTH_DASHBOARD_PLAN);
        assert_eq!(
            health_feedback(&falling).message_for("Activity"),
            Some("Your physical activity is lower than average; try to increase daily movement.")
        );

        let rising = aggregate_by_date(&[entry(1, 70.0, Some(20)), entry(2, 70.0, Some(60))], HEALTH_DASHBOARD_PLAN);
        assert_eq!(
            health_feedback(&rising).message_for("Activity"),
            Some("Your activity level is consistent.")
        );
    }

    #[test]
    fn zero_average_means_no_feedback() {
        let agg = aggregate_by_date(&[entry(1, 70.0, Some(0)), entry(2, 70.0, Some(0))], HEALTH_DASHBOARD_PLAN);
        assert_eq!(health_feedback(&agg).message_for("Activity"), Some(""));
    }

    #[test]
    fn latest_day_without_value_means_no_feedback() {
        let agg = aggregate_by_date(&[entry(1, 70.0, Some(30)), entry(2, 70.0, None)], HEALTH_DASHBOARD_PLAN);
        assert_eq!(health_feedback(&agg).message_for("Activity"), Some(""));
    }

    #[test]
    fn composite_keeps_field_order() {
        let agg = aggregate_by_date(&[entry(1, 70.0, None)], HEALTH_DASHBOARD_PLAN);
        let composite = health_feedback(&agg).composite();
        let labels: Vec<&str> = composite
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();

        assert_eq!(labels, vec!["MAP", "Weight", "Heart Rate", "Calories", "Activity"]);
    }

    #[test]
    fn sleep_feedback_flags_short_and_poor_sleep() {
        let short = sleep_feedback(6.5, 2.0);
        assert!(short.starts_with("Your sleep dashboard shows an average total sleep of 6.50 hours and an average quality of 2.0 out of 5."));
        assert!(short.contains("insufficient sleep"));
        assert!(short.contains("Your sleep quality is low"));

        let good = sleep_feedback(8.0, 4.0);
        assert!(good.contains("Your sleep duration is in a healthy range."));
        assert!(good.ends_with("Your sleep quality appears satisfactory."));
    }

    #[test]
    fn report_analysis_appends_advice_per_threshold() {
        let averages = ReportAverages {
            weight_lbs: 190.0,
            calories: 2600.0,
            activity: 10.0,
            map: 90.0,
            heart_rate: 72.0,
            sleep_hours: 6.0,
        };
        let analysis = report_analysis(30, &averages);

        assert!(analysis.starts_with("Over the past 30 days"));
        assert!(analysis.contains("Your weight is higher than ideal"));
        assert!(analysis.contains("Your calorie intake seems high"));
        assert!(analysis.contains("Your daily physical activity is low"));
        assert!(analysis.contains("You are not getting enough sleep"));

        let healthy = ReportAverages {
            weight_lbs: 150.0,
            calories: 2000.0,
            activity: 45.0,
            map: 90.0,
            heart_rate: 65.0,
            sleep_hours: 7.5,
        };
        let analysis = report_analysis(30, &healthy);
        assert!(!analysis.contains("higher than ideal"));
        assert!(!analysis.contains("not getting enough sleep"));
    }
}
