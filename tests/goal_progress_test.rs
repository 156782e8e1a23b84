use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use healthy_you_backend::models::goal::{Comparison, Goal, GoalKind};
use healthy_you_backend::models::health_metric::HealthMetric;
use healthy_you_backend::models::sleep::SleepRecord;
use healthy_you_backend::tracking::dashboards::goal_dashboard;
use healthy_you_backend::tracking::goal_progress::{evaluate, progress_percentage, MAX_PROGRESS};
use healthy_you_backend::tracking::windows::TrailingWindow;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()
}

fn goal(kind: GoalKind, comparison: Comparison, target: f64) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        goal_type: kind,
        target_value: target,
        comparison,
        description: String::new(),
        due_date: None,
        created_at: Utc::now(),
    }
}

fn entry(days_ago: i64, weight: f64, calories: Option<i32>) -> HealthMetric {
    HealthMetric {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        date: today() - Duration::days(days_ago),
        weight,
        blood_pressure_systolic: None,
        blood_pressure_diastolic: None,
        heart_rate: None,
        calories_intake: calories,
        physical_activity_minutes: None,
    }
}

fn night(days_ago: i64, duration: f64) -> SleepRecord {
    SleepRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        date: today() - Duration::days(days_ago),
        duration,
        quality: 3,
    }
}

#[test]
fn progress_is_clamped_for_every_direction() {
    for target in [0.5, 1.0, 10.0, 2000.0] {
        for current in [0.1, 1.0, 50.0, 1e6] {
            for comparison in [Comparison::Min, Comparison::Max] {
                let progress = progress_percentage(comparison, target, Some(current)).unwrap();
                assert!(progress <= MAX_PROGRESS, "{:?} {} {}", comparison, target, current);
                assert!(progress >= 0.0);
            }
        }
    }
}

#[test]
fn minimising_goal_with_zero_current_value_does_not_panic() {
    let evaluation = evaluate(GoalKind::Weight, Comparison::Min, 150.0, Some(0.0));
    assert_eq!(evaluation.progress, None);
    assert_eq!(evaluation.feedback, "");
}

#[test]
fn weight_goal_uses_the_latest_entry_in_pounds() {
    let metrics = vec![entry(30, 100.0, None), entry(2, 80.0, None), entry(10, 90.0, None)];
    let window = TrailingWindow::new(7).ending_on(today());

    let dashboard = goal_dashboard(
        vec![goal(GoalKind::Weight, Comparison::Min, 150.0)],
        &metrics,
        &[],
        window,
    );
    let status = &dashboard.goal_data[0];

    assert_eq!(status.current_value, Some(176.37));
    assert_eq!(status.progress, Some(85.05));
    assert_eq!(
        status.feedback,
        "Consider adjusting your diet or exercise to achieve your weight goal."
    );
}

#[test]
fn calorie_goal_averages_raw_records_inside_the_window() {
    let metrics = vec![
        entry(0, 70.0, Some(1800)),
        entry(0, 70.0, Some(400)),
        entry(7, 70.0, Some(2000)),
        entry(8, 70.0, Some(9000)),
        entry(3, 70.0, None),
    ];
    let window = TrailingWindow::new(7).ending_on(today());

    let dashboard = goal_dashboard(
        vec![goal(GoalKind::Calories, Comparison::Min, 2000.0)],
        &metrics,
        &[],
        window,
    );
    let status = &dashboard.goal_data[0];

    // (1800 + 400 + 2000) / 3; the entry eight days back is outside the window.
    assert_eq!(status.current_value, Some(1400.0));
    assert_eq!(status.progress, Some(100.0));
    assert_eq!(status.feedback, "Your calorie intake meets your goal.");
}

#[test]
fn sleep_goal_without_recent_nights_has_no_progress() {
    let sleep = vec![night(20, 8.0)];
    let window = TrailingWindow::new(7).ending_on(today());

    let dashboard = goal_dashboard(
        vec![goal(GoalKind::Sleep, Comparison::Max, 8.0)],
        &[],
        &sleep,
        window,
    );
    let status = &dashboard.goal_data[0];

    assert_eq!(status.current_value, None);
    assert_eq!(status.progress, None);
    assert!(status.feedback.is_empty());
}

#[test]
fn sleep_goal_reports_partial_progress() {
    let sleep = vec![night(0, 6.0), night(1, 7.0), night(2, 5.0)];
    let window = TrailingWindow::new(7).ending_on(today());

    let dashboard = goal_dashboard(
        vec![goal(GoalKind::Sleep, Comparison::Max, 8.0)],
        &[],
        &sleep,
        window,
    );
    let status = &dashboard.goal_data[0];

    assert_eq!(status.current_value, Some(6.0));
    assert_eq!(status.progress, Some(75.0));
    assert_eq!(status.feedback, "Try to improve your sleep habits to meet your target.");
}
