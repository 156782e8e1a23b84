use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use healthy_you_backend::models::appointment::{Appointment, AppointmentStatus};
use healthy_you_backend::tracking::dashboards::appointment_dashboard;

fn appointment(title: &str, day: u32, time: (u32, u32)) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        title: title.to_string(),
        description: String::new(),
        appointment_date: NaiveDate::from_ymd_opt(2026, 9, day).unwrap(),
        appointment_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        location: String::new(),
        status: AppointmentStatus::Pending,
        created_at: Utc::now(),
    }
}

#[test]
fn dashboard_splits_around_now_and_lists_every_event() {
    let now = NaiveDate::from_ymd_opt(2026, 9, 10)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap();
    let appointments = vec![
        appointment("Physio", 12, (10, 0)),
        appointment("Dentist", 10, (9, 0)),
        appointment("Cardiology", 10, (15, 45)),
        appointment("GP", 3, (11, 30)),
    ];

    let dashboard = appointment_dashboard(appointments, now);

    let titles = |list: &[Appointment]| list.iter().map(|a| a.title.clone()).collect::<Vec<_>>();
    assert_eq!(titles(&dashboard.old_appointments), vec!["GP", "Dentist"]);
    assert_eq!(titles(&dashboard.upcoming_appointments), vec!["Cardiology", "Physio"]);
    assert_eq!(dashboard.appointments.len(), 4);
    assert_eq!(dashboard.events.len(), 4);

    let cardiology = dashboard
        .events
        .iter()
        .find(|event| event.title == "Cardiology")
        .unwrap();
    assert_eq!(cardiology.start, "2026-09-10T15:45:00");
}

#[test]
fn empty_history_gives_an_empty_dashboard() {
    let now = NaiveDate::from_ymd_opt(2026, 9, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let dashboard = appointment_dashboard(Vec::new(), now);

    assert!(dashboard.appointments.is_empty());
    assert!(dashboard.events.is_empty());
    assert!(dashboard.old_appointments.is_empty());
    assert!(dashboard.upcoming_appointments.is_empty());
}
