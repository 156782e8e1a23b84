use chrono::NaiveDateTime;

use crate::models::appointment::{Appointment, CalendarEvent};

pub const CALENDAR_START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Appointments split around the current instant, each side ordered by
/// start time.
#[derive(Debug, Clone, Default)]
pub struct AppointmentTimeline {
    pub past: Vec<Appointment>,
    pub upcoming: Vec<Appointment>,
}

/// An appointment is upcoming when it is on a later date, or today at or
/// after the current time.
pub fn is_upcoming(appointment: &Appointment, now: NaiveDateTime) -> bool {
    let today = now.date();
    appointment.appointment_date > today
        || (appointment.appointment_date == today && appointment.appointment_time >= now.time())
}

pub fn split_by_now(appointments: &[Appointment], now: NaiveDateTime) -> AppointmentTimeline {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = appointments
        .iter()
        .cloned()
        .partition(|appointment| is_upcoming(appointment, now));

    past.sort_by_key(Appointment::starts_at);
    upcoming.sort_by_key(Appointment::starts_at);

    AppointmentTimeline { past, upcoming }
}

pub fn calendar_events(appointments: &[Appointment]) -> Vec<CalendarEvent> {
    appointments
        .iter()
        .map(|appointment| CalendarEvent {
            id: appointment.id,
            title: appointment.title.clone(),
            start: appointment.starts_at().format(CALENDAR_START_FORMAT).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;
    use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    fn appointment(day: u32, hour: u32, minute: u32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: format!("Checkup {}", day),
            description: String::new(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 6, day).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            location: String::new(),
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn same_day_is_split_on_time_of_day() {
        let now = at(10, 12, 0);
        assert!(!is_upcoming(&appointment(10, 11, 59), now));
        assert!(is_upcoming(&appointment(10, 12, 0), now));
        assert!(is_upcoming(&appointment(10, 15, 30), now));
        assert!(is_upcoming(&appointment(11, 0, 0), now));
        assert!(!is_upcoming(&appointment(9, 23, 59), now));
    }

    #[test]
    fn both_sides_are_sorted_by_start() {
        let items = vec![
            appointment(20, 9, 0),
            appointment(2, 9, 0),
            appointment(15, 8, 0),
            appointment(1, 17, 0),
        ];
        let timeline = split_by_now(&items, at(10, 12, 0));

        let past: Vec<u32> = timeline.past.iter().map(|a| a.appointment_date.day()).collect();
        let upcoming: Vec<u32> = timeline.upcoming.iter().map(|a| a.appointment_date.day()).collect();
        assert_eq!(past, vec![1, 2]);
        assert_eq!(upcoming, vec![15, 20]);
    }

    #[test]
    fn calendar_start_is_iso_datetime() {
        let item = appointment(3, 14, 5);
        let events = calendar_events(std::slice::from_ref(&item));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, item.id);
        assert_eq!(events[0].start, "2026-06-03T14:05:00");
    }
}
