use chrono::{Datelike, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::models::appointment::Appointment;
use crate::domain::models::provider::WeeklySchedule;
use crate::domain::services::working_hours;

/// Grid shown when a day has no enabled operating window: 9 AM to 8 PM.
const DEFAULT_OPEN_HOUR: i32 = 9;
const DEFAULT_CLOSE_HOUR: i32 = 20;

/// One hour of a provider's day, annotated for the calendar view.
/// Derived on demand, never persisted.
#[derive(Debug, Serialize, Clone)]
pub struct SlotDescriptor {
    pub hour: i32,
    pub display_label: String,
    pub appointment: Option<Appointment>,
    pub is_blocked: bool,
    pub is_within_working_hours: bool,
}

/// Builds the ordered hourly slot grid for one provider-local day.
///
/// The display window is the day's operating window (or the default when
/// the day is closed), widened so that every appointment on the date gets
/// a slot even when it was booked outside nominal hours. Blocking is a
/// pure function of working-hours membership: an occupied out-of-hours
/// slot still renders blocked, which surfaces scheduling anomalies.
pub fn generate(
    appointments: &[Appointment],
    schedule: &WeeklySchedule,
    tz: Tz,
    date: NaiveDate,
) -> Vec<SlotDescriptor> {
    let (mut lower, mut upper) = match schedule.day(date.weekday()) {
        Some(policy) if policy.enabled => (policy.start_hour, policy.end_hour),
        _ => (DEFAULT_OPEN_HOUR, DEFAULT_CLOSE_HOUR),
    };

    let mut on_date: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.scheduled_at.with_timezone(&tz).date_naive() == date)
        .collect();
    on_date.sort_by_key(|a| a.scheduled_at);

    for appointment in &on_date {
        let hour = appointment.scheduled_at.with_timezone(&tz).hour() as i32;
        if hour < lower {
            lower = hour;
        }
        if hour >= upper {
            upper = hour + 1;
        }
    }

    let mut slots = Vec::new();
    for hour in lower..=upper {
        // Earliest appointment in the hour wins; the batch is sorted.
        let appointment = on_date
            .iter()
            .find(|a| a.scheduled_at.with_timezone(&tz).hour() as i32 == hour)
            .map(|a| (*a).clone());

        let is_within_working_hours = working_hours::is_open(hour, schedule, date);

        slots.push(SlotDescriptor {
            hour,
            display_label: hour_label(hour),
            appointment,
            is_blocked: !is_within_working_hours,
            is_within_working_hours,
        });
    }

    slots
}

fn hour_label(hour: i32) -> String {
    if hour == 0 {
        "12 AM".to_string()
    } else if hour == 12 {
        "12 PM".to_string()
    } else if hour < 12 {
        format!("{} AM", hour)
    } else {
        format!("{} PM", hour - 12)
    }
}
