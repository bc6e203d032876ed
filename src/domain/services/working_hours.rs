use chrono::{Datelike, NaiveDate};

use crate::domain::models::provider::WeeklySchedule;

/// Returns whether `hour` falls inside the provider's operating window on
/// `date`. Days without an enabled policy are closed. The closing hour
/// itself still counts as open. Inverted or out-of-range hour values make
/// the comparison false for every hour rather than erroring.
pub fn is_open(hour: i32, schedule: &WeeklySchedule, date: NaiveDate) -> bool {
    match schedule.day(date.weekday()) {
        Some(policy) if policy.enabled => policy.start_hour <= hour && hour <= policy.end_hour,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::provider::DayPolicy;

    fn schedule_with_monday(policy: DayPolicy) -> WeeklySchedule {
        WeeklySchedule {
            monday: Some(policy),
            ..WeeklySchedule::default()
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_open_within_window_inclusive_bounds() {
        let schedule = schedule_with_monday(DayPolicy { enabled: true, start_hour: 9, end_hour: 17 });

        assert!(!is_open(8, &schedule, monday()));
        assert!(is_open(9, &schedule, monday()));
        assert!(is_open(12, &schedule, monday()));
        assert!(is_open(17, &schedule, monday()), "closing hour is still open");
        assert!(!is_open(18, &schedule, monday()));
    }

    #[test]
    fn test_absent_day_is_closed() {
        let schedule = schedule_with_monday(DayPolicy { enabled: true, start_hour: 9, end_hour: 17 });
        assert!(!is_open(12, &schedule, sunday()));
    }

    #[test]
    fn test_disabled_day_is_closed_regardless_of_hours() {
        let schedule = schedule_with_monday(DayPolicy { enabled: false, start_hour: 0, end_hour: 23 });
        assert!(!is_open(12, &schedule, monday()));
    }

    #[test]
    fn test_inverted_range_is_closed_for_all_hours() {
        let schedule = schedule_with_monday(DayPolicy { enabled: true, start_hour: 17, end_hour: 9 });
        for hour in 0..24 {
            assert!(!is_open(hour, &schedule, monday()));
        }
    }
}
