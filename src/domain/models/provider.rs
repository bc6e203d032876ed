use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct DayPolicy {
    pub enabled: bool,
    pub start_hour: i32,
    pub end_hour: i32,
}

/// Weekly operating hours. A day left out of the payload stays `None`,
/// which the engine treats the same as an explicitly disabled day.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WeeklySchedule {
    pub sunday: Option<DayPolicy>,
    pub monday: Option<DayPolicy>,
    pub tuesday: Option<DayPolicy>,
    pub wednesday: Option<DayPolicy>,
    pub thursday: Option<DayPolicy>,
    pub friday: Option<DayPolicy>,
    pub saturday: Option<DayPolicy>,
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> Option<&DayPolicy> {
        match weekday {
            Weekday::Sun => self.sunday.as_ref(),
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub timezone: String,
    pub schedule_json: String,
    pub created_at: DateTime<Utc>,
}

impl Provider {
    pub fn new(name: String, phone: String, timezone: String, schedule: &WeeklySchedule) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            timezone,
            schedule_json: serde_json::to_string(schedule).unwrap_or_else(|_| "{}".to_string()),
            created_at: Utc::now(),
        }
    }

    /// Malformed schedule JSON degrades to an empty schedule (all days closed).
    pub fn schedule(&self) -> WeeklySchedule {
        serde_json::from_str(&self.schedule_json).unwrap_or_default()
    }

    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }
}
