use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

use crate::domain::services::lifecycle::ExpiryConfig;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Expired,
}

impl AppointmentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AppointmentStatus::Pending)
    }
}

/// Highest reminder stage already recorded for a pending appointment.
/// Mutated only by the expiry sweep.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStage {
    None,
    Warned,
    FinalWarned,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: String,
    pub provider_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_min: i32,
    pub status: AppointmentStatus,
    pub notification_stage: NotificationStage,
    pub manage_token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub provider_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_min: i32,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams, expiry: &ExpiryConfig) -> Self {
        let created_at = Utc::now();

        let manage_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            provider_id: params.provider_id,
            client_name: params.client_name,
            client_phone: params.client_phone,
            service: params.service,
            scheduled_at: params.scheduled_at,
            duration_min: params.duration_min,
            status: AppointmentStatus::Pending,
            notification_stage: NotificationStage::None,
            manage_token,
            created_at,
            expires_at: created_at + Duration::minutes(expiry.window_min),
        }
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(self.duration_min as i64)
    }
}
