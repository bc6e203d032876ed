use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStage {
    Warning,
    FinalWarning,
    Expired,
}

/// Append-only record of a staged expiry message. One row per stage per
/// appointment; the sweep is the only writer.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ExpiryNotification {
    pub id: String,
    pub appointment_id: String,
    pub stage: ExpiryStage,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl ExpiryNotification {
    pub fn new(appointment_id: String, stage: ExpiryStage, message: String, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            appointment_id,
            stage,
            message,
            sent_at,
        }
    }
}
