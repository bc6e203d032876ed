use crate::domain::{models::notification::ExpiryNotification, ports::NotificationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteNotificationRepo {
    pool: SqlitePool,
}

impl SqliteNotificationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for SqliteNotificationRepo {
    async fn append(&self, notification: &ExpiryNotification) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO expiry_notifications (id, appointment_id, stage, message, sent_at) VALUES (?, ?, ?, ?, ?)"
        )
            .bind(&notification.id).bind(&notification.appointment_id).bind(notification.stage)
            .bind(&notification.message).bind(notification.sent_at)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_by_provider(&self, provider_id: &str) -> Result<Vec<ExpiryNotification>, AppError> {
        sqlx::query_as::<_, ExpiryNotification>(
            "SELECT n.* FROM expiry_notifications n
             JOIN appointments a ON a.id = n.appointment_id
             WHERE a.provider_id = ?
             ORDER BY n.sent_at ASC"
        )
            .bind(provider_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
