use crate::domain::{models::notification::ExpiryNotification, ports::NotificationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepo {
    async fn append(&self, notification: &ExpiryNotification) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO expiry_notifications (id, appointment_id, stage, message, sent_at) VALUES ($1, $2, $3, $4, $5)"
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
             WHERE a.provider_id = $1
             ORDER BY n.sent_at ASC"
        )
            .bind(provider_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
