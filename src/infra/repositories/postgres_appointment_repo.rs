use crate::domain::{
    models::appointment::{Appointment, AppointmentStatus, NotificationStage},
    ports::AppointmentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresAppointmentRepo {
    pool: PgPool,
}

impl PostgresAppointmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepo {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (id, provider_id, client_name, client_phone, service, scheduled_at, duration_min, status, notification_stage, manage_token, created_at, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *"
        )
            .bind(&appointment.id).bind(&appointment.provider_id).bind(&appointment.client_name)
            .bind(&appointment.client_phone).bind(&appointment.service).bind(appointment.scheduled_at)
            .bind(appointment.duration_min).bind(appointment.status).bind(appointment.notification_stage)
            .bind(&appointment.manage_token).bind(appointment.created_at).bind(appointment.expires_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, provider_id: &str, id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE provider_id = $1 AND id = $2")
            .bind(provider_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE manage_token = $1")
            .bind(token).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_provider(&self, provider_id: &str) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE provider_id = $1 ORDER BY scheduled_at ASC")
            .bind(provider_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_range(&self, provider_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE provider_id = $1 AND scheduled_at >= $2 AND scheduled_at <= $3 ORDER BY scheduled_at ASC"
        )
            .bind(provider_id).bind(start).bind(end)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_pending(&self) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE status = 'PENDING' ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_state(&self, id: &str, status: AppointmentStatus, stage: NotificationStage) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE appointments SET status = $1, notification_stage = $2 WHERE id = $3")
            .bind(status).bind(stage).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".into()));
        }
        Ok(())
    }
}
