use crate::domain::models::{
    appointment::{Appointment, AppointmentStatus, NotificationStage},
    notification::{ExpiryNotification, ExpiryStage},
    provider::Provider,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn create(&self, provider: &Provider) -> Result<Provider, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Provider>, AppError>;
    async fn update_schedule(&self, id: &str, schedule_json: &str) -> Result<Provider, AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn find_by_id(&self, provider_id: &str, id: &str) -> Result<Option<Appointment>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Appointment>, AppError>;
    async fn list_by_provider(&self, provider_id: &str) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_range(&self, provider_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Appointment>, AppError>;
    async fn find_pending(&self) -> Result<Vec<Appointment>, AppError>;
    async fn update_state(&self, id: &str, status: AppointmentStatus, stage: NotificationStage) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn append(&self, notification: &ExpiryNotification) -> Result<(), AppError>;
    async fn list_by_provider(&self, provider_id: &str) -> Result<Vec<ExpiryNotification>, AppError>;
}

#[async_trait]
pub trait SmsService: Send + Sync {
    async fn send(&self, recipient: &str, message: &str, stage: ExpiryStage) -> Result<(), AppError>;
}
