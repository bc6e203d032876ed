pub mod postgres_appointment_repo;
pub mod postgres_notification_repo;
pub mod postgres_provider_repo;
pub mod sqlite_appointment_repo;
pub mod sqlite_notification_repo;
pub mod sqlite_provider_repo;
