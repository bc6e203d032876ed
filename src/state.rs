use std::sync::Arc;
use crate::domain::ports::{
    AppointmentRepository, NotificationRepository, ProviderRepository, SmsService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub provider_repo: Arc<dyn ProviderRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub notification_repo: Arc<dyn NotificationRepository>,
    pub sms_service: Arc<dyn SmsService>,
}
