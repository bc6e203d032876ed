use crate::domain::models::provider::WeeklySchedule;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateProviderRequest {
    pub name: String,
    pub phone: String,
    pub timezone: String,
    pub schedule: WeeklySchedule,
}

#[derive(Deserialize)]
pub struct UpdateScheduleRequest {
    pub schedule: WeeklySchedule,
}

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub duration_min: Option<i32>,
}
