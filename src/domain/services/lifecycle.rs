use chrono::{DateTime, Utc};

use crate::domain::models::appointment::{Appointment, AppointmentStatus};
use crate::error::AppError;

/// Timing constants for the pending-confirmation window. Fixed per
/// deployment via configuration; never varies per appointment.
#[derive(Debug, Clone, Copy)]
pub struct ExpiryConfig {
    pub window_min: i64,
    pub warning_threshold_min: i64,
    pub final_warning_threshold_min: i64,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            window_min: 30,
            warning_threshold_min: 10,
            final_warning_threshold_min: 5,
        }
    }
}

/// Expiry is observed only while the appointment is still pending. Once a
/// terminal status is captured the deadline no longer matters.
pub fn is_expired(appointment: &Appointment, now: DateTime<Utc>) -> bool {
    appointment.status == AppointmentStatus::Pending && now > appointment.expires_at
}

pub fn minutes_until_expiry(appointment: &Appointment, now: DateTime<Utc>) -> i64 {
    (appointment.expires_at - now).num_minutes()
}

pub fn confirm(appointment: &mut Appointment) -> Result<(), AppError> {
    if appointment.status.is_terminal() {
        return Err(AppError::Conflict("Appointment is no longer pending".into()));
    }
    appointment.status = AppointmentStatus::Confirmed;
    Ok(())
}

pub fn cancel(appointment: &mut Appointment) -> Result<(), AppError> {
    if appointment.status.is_terminal() {
        return Err(AppError::Conflict("Appointment is no longer pending".into()));
    }
    appointment.status = AppointmentStatus::Cancelled;
    Ok(())
}
