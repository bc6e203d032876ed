use serde::Serialize;

use crate::domain::models::appointment::{Appointment, AppointmentStatus};

/// Read-side projection for the pending-confirmations panel. Pure; the
/// sweep must have run for expired appointments to drop out of `visible`.
#[derive(Debug, Serialize)]
pub struct PendingConfirmations {
    pub visible: Vec<Appointment>,
    pub should_show: bool,
    pub expired_count: usize,
}

pub fn project(appointments: &[Appointment]) -> PendingConfirmations {
    let visible: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Pending)
        .cloned()
        .collect();

    let expired_count = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Expired)
        .count();

    PendingConfirmations {
        should_show: !visible.is_empty(),
        visible,
        expired_count,
    }
}
