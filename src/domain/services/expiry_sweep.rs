use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::appointment::{Appointment, AppointmentStatus, NotificationStage};
use crate::domain::models::notification::{ExpiryNotification, ExpiryStage};
use crate::domain::services::lifecycle::{self, ExpiryConfig};

#[derive(Debug, Default, Serialize, Clone, Copy)]
pub struct SweepOutcome {
    pub expired_count: usize,
    pub warnings_sent: usize,
    pub final_warnings_sent: usize,
}

impl SweepOutcome {
    pub fn total(&self) -> usize {
        self.expired_count + self.warnings_sent + self.final_warnings_sent
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SweepAction {
    Expire,
    FinalWarning { minutes_left: i64 },
    Warning { minutes_left: i64 },
}

/// Decides what one sweep pass does with an appointment. First match wins;
/// an appointment gets at most one action per pass.
///
/// The final warning only requires that no final warning was recorded yet,
/// so it still fires after a plain warning. The plain warning requires a
/// clean stage, so it can never fire twice or after a final warning.
pub fn evaluate(appointment: &Appointment, config: &ExpiryConfig, now: DateTime<Utc>) -> Option<SweepAction> {
    if appointment.status != AppointmentStatus::Pending {
        return None;
    }

    if lifecycle::is_expired(appointment, now) {
        return Some(SweepAction::Expire);
    }

    let minutes_left = lifecycle::minutes_until_expiry(appointment, now);

    if minutes_left <= config.final_warning_threshold_min
        && appointment.notification_stage != NotificationStage::FinalWarned
    {
        return Some(SweepAction::FinalWarning { minutes_left });
    }

    if minutes_left <= config.warning_threshold_min
        && appointment.notification_stage == NotificationStage::None
    {
        return Some(SweepAction::Warning { minutes_left });
    }

    None
}

/// One evaluation pass over a provider's pending batch. Mutates statuses
/// and notification stages in place and appends one log record per action
/// taken. The caller persists the mutations and hands the messages to the
/// transport; delivery failures must not undo what the sweep decided.
pub fn sweep(
    batch: &mut [Appointment],
    config: &ExpiryConfig,
    now: DateTime<Utc>,
    log: &mut Vec<ExpiryNotification>,
) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    for appointment in batch.iter_mut() {
        match evaluate(appointment, config, now) {
            Some(SweepAction::Expire) => {
                appointment.status = AppointmentStatus::Expired;
                log.push(ExpiryNotification::new(
                    appointment.id.clone(),
                    ExpiryStage::Expired,
                    expired_message(),
                    now,
                ));
                outcome.expired_count += 1;
            }
            Some(SweepAction::FinalWarning { minutes_left }) => {
                appointment.notification_stage = NotificationStage::FinalWarned;
                log.push(ExpiryNotification::new(
                    appointment.id.clone(),
                    ExpiryStage::FinalWarning,
                    final_warning_message(minutes_left),
                    now,
                ));
                outcome.final_warnings_sent += 1;
            }
            Some(SweepAction::Warning { minutes_left }) => {
                appointment.notification_stage = NotificationStage::Warned;
                log.push(ExpiryNotification::new(
                    appointment.id.clone(),
                    ExpiryStage::Warning,
                    warning_message(minutes_left),
                    now,
                ));
                outcome.warnings_sent += 1;
            }
            None => {}
        }
    }

    outcome
}

pub fn warning_message(minutes_left: i64) -> String {
    format!(
        "Your appointment request is still awaiting confirmation and will expire in {} minutes.",
        minutes_left
    )
}

pub fn final_warning_message(minutes_left: i64) -> String {
    format!(
        "Last call: your appointment request expires in {} minutes unless it is confirmed.",
        minutes_left
    )
}

pub fn expired_message() -> String {
    "Your appointment request was not confirmed in time and has expired. Please request a new time.".to_string()
}
