use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tokio::time::sleep;
use tracing::{error, info, info_span, warn, Instrument};

use crate::domain::models::appointment::Appointment;
use crate::domain::services::expiry_sweep::{sweep, SweepOutcome};
use crate::error::AppError;
use crate::state::AppState;

const SWEEP_INTERVAL_SECS: u64 = 60;

/// Single owner of the sweep tick. Providers are processed sequentially,
/// so two sweeps never overlap on the same pending batch.
pub async fn start_expiry_worker(state: Arc<AppState>) {
    info!("Starting expiry sweep worker...");

    loop {
        let now = Utc::now();
        match run_sweep(&state, now).await {
            Ok(outcome) => {
                if outcome.total() > 0 {
                    info!(
                        expired = outcome.expired_count,
                        warnings = outcome.warnings_sent,
                        final_warnings = outcome.final_warnings_sent,
                        "Expiry sweep applied transitions"
                    );
                }
            }
            Err(e) => error!("Expiry sweep failed: {:?}", e),
        }
        sleep(Duration::from_secs(SWEEP_INTERVAL_SECS)).await;
    }
}

/// One full pass over every provider's pending appointments. Status and
/// stage mutations are persisted before the SMS handoff; a failed send is
/// logged and never rolls the transition back.
pub async fn run_sweep(state: &Arc<AppState>, now: DateTime<Utc>) -> Result<SweepOutcome, AppError> {
    let pending = state.appointment_repo.find_pending().await?;

    let mut by_provider: HashMap<String, Vec<Appointment>> = HashMap::new();
    for appointment in pending {
        by_provider.entry(appointment.provider_id.clone()).or_default().push(appointment);
    }

    let mut total = SweepOutcome::default();

    for (provider_id, mut batch) in by_provider {
        let span = info_span!("provider_sweep", provider_id = %provider_id);

        let outcome = async {
            let mut log = Vec::new();
            let outcome = sweep(&mut batch, &state.config.expiry, now, &mut log);

            for note in &log {
                let Some(appointment) = batch.iter().find(|a| a.id == note.appointment_id) else {
                    continue;
                };

                state.appointment_repo
                    .update_state(&appointment.id, appointment.status, appointment.notification_stage)
                    .await?;
                state.notification_repo.append(note).await?;

                if let Err(e) = state.sms_service.send(&appointment.client_phone, &note.message, note.stage).await {
                    warn!(appointment_id = %appointment.id, "SMS handoff failed: {:?}", e);
                }
            }

            Ok::<SweepOutcome, AppError>(outcome)
        }
            .instrument(span)
            .await?;

        total.expired_count += outcome.expired_count;
        total.warnings_sent += outcome.warnings_sent;
        total.final_warnings_sent += outcome.final_warnings_sent;
    }

    Ok(total)
}
