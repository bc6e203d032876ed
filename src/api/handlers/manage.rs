use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::services::lifecycle;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

// Client-side actions on a single appointment, addressed by the manage
// token handed out at booking time.

pub async fn get_appointment_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointment_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(appointment))
}

pub async fn confirm_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut appointment = state.appointment_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    lifecycle::confirm(&mut appointment)?;
    state.appointment_repo
        .update_state(&appointment.id, appointment.status, appointment.notification_stage)
        .await?;

    info!("Appointment confirmed by client: {}", appointment.id);
    Ok(Json(appointment))
}

pub async fn cancel_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut appointment = state.appointment_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    lifecycle::cancel(&mut appointment)?;
    state.appointment_repo
        .update_state(&appointment.id, appointment.status, appointment.notification_stage)
        .await?;

    info!("Appointment cancelled by client: {}", appointment.id);
    Ok(Json(appointment))
}
