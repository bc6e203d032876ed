use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateAppointmentRequest;
use crate::domain::models::appointment::{Appointment, AppointmentStatus, NewAppointmentParams};
use crate::domain::services::lifecycle;
use crate::error::AppError;
use std::sync::Arc;
use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{info, warn};

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let provider = state.provider_repo.find_by_id(&provider_id).await?
        .ok_or(AppError::NotFound("Provider not found".into()))?;

    let tz = provider.tz();

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let time = if payload.time.contains('T') {
        let dt = chrono::DateTime::parse_from_rfc3339(&payload.time)
            .map_err(|_| AppError::Validation("Invalid ISO time format".into()))?;
        dt.with_timezone(&tz).time()
    } else {
        NaiveTime::parse_from_str(&payload.time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?
    };

    let scheduled_at = tz.from_local_datetime(&date.and_time(time))
        .single()
        .ok_or(AppError::Validation("Invalid local time (ambiguous or skipped due to DST)".into()))?
        .with_timezone(&Utc);

    let duration_min = payload.duration_min.unwrap_or(60);
    if duration_min <= 0 {
        return Err(AppError::Validation("Duration must be positive".into()));
    }

    if scheduled_at < Utc::now() {
        return Err(AppError::Validation("Cannot book in the past".into()));
    }

    // Out-of-hours requests are allowed on purpose (emergency bookings);
    // they surface on the calendar as occupied blocked slots. Overlap with
    // a live appointment is still rejected.
    let end = scheduled_at + Duration::minutes(duration_min as i64);
    let nearby = state.appointment_repo
        .list_by_range(&provider_id, scheduled_at - Duration::hours(24), end)
        .await?;

    let overlaps = nearby.iter().any(|a| {
        matches!(a.status, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
            && a.scheduled_at < end
            && a.end_time() > scheduled_at
    });

    if overlaps {
        warn!("Booking rejected: {} overlaps an existing appointment", scheduled_at);
        return Err(AppError::Conflict("Requested time overlaps an existing appointment".into()));
    }

    let appointment = Appointment::new(NewAppointmentParams {
        provider_id: provider.id.clone(),
        client_name: payload.client_name,
        client_phone: payload.client_phone,
        service: payload.service,
        scheduled_at,
        duration_min,
    }, &state.config.expiry);

    let created = state.appointment_repo.create(&appointment).await?;

    info!("Appointment requested: {} for provider {}", created.id, provider.id);
    Ok(Json(created))
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.provider_repo.find_by_id(&provider_id).await?
        .ok_or(AppError::NotFound("Provider not found".into()))?;

    let appointments = state.appointment_repo.list_by_provider(&provider_id).await?;
    Ok(Json(appointments))
}

pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path((provider_id, appointment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointment_repo.find_by_id(&provider_id, &appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(appointment))
}

pub async fn confirm_appointment(
    State(state): State<Arc<AppState>>,
    Path((provider_id, appointment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let mut appointment = state.appointment_repo.find_by_id(&provider_id, &appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    lifecycle::confirm(&mut appointment)?;
    state.appointment_repo
        .update_state(&appointment.id, appointment.status, appointment.notification_stage)
        .await?;

    info!("Appointment confirmed: {}", appointment.id);
    Ok(Json(appointment))
}

pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path((provider_id, appointment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let mut appointment = state.appointment_repo.find_by_id(&provider_id, &appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    lifecycle::cancel(&mut appointment)?;
    state.appointment_repo
        .update_state(&appointment.id, appointment.status, appointment.notification_stage)
        .await?;

    info!("Appointment cancelled: {}", appointment.id);
    Ok(Json(appointment))
}
