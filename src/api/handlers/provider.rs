use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateProviderRequest, UpdateScheduleRequest};
use crate::domain::models::provider::Provider;
use crate::error::AppError;
use std::sync::Arc;
use chrono_tz::Tz;
use tracing::info;

pub async fn create_provider(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProviderRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.timezone.parse::<Tz>().is_err() {
        return Err(AppError::Validation("Invalid timezone".into()));
    }

    let provider = Provider::new(payload.name, payload.phone, payload.timezone, &payload.schedule);
    let created = state.provider_repo.create(&provider).await?;

    info!("Provider created: {}", created.id);
    Ok(Json(created))
}

pub async fn get_provider(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider = state.provider_repo.find_by_id(&provider_id).await?
        .ok_or(AppError::NotFound("Provider not found".into()))?;
    Ok(Json(provider))
}

pub async fn update_schedule(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let schedule_json = serde_json::to_string(&payload.schedule)
        .map_err(|_| AppError::Validation("Invalid schedule".into()))?;

    let updated = state.provider_repo.update_schedule(&provider_id, &schedule_json).await?;

    info!("Schedule updated for provider: {}", updated.id);
    Ok(Json(updated))
}
