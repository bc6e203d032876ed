use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.provider_repo.find_by_id(&provider_id).await?
        .ok_or(AppError::NotFound("Provider not found".into()))?;

    let notifications = state.notification_repo.list_by_provider(&provider_id).await?;
    Ok(Json(notifications))
}
