use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::CalendarResponse;
use crate::domain::services::slot_grid;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, TimeZone, Utc};

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path(provider_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let provider = state.provider_repo.find_by_id(&provider_id).await?
        .ok_or(AppError::NotFound("Provider not found".into()))?;

    let date_str = params.get("date")
        .ok_or(AppError::Validation("Missing date parameter".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let tz = provider.tz();

    let day_start = tz.from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
        .single()
        .ok_or(AppError::Validation("Invalid local day start (DST)".into()))?
        .with_timezone(&Utc);
    let day_end = tz.from_local_datetime(&date.and_hms_opt(23, 59, 59).unwrap())
        .single()
        .ok_or(AppError::Validation("Invalid local day end (DST)".into()))?
        .with_timezone(&Utc);

    let appointments = state.appointment_repo.list_by_range(&provider_id, day_start, day_end).await?;

    let slots = slot_grid::generate(&appointments, &provider.schedule(), tz, date);

    Ok(Json(CalendarResponse {
        provider_id: provider.id,
        date,
        slots,
    }))
}
