use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{appointment, calendar, health, manage, notification, pending, provider};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Providers & schedule configuration
        .route("/api/v1/providers", post(provider::create_provider))
        .route("/api/v1/providers/{provider_id}", get(provider::get_provider))
        .route("/api/v1/providers/{provider_id}/schedule", put(provider::update_schedule))

        // Calendar & dashboard views
        .route("/api/v1/providers/{provider_id}/calendar", get(calendar::get_calendar))
        .route("/api/v1/providers/{provider_id}/pending", get(pending::get_pending_confirmations))
        .route("/api/v1/providers/{provider_id}/notifications", get(notification::list_notifications))

        // Booking flow (provider side)
        .route("/api/v1/providers/{provider_id}/appointments", post(appointment::create_appointment).get(appointment::list_appointments))
        .route("/api/v1/providers/{provider_id}/appointments/{appointment_id}", get(appointment::get_appointment))
        .route("/api/v1/providers/{provider_id}/appointments/{appointment_id}/confirm", post(appointment::confirm_appointment))
        .route("/api/v1/providers/{provider_id}/appointments/{appointment_id}/cancel", post(appointment::cancel_appointment))

        // Client appointment management by token
        .route("/api/v1/appointments/manage/{token}", get(manage::get_appointment_by_token))
        .route("/api/v1/appointments/manage/{token}/confirm", post(manage::confirm_by_token))
        .route("/api/v1/appointments/manage/{token}/cancel", post(manage::cancel_by_token))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        provider_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
