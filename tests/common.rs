use appointment_backend::{
    api::router::create_router,
    config::Config,
    domain::models::notification::ExpiryStage,
    domain::ports::SmsService,
    domain::services::lifecycle::ExpiryConfig,
    error::AppError,
    infra::repositories::{
        sqlite_appointment_repo::SqliteAppointmentRepo,
        sqlite_notification_repo::SqliteNotificationRepo,
        sqlite_provider_repo::SqliteProviderRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::Request,
    Router,
};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct SentSms {
    pub recipient: String,
    pub message: String,
    pub stage: ExpiryStage,
}

pub struct MockSmsService {
    pub sent: Arc<Mutex<Vec<SentSms>>>,
    pub fail: bool,
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send(&self, recipient: &str, message: &str, stage: ExpiryStage) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::InternalWithMsg("SMS gateway unavailable".into()));
        }
        self.sent.lock().unwrap().push(SentSms {
            recipient: recipient.to_string(),
            message: message.to_string(),
            stage,
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub sms_log: Arc<Mutex<Vec<SentSms>>>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_sms_failures(false).await
    }

    pub async fn with_sms_failures(fail: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let sms_log = Arc::new(Mutex::new(Vec::new()));

        let config = Config {
            database_url: db_url,
            port: 0,
            sms_service_url: "http://localhost:9/unused".to_string(),
            sms_service_token: "test-token".to_string(),
            expiry: ExpiryConfig::default(),
        };

        let state = Arc::new(AppState {
            config,
            provider_repo: Arc::new(SqliteProviderRepo::new(pool.clone())),
            appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            notification_repo: Arc::new(SqliteNotificationRepo::new(pool.clone())),
            sms_service: Arc::new(MockSmsService { sent: sms_log.clone(), fail }),
        });

        let router = create_router(state.clone());

        Self { router, state, pool, db_filename, sms_log }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())).unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn put_json(&self, uri: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("PUT").uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())).unwrap()
        ).await.unwrap()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Weekly schedule payload with Monday 09:00-17:00 enabled and every other
/// day left out (closed).
#[allow(dead_code)]
pub fn monday_only_schedule() -> Value {
    json!({
        "monday": { "enabled": true, "start_hour": 9, "end_hour": 17 }
    })
}

#[allow(dead_code)]
pub async fn create_provider(app: &TestApp, schedule: Value) -> String {
    let res = app.post_json("/api/v1/providers", json!({
        "name": "Mobile Styles by Dana",
        "phone": "+15550009999",
        "timezone": "UTC",
        "schedule": schedule
    })).await;
    let body = parse_body(res).await;
    body["id"].as_str().expect("provider id missing").to_string()
}

/// First date strictly after today (UTC) falling on `target`, so booked
/// times are always in the future.
#[allow(dead_code)]
pub fn next_weekday(target: Weekday) -> NaiveDate {
    let mut date = Utc::now().date_naive() + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date
}

#[allow(dead_code)]
pub async fn request_appointment(app: &TestApp, provider_id: &str, date: NaiveDate, time: &str) -> Value {
    let res = app.post_json(
        &format!("/api/v1/providers/{}/appointments", provider_id),
        json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "time": time,
            "client_name": "Jess",
            "client_phone": "+15550001111",
            "service": "Haircut"
        }),
    ).await;
    parse_body(res).await
}
