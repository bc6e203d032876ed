use crate::domain::models::notification::ExpiryStage;
use crate::domain::ports::SmsService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Client for the external SMS gateway. Delivery guarantees live on the
/// other side of this HTTP call; callers treat failures as best-effort.
pub struct HttpSmsService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpSmsService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct SmsPayload {
    to_number: String,
    body: String,
    stage: ExpiryStage,
}

#[async_trait]
impl SmsService for HttpSmsService {
    async fn send(&self, recipient: &str, message: &str, stage: ExpiryStage) -> Result<(), AppError> {
        let payload = SmsPayload {
            to_number: recipient.to_string(),
            body: message.to_string(),
            stage,
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("SMS service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("SMS service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        Ok(())
    }
}
