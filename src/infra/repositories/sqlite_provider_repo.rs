use crate::domain::{models::provider::Provider, ports::ProviderRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProviderRepo {
    pool: SqlitePool,
}

impl SqliteProviderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProviderRepository for SqliteProviderRepo {
    async fn create(&self, provider: &Provider) -> Result<Provider, AppError> {
        sqlx::query_as::<_, Provider>(
            "INSERT INTO providers (id, name, phone, timezone, schedule_json, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&provider.id).bind(&provider.name).bind(&provider.phone)
            .bind(&provider.timezone).bind(&provider.schedule_json).bind(provider.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Provider>, AppError> {
        sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_schedule(&self, id: &str, schedule_json: &str) -> Result<Provider, AppError> {
        sqlx::query_as::<_, Provider>(
            "UPDATE providers SET schedule_json = ? WHERE id = ? RETURNING *"
        )
            .bind(schedule_json).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Provider not found".into()))
    }
}
