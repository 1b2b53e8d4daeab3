use crate::domain::{
    city::{entity::City, repository::CityRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<City>, DomainError> {
        sqlx::query_as::<_, City>(
            "SELECT id, name, country_code, created_at FROM cities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        sqlx::query_as::<_, City>(
            "SELECT id, name, country_code, created_at FROM cities ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
