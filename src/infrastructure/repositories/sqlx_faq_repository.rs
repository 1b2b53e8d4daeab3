use crate::domain::{
    faq::{
        entity::{FaqAggregate, FaqChanges, FaqEntry},
        repository::FaqRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const FAQ_COLUMNS: &str = "id, city_id, faqs, created_at, updated_at";

#[derive(FromRow)]
struct FaqRow {
    id: Uuid,
    city_id: Uuid,
    faqs: Json<Vec<FaqEntry>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FaqRow> for FaqAggregate {
    fn from(r: FaqRow) -> Self {
        FaqAggregate {
            id: r.id,
            city_id: r.city_id,
            faqs: r.faqs.0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn map_db_error(context: &str, err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            debug!("{}: unique violation: {}", context, db);
            DomainError::Conflict("an FAQ document already exists for this city".to_string())
        }
        _ => {
            error!("{}: {}", context, err);
            DomainError::InfrastructureError(err.to_string())
        }
    }
}

/// PostgreSQL-backed FAQ store. Each aggregate is one row with its entries
/// held in a JSONB array; `city_id` carries a unique index.
pub struct SqlxFaqRepository {
    pub pool: PgPool,
}

impl SqlxFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxFaqRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for SqlxFaqRepository {
    #[instrument(skip(self, faqs), fields(city_id = %city_id, entries = faqs.len()))]
    async fn create(&self, city_id: Uuid, faqs: &[FaqEntry]) -> Result<FaqAggregate, DomainError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "INSERT INTO faqs (id, city_id, faqs) VALUES ($1, $2, $3) RETURNING {}",
            FAQ_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(city_id)
        .bind(Json(faqs))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("insert faq", e))?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<FaqAggregate>, DomainError> {
        let rows = sqlx::query_as::<_, FaqRow>(&format!(
            "SELECT {} FROM faqs ORDER BY created_at, id",
            FAQ_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("list faqs", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FaqAggregate>, DomainError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "SELECT {} FROM faqs WHERE id = $1",
            FAQ_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("find faq by id", e))?;
        Ok(row.map(Into::into))
    }

    async fn find_by_city(&self, city_id: Uuid) -> Result<Vec<FaqAggregate>, DomainError> {
        let rows = sqlx::query_as::<_, FaqRow>(&format!(
            "SELECT {} FROM faqs WHERE city_id = $1 ORDER BY created_at, id",
            FAQ_COLUMNS
        ))
        .bind(city_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("find faqs by city", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, changes), fields(faq_id = %id))]
    async fn update(
        &self,
        id: Uuid,
        changes: &FaqChanges,
    ) -> Result<Option<FaqAggregate>, DomainError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "UPDATE faqs SET \
                city_id = COALESCE($2, city_id), \
                faqs = COALESCE($3, faqs), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            FAQ_COLUMNS
        ))
        .bind(id)
        .bind(changes.city_id)
        .bind(changes.faqs.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("update faq", e))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("delete faq", e))?;
        debug!(faq_id = %id, rows = result.rows_affected(), "Deleted faq");
        Ok(())
    }

    /// Single-statement find-or-create so two merges for the same city can
    /// neither lose entries nor produce a second row.
    #[instrument(skip(self, faqs), fields(city_id = %city_id, entries = faqs.len()))]
    async fn append_for_city(
        &self,
        city_id: Uuid,
        faqs: &[FaqEntry],
    ) -> Result<FaqAggregate, DomainError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "INSERT INTO faqs (id, city_id, faqs) VALUES ($1, $2, $3) \
             ON CONFLICT (city_id) DO UPDATE SET \
                faqs = faqs.faqs || EXCLUDED.faqs, \
                updated_at = NOW() \
             RETURNING {}",
            FAQ_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(city_id)
        .bind(Json(faqs))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("append faqs for city", e))?;
        Ok(row.into())
    }
}
