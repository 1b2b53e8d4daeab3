use super::dto::{CreateFaqRequest, UpdateFaqRequest};
use crate::{
    application::errors::FaqError,
    domain::faq::{
        entity::{FaqAggregate, FaqChanges, FaqEntry},
        repository::FaqRepository,
        value_objects::{CityId, FaqId},
    },
};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// CRUD and merge operations over per-city FAQ aggregates.
///
/// Identifiers arrive as raw strings and are parsed before the store is
/// touched, so a malformed id always surfaces as
/// [`FaqError::InvalidIdentifier`]. Not-found is reported as `None` (or a
/// no-op for delete), never as an error.
#[derive(Clone)]
pub struct FaqUseCase {
    repository: Arc<dyn FaqRepository>,
}

impl FaqUseCase {
    pub fn new(repository: Arc<dyn FaqRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(city_id = %request.city_id, entries = request.faqs.len()))]
    pub async fn create_faq(&self, request: CreateFaqRequest) -> Result<FaqAggregate, FaqError> {
        let city_id = CityId::parse(&request.city_id)?;
        self.repository
            .create(city_id.as_uuid(), &request.faqs)
            .await
            .map_err(|e| {
                error!("Error creating FAQ: {}", e);
                FaqError::Create(e)
            })
    }

    pub async fn get_all_faqs(&self) -> Result<Vec<FaqAggregate>, FaqError> {
        self.repository.find_all().await.map_err(|e| {
            error!("Error fetching FAQs: {}", e);
            FaqError::Fetch(e)
        })
    }

    pub async fn get_faq_by_id(&self, id: &str) -> Result<Option<FaqAggregate>, FaqError> {
        let id = FaqId::parse(id)?;
        self.repository
            .find_by_id(id.as_uuid())
            .await
            .map_err(|e| {
                error!(faq_id = %id, "Error fetching FAQ by id: {}", e);
                FaqError::Fetch(e)
            })
    }

    pub async fn get_faqs_by_city_id(&self, city_id: &str) -> Result<Vec<FaqAggregate>, FaqError> {
        let city_id = CityId::parse(city_id)?;
        self.repository
            .find_by_city(city_id.as_uuid())
            .await
            .map_err(|e| {
                error!(city_id = %city_id, "Error fetching FAQs by city id: {}", e);
                FaqError::Fetch(e)
            })
    }

    /// Applies the supplied fields and returns the post-update document, or
    /// `None` when no aggregate has this id.
    #[instrument(skip(self, request))]
    pub async fn update_faq_by_id(
        &self,
        id: &str,
        request: UpdateFaqRequest,
    ) -> Result<Option<FaqAggregate>, FaqError> {
        let id = FaqId::parse(id)?;
        let changes = FaqChanges {
            city_id: request
                .city_id
                .as_deref()
                .map(CityId::parse)
                .transpose()?
                .map(|c| c.as_uuid()),
            faqs: request.faqs,
        };

        let result = if changes.is_empty() {
            self.repository.find_by_id(id.as_uuid()).await
        } else {
            self.repository.update(id.as_uuid(), &changes).await
        };

        result.map_err(|e| {
            error!(faq_id = %id, "Error updating FAQ by id: {}", e);
            FaqError::Update(e)
        })
    }

    pub async fn delete_faq_by_id(&self, id: &str) -> Result<(), FaqError> {
        let id = FaqId::parse(id)?;
        self.repository.delete(id.as_uuid()).await.map_err(|e| {
            error!(faq_id = %id, "Error deleting FAQ by id: {}", e);
            FaqError::Delete(e)
        })
    }

    /// Appends `faqs` to the city's aggregate, creating the aggregate when the
    /// city has none yet, and returns the resulting document either way.
    #[instrument(skip(self, faqs), fields(entries = faqs.len()))]
    pub async fn add_faqs(&self, faqs: &[FaqEntry], city_id: &str) -> Result<FaqAggregate, FaqError> {
        let city_id = CityId::parse(city_id)?;
        let aggregate = self
            .repository
            .append_for_city(city_id.as_uuid(), faqs)
            .await
            .map_err(|e| {
                error!(city_id = %city_id, "Error adding or updating FAQs: {}", e);
                FaqError::Merge(e)
            })?;

        info!(
            faq_id = %aggregate.id,
            city_id = %city_id,
            total = aggregate.faqs.len(),
            "Merged FAQs into city aggregate"
        );
        Ok(aggregate)
    }
}
