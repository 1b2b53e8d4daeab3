use super::entity::{FaqAggregate, FaqChanges, FaqEntry};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Inserts a new aggregate. Fails with `DomainError::Conflict` when the
    /// city already has one.
    async fn create(&self, city_id: Uuid, faqs: &[FaqEntry]) -> Result<FaqAggregate, DomainError>;
    async fn find_all(&self) -> Result<Vec<FaqAggregate>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FaqAggregate>, DomainError>;
    async fn find_by_city(&self, city_id: Uuid) -> Result<Vec<FaqAggregate>, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        changes: &FaqChanges,
    ) -> Result<Option<FaqAggregate>, DomainError>;
    /// Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    /// Appends `faqs` to the city's aggregate, creating it when absent. Must be
    /// atomic with respect to other calls for the same city.
    async fn append_for_city(
        &self,
        city_id: Uuid,
        faqs: &[FaqEntry],
    ) -> Result<FaqAggregate, DomainError>;
}
