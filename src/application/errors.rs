use crate::{
    application::generate_faq::parser::FaqParseError,
    domain::{faq::errors::InvalidIdentifier, shared::errors::DomainError},
    infrastructure::llm::traits::ProviderError,
};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the FAQ use cases. Each store-facing variant keeps the
/// underlying [`DomainError`] as its source.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("City {0} not found")]
    CityNotFound(Uuid),
    #[error("Error generating FAQ")]
    Generation(#[source] ProviderError),
    #[error("Generated FAQ could not be parsed: {0}")]
    Parse(#[from] FaqParseError),
    #[error("Error creating FAQ")]
    Create(#[source] DomainError),
    #[error("Error fetching FAQs")]
    Fetch(#[source] DomainError),
    #[error("Error updating FAQ by id")]
    Update(#[source] DomainError),
    #[error("Error deleting FAQ by id")]
    Delete(#[source] DomainError),
    #[error("Error adding or updating FAQs")]
    Merge(#[source] DomainError),
}
