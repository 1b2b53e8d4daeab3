use crate::{
    application::{
        errors::FaqError, generate_faq::use_case::GenerateFaqUseCase,
        manage_faqs::use_case::FaqUseCase,
    },
    domain::{
        city::repository::CityRepository, faq::entity::FaqAggregate, faq::value_objects::CityId,
    },
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// FAQs were generated and merged into the city's aggregate.
    Seeded(FaqAggregate),
    /// The provider produced no content; nothing was written.
    NothingGenerated,
}

/// Looks a city up, generates FAQs for its name and merges them into the
/// city's aggregate.
pub struct SeedCityFaqsUseCase {
    cities: Arc<dyn CityRepository>,
    generator: Arc<GenerateFaqUseCase>,
    faqs: FaqUseCase,
}

impl SeedCityFaqsUseCase {
    pub fn new(
        cities: Arc<dyn CityRepository>,
        generator: Arc<GenerateFaqUseCase>,
        faqs: FaqUseCase,
    ) -> Self {
        Self {
            cities,
            generator,
            faqs,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, city_id: &str) -> Result<SeedOutcome, FaqError> {
        let city_id = CityId::parse(city_id)?;
        let city = self
            .cities
            .find_by_id(city_id.as_uuid())
            .await
            .map_err(|e| {
                error!(city_id = %city_id, "Error fetching city: {}", e);
                FaqError::Fetch(e)
            })?
            .ok_or(FaqError::CityNotFound(city_id.as_uuid()))?;

        let Some(entries) = self.generator.execute(&city.name).await? else {
            warn!(city = %city.name, "No FAQs generated, leaving city untouched");
            return Ok(SeedOutcome::NothingGenerated);
        };

        let aggregate = self
            .faqs
            .add_faqs(&entries, &city_id.to_string())
            .await?;
        info!(city = %city.name, added = entries.len(), "Seeded city FAQs");
        Ok(SeedOutcome::Seeded(aggregate))
    }
}
