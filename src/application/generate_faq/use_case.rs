use super::{parser::parse_faq_response, prompt::build_system_prompt};
use crate::{
    application::errors::FaqError, domain::faq::entity::FaqEntry,
    infrastructure::llm::traits::ChatCompletionProvider,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Asks the chat completion provider for FAQs about a city and turns the
/// answer into validated entries.
pub struct GenerateFaqUseCase {
    provider: Arc<dyn ChatCompletionProvider>,
    faq_count: usize,
}

impl GenerateFaqUseCase {
    pub fn new(provider: Arc<dyn ChatCompletionProvider>, faq_count: usize) -> Self {
        Self {
            provider,
            faq_count: faq_count.max(1),
        }
    }

    /// Generates FAQs for `city_name`.
    ///
    /// # Returns
    /// - `Ok(Some(entries))` with at most `faq_count` validated entries
    /// - `Ok(None)` when the provider answered without any content
    ///
    /// # Errors
    /// - `FaqError::InvalidInput` for a blank city name
    /// - `FaqError::Generation` when the provider call fails
    /// - `FaqError::Parse` when the content does not match the FAQ schema
    #[instrument(skip(self), fields(faq_count = self.faq_count))]
    pub async fn execute(&self, city_name: &str) -> Result<Option<Vec<FaqEntry>>, FaqError> {
        let city_name = city_name.trim();
        if city_name.is_empty() {
            return Err(FaqError::InvalidInput(
                "city name must not be empty".to_string(),
            ));
        }

        let system_prompt = build_system_prompt(city_name, self.faq_count);
        let content = self
            .provider
            .complete(&system_prompt, city_name)
            .await
            .map_err(|e| {
                error!("FAQ generation request failed: {}", e);
                FaqError::Generation(e)
            })?;

        let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
            warn!("Provider returned no content for {}", city_name);
            return Ok(None);
        };
        debug!(content_len = content.len(), "Received FAQ content");

        let mut entries = parse_faq_response(&content).map_err(|e| {
            warn!("Parsing error: {}", e);
            FaqError::Parse(e)
        })?;

        if entries.len() > self.faq_count {
            warn!(
                received = entries.len(),
                "Provider returned more FAQs than requested, truncating"
            );
            entries.truncate(self.faq_count);
        } else if entries.len() < self.faq_count {
            warn!(
                received = entries.len(),
                "Provider returned fewer FAQs than requested"
            );
        }

        info!(count = entries.len(), "Generated FAQs for {}", city_name);
        Ok(Some(entries))
    }
}
