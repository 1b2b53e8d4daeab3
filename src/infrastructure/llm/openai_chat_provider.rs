use super::traits::{ChatCompletionProvider, ProviderError};
use crate::config::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

// --- OpenAI chat completion wire format ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatProvider {
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::ClientBuild)?;
        info!(api_url = %api_url, model = %model, "Initializing OpenAiChatProvider");
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Builds the provider from `OPENAI_*` settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingApiKey` when `OPENAI_API_KEY` was not set.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or(ProviderError::MissingApiKey)?;
        Self::new(
            config.openai_api_url.clone(),
            api_key,
            config.openai_model.clone(),
            Duration::from_secs(config.openai_timeout_seconds),
        )
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAiChatProvider {
    #[instrument(skip(self, system, user), fields(model = %self.model, user_len = user.len()))]
    async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Chat completion request failed: {}", e);
                ProviderError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Chat completion provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(ProviderError::Decode)?;
        debug!(choices = parsed.choices.len(), "Received chat completion");

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
