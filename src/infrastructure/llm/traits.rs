use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No API key configured for the chat completion provider")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Chat completion request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Chat completion provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode chat completion response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Send a system instruction followed by a user message and return the
    /// first choice's message content, if the provider produced any.
    async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, ProviderError>;
}
