use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a store or other collaborator behind a domain trait.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
