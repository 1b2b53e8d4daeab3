use thiserror::Error;

/// A raw identifier that could not be turned into the store's id type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} identifier: {value:?}")]
pub struct InvalidIdentifier {
    pub kind: &'static str,
    pub value: String,
}
