use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// A single question/answer pair. Has no identity of its own and only ever
/// lives inside a [`FaqAggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct FaqEntry {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The one stored document per city holding all of its FAQs.
///
/// # Invariants
/// - at most one aggregate exists per `city_id`
/// - `faqs` keeps insertion order; merges append at the end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FaqAggregate {
    /// Assigned by the store on creation
    pub id: Uuid,

    /// Reference to the external city; no ownership implied
    pub city_id: Uuid,

    pub faqs: Vec<FaqEntry>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field-level changes applied by an update. `None` leaves the stored value
/// untouched; `faqs` replaces the whole list when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqChanges {
    pub city_id: Option<Uuid>,
    pub faqs: Option<Vec<FaqEntry>>,
}

impl FaqChanges {
    pub fn is_empty(&self) -> bool {
        self.city_id.is_none() && self.faqs.is_none()
    }
}
