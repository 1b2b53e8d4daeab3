use crate::domain::faq::entity::FaqEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaqRequest {
    pub city_id: String,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

/// Partial update; omitted fields are left as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFaqRequest {
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub faqs: Option<Vec<FaqEntry>>,
}
