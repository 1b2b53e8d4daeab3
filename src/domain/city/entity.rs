use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A city owned by the wider platform. FAQs only ever reference it by id and
/// read its name when generating content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
}
