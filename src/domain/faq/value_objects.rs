use super::errors::InvalidIdentifier;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

fn parse_uuid(kind: &'static str, raw: &str) -> Result<Uuid, InvalidIdentifier> {
    Uuid::parse_str(raw.trim()).map_err(|_| InvalidIdentifier {
        kind,
        value: raw.to_string(),
    })
}

/// Identifier of a stored FAQ aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(Uuid);

impl FaqId {
    pub fn parse(raw: &str) -> Result<Self, InvalidIdentifier> {
        parse_uuid("faq", raw).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Reference to an external city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(Uuid);

impl CityId {
    pub fn parse(raw: &str) -> Result<Self, InvalidIdentifier> {
        parse_uuid("city", raw).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for FaqId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<Uuid> for CityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for FaqId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for CityId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
