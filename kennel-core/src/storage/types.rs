//! Dog records as held by the record store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Store-assigned record identifier. Opaque to the application.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DogId(String);

impl DogId {
    /// Create a new random ID (in-memory store only; hosted stores assign their own)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DogId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DogId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Tables keyed by an integer column hand back numbers; keep them as text.
impl<'de> Deserialize<'de> for DogId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => DogId(s),
            RawId::Signed(n) => DogId(n.to_string()),
            RawId::Unsigned(n) => DogId(n.to_string()),
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogStatus {
    #[default]
    Available,
    Pending,
    Adopted,
}

impl DogStatus {
    pub const ALL: [DogStatus; 3] = [DogStatus::Available, DogStatus::Pending, DogStatus::Adopted];

    pub fn as_str(&self) -> &'static str {
        match self {
            DogStatus::Available => "available",
            DogStatus::Pending => "pending",
            DogStatus::Adopted => "adopted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DogStatus::Available => "Available",
            DogStatus::Pending => "Pending",
            DogStatus::Adopted => "Adopted",
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(DogStatus::Available),
            "pending" => Ok(DogStatus::Pending),
            "adopted" => Ok(DogStatus::Adopted),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// A row of the `dogs` table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    pub id: DogId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub age: Option<String>,
    pub image_url: String,
    pub status: DogStatus,
    #[serde(default)]
    pub description: Option<String>,
}

/// Insert payload; the store assigns `id` and `created_at`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub image_url: String,
    pub status: DogStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewDog {
    pub fn into_record(self, id: DogId, created_at: DateTime<Utc>) -> DogRecord {
        DogRecord {
            id,
            created_at,
            name: self.name,
            breed: self.breed,
            age: self.age,
            image_url: self.image_url,
            status: self.status,
            description: self.description,
        }
    }
}

/// Partial update. Unset fields are left alone; `Some(None)` clears an
/// optional column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DogStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl DogPatch {
    pub fn status(status: DogStatus) -> Self {
        DogPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, record: &mut DogRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(breed) = &self.breed {
            record.breed = breed.clone();
        }
        if let Some(age) = &self.age {
            record.age = age.clone();
        }
        if let Some(image_url) = &self.image_url {
            record.image_url = image_url.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
    }
}
