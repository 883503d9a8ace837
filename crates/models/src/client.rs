use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::ids::ClientId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Linkedin,
    Twitter,
    Tiktok,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Paused,
    Inactive,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub platforms: Vec<Platform>,
    pub brand_colors: Option<String>,
    pub logo_url: Option<String>,
    pub guidelines: Option<String>,
    pub status: ClientStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Every field is optional so that a missing `name`
/// surfaces as a validation error rather than a decode failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub platforms: Vec<Platform>,
    pub brand_colors: Option<String>,
    pub logo_url: Option<String>,
    pub guidelines: Option<String>,
    pub status: Option<ClientStatus>,
    pub notes: Option<String>,
}

impl ClientInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(ModelError::validation("Client name is required")),
        }
    }

    /// Build the stored record; `created_at == updated_at == now`.
    pub fn into_client(self, id: ClientId, now: DateTime<Utc>) -> Result<Client, ModelError> {
        self.validate()?;
        let name = self.name.map(|n| n.trim().to_string()).unwrap_or_default();
        Ok(Client {
            id,
            name,
            email: non_blank(self.email),
            website: non_blank(self.website),
            phone: non_blank(self.phone),
            platforms: dedup_platforms(self.platforms),
            brand_colors: non_blank(self.brand_colors),
            logo_url: non_blank(self.logo_url),
            guidelines: non_blank(self.guidelines),
            status: self.status.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Platform tags form an ordered set: first occurrence wins.
fn dedup_platforms(platforms: Vec<Platform>) -> Vec<Platform> {
    let mut out: Vec<Platform> = Vec::with_capacity(platforms.len());
    for p in platforms {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
