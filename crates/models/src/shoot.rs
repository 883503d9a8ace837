use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::non_blank;
use crate::errors::ModelError;
use crate::ids::{ClientId, ShootId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShootStatus {
    Scheduled,
    Complete,
    Cancelled,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    pub id: ShootId,
    pub client_id: ClientId,
    /// Local wall-clock instant of the shoot, e.g. `2024-01-25T10:00:00`.
    pub scheduled_at: NaiveDateTime,
    pub location: String,
    pub expected_content_count: Option<u32>,
    #[serde(default)]
    pub objectives: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub notes: String,
    pub status: ShootStatus,
    pub drive_folder_id: Option<String>,
    pub drive_folder_url: Option<String>,
    pub calendar_event_id: Option<String>,
    pub calendar_event_url: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
}

impl Shoot {
    /// `completed_at` is present iff the shoot is complete.
    pub fn check_completion(&self) -> Result<(), ModelError> {
        match (self.status, self.completed_at.is_some()) {
            (ShootStatus::Complete, true) => Ok(()),
            (ShootStatus::Complete, false) => {
                Err(ModelError::validation("completed shoot requires completedAt"))
            }
            (_, true) => Err(ModelError::validation("completedAt is only valid on complete shoots")),
            (_, false) => Ok(()),
        }
    }
}

/// References to resources provisioned for a shoot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShootLinks {
    pub drive_folder_id: Option<String>,
    pub drive_folder_url: Option<String>,
    pub calendar_event_id: Option<String>,
    pub calendar_event_url: Option<String>,
}

/// Schedule payload as submitted from the shoot form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShootInput {
    pub client_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    pub location: String,
    pub expected_content_count: Option<u32>,
    pub objectives: String,
    pub equipment: String,
    pub notes: String,
}

impl ShootInput {
    pub fn client_id(&self) -> Result<ClientId, ModelError> {
        let raw = self.client_id.trim();
        if raw.is_empty() {
            return Err(ModelError::validation("clientId is required"));
        }
        Ok(ClientId::from(raw))
    }

    /// Combine `date` and `time` into a single instant.
    pub fn scheduled_at(&self) -> Result<NaiveDateTime, ModelError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ModelError::validation(format!("invalid date '{}'", self.date)))?;
        let raw_time = self.time.trim();
        let time = NaiveTime::parse_from_str(raw_time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw_time, "%H:%M:%S"))
            .map_err(|_| ModelError::validation(format!("invalid time '{}'", self.time)))?;
        Ok(date.and_time(time))
    }

    /// Field checks other than client resolution; returns the combined instant.
    pub fn validate(&self) -> Result<NaiveDateTime, ModelError> {
        if self.location.trim().is_empty() {
            return Err(ModelError::validation("location is required"));
        }
        if self.expected_content_count == Some(0) {
            return Err(ModelError::validation("expectedContentCount must be at least 1"));
        }
        self.scheduled_at()
    }

    pub fn into_shoot(
        self,
        id: ShootId,
        links: ShootLinks,
        now: DateTime<Utc>,
    ) -> Result<Shoot, ModelError> {
        let client_id = self.client_id()?;
        let scheduled_at = self.validate()?;
        Ok(Shoot {
            id,
            client_id,
            scheduled_at,
            location: self.location.trim().to_string(),
            expected_content_count: self.expected_content_count,
            objectives: self.objectives,
            equipment: self.equipment,
            notes: self.notes,
            status: ShootStatus::Scheduled,
            drive_folder_id: non_blank(links.drive_folder_id),
            drive_folder_url: non_blank(links.drive_folder_url),
            calendar_event_id: non_blank(links.calendar_event_id),
            calendar_event_url: non_blank(links.calendar_event_url),
            completed_at: None,
            created_at: now,
        })
    }
}
