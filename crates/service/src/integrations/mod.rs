//! External collaborators that provision resources for a shoot.
//!
//! The dashboard only needs two calls: a storage folder per shoot and a calendar
//! event. Both are traits so a real Drive/Calendar client can replace the mocks
//! without touching the scheduling logic.

mod mock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

pub use mock::{MockCalendarProvisioner, MockDriveProvisioner};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFolder {
    pub folder_id: String,
    pub folder_url: String,
    pub folder_name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub event_id: String,
    pub event_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRequest {
    pub title: String,
    pub start: NaiveDateTime,
    pub location: String,
    pub description: String,
}

#[async_trait]
pub trait StorageProvisioner: Send + Sync {
    async fn create_folder(&self, client_name: &str, date: NaiveDate) -> Result<DriveFolder, ProvisionError>;
}

#[async_trait]
pub trait CalendarProvisioner: Send + Sync {
    async fn create_event(&self, request: EventRequest) -> Result<CalendarEvent, ProvisionError>;
}

/// `<YYYY-MM-DD>_<client name, whitespace runs as "_">_Shoot`
pub fn folder_name_for(date: NaiveDate, client_name: &str) -> String {
    let mut name = String::with_capacity(client_name.len());
    let mut in_space = false;
    for ch in client_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    format!("{}_{}_Shoot", date.format("%Y-%m-%d"), name)
}
