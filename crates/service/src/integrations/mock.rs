use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use super::{
    folder_name_for, CalendarEvent, CalendarProvisioner, DriveFolder, EventRequest, ProvisionError,
    StorageProvisioner,
};

/// Stand-in for the Drive API: derives the folder name and returns a generated id.
#[derive(Clone, Debug)]
pub struct MockDriveProvisioner {
    base_url: String,
}

impl MockDriveProvisioner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait]
impl StorageProvisioner for MockDriveProvisioner {
    async fn create_folder(&self, client_name: &str, date: NaiveDate) -> Result<DriveFolder, ProvisionError> {
        let folder_name = folder_name_for(date, client_name);
        let folder_id = Uuid::new_v4().simple().to_string();
        let folder_url = format!("{}/{}", self.base_url.trim_end_matches('/'), folder_id);
        info!(%folder_name, %folder_id, "drive folder created (mock)");
        Ok(DriveFolder { folder_id, folder_url, folder_name })
    }
}

/// Stand-in for the Calendar API.
#[derive(Clone, Debug)]
pub struct MockCalendarProvisioner {
    base_url: String,
}

impl MockCalendarProvisioner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait]
impl CalendarProvisioner for MockCalendarProvisioner {
    async fn create_event(&self, request: EventRequest) -> Result<CalendarEvent, ProvisionError> {
        if request.title.trim().is_empty() {
            return Err(ProvisionError::Rejected("event title is empty".into()));
        }
        let event_id = Uuid::new_v4().simple().to_string();
        let event_url = format!("{}?eid={}", self.base_url.trim_end_matches('/'), event_id);
        info!(title = %request.title, start = %request.start, location = %request.location, %event_id, "calendar event created (mock)");
        Ok(CalendarEvent { event_id, event_url })
    }
}
