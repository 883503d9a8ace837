use std::sync::Arc;

use models::{Shoot, ShootInput, ShootLinks};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::integrations::{CalendarProvisioner, EventRequest, StorageProvisioner};
use crate::store::EntityStore;

/// Orchestrates shoot creation: client lookup, folder + calendar provisioning,
/// then persistence. Nothing is stored unless both collaborators succeed.
pub struct SchedulingService {
    store: Arc<dyn EntityStore>,
    storage: Arc<dyn StorageProvisioner>,
    calendar: Arc<dyn CalendarProvisioner>,
}

impl SchedulingService {
    pub fn new(
        store: Arc<dyn EntityStore>,
        storage: Arc<dyn StorageProvisioner>,
        calendar: Arc<dyn CalendarProvisioner>,
    ) -> Self {
        Self { store, storage, calendar }
    }

    /// Schedule a shoot for an existing client.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::{ClientInput, ShootInput, ShootStatus};
    /// use service::integrations::{MockCalendarProvisioner, MockDriveProvisioner};
    /// use service::{EntityStore, InMemoryStore, SchedulingService};
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let client = tokio_test::block_on(store.create_client(ClientInput::named("Acme Corp"))).unwrap();
    /// let svc = SchedulingService::new(
    ///     store.clone(),
    ///     Arc::new(MockDriveProvisioner::new("https://drive.example/folders")),
    ///     Arc::new(MockCalendarProvisioner::new("https://calendar.example/event")),
    /// );
    /// let input = ShootInput {
    ///     client_id: client.id.to_string(),
    ///     date: "2024-01-25".into(),
    ///     time: "10:00".into(),
    ///     location: "Downtown Office".into(),
    ///     ..ShootInput::default()
    /// };
    /// let shoot = tokio_test::block_on(svc.schedule_shoot(input)).unwrap();
    /// assert_eq!(shoot.status, ShootStatus::Scheduled);
    /// assert!(shoot.drive_folder_url.is_some());
    /// ```
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn schedule_shoot(&self, input: ShootInput) -> Result<Shoot, ServiceError> {
        let client_id = input.client_id()?;
        let client = self
            .store
            .get_client(&client_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("client", &client_id))?;
        let scheduled_at = input.validate()?;

        let folder = self
            .storage
            .create_folder(&client.name, scheduled_at.date())
            .await
            .map_err(|e| {
                warn!(error = %e, "storage folder provisioning failed");
                ServiceError::provisioning("storage folder", e)
            })?;

        let request = EventRequest {
            title: event_title(&client.name),
            start: scheduled_at,
            location: input.location.trim().to_string(),
            description: event_description(&input.objectives, &input.equipment, &folder.folder_url),
        };
        let event = self.calendar.create_event(request).await.map_err(|e| {
            warn!(error = %e, folder_id = %folder.folder_id, "calendar event provisioning failed");
            ServiceError::provisioning("calendar event", e)
        })?;

        let links = ShootLinks {
            drive_folder_id: Some(folder.folder_id),
            drive_folder_url: Some(folder.folder_url),
            calendar_event_id: Some(event.event_id),
            calendar_event_url: Some(event.event_url),
        };
        let shoot = self.store.create_shoot(input, links).await?;
        info!(shoot_id = %shoot.id, scheduled_at = %shoot.scheduled_at, "shoot scheduled");
        Ok(shoot)
    }
}

pub fn event_title(client_name: &str) -> String {
    format!("Photo Shoot - {client_name}")
}

pub fn event_description(objectives: &str, equipment: &str, folder_url: &str) -> String {
    format!("{objectives}\n\nEquipment: {equipment}\n\nDrive Folder: {folder_url}")
}
