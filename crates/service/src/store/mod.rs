//! Entity store: the persistence abstraction for client, shoot and post records.

mod memory;
mod snapshot;

use async_trait::async_trait;
use models::{Client, ClientId, ClientInput, Post, Shoot, ShootId, ShootInput, ShootLinks, ShootStatus};
use serde::Deserialize;

use crate::errors::ServiceError;

pub use memory::InMemoryStore;
pub use snapshot::SnapshotFile;

/// Optional filters for listing shoots.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootFilter {
    pub status: Option<ShootStatus>,
    pub client_id: Option<ClientId>,
}

impl ShootFilter {
    pub fn matches(&self, shoot: &Shoot) -> bool {
        self.status.map_or(true, |s| shoot.status == s)
            && self.client_id.as_ref().map_or(true, |c| &shoot.client_id == c)
    }
}

/// Pre-built records loaded into an empty store (demo data, fixtures).
#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub clients: Vec<Client>,
    pub shoots: Vec<Shoot>,
    pub posts: Vec<Post>,
}

/// Trait abstraction for record storage.
/// Implementations must assign unique ids and persist nothing on a failed create.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// All clients, newest-created first.
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError>;
    async fn get_client(&self, id: &ClientId) -> Result<Option<Client>, ServiceError>;
    async fn create_client(&self, input: ClientInput) -> Result<Client, ServiceError>;

    /// Shoots matching `filter`, ordered by scheduled instant.
    async fn list_shoots(&self, filter: &ShootFilter) -> Result<Vec<Shoot>, ServiceError>;
    async fn get_shoot(&self, id: &ShootId) -> Result<Option<Shoot>, ServiceError>;
    /// Fails with `NotFound` for a dangling client reference and `Validation`
    /// for an empty location or unparseable date/time.
    async fn create_shoot(&self, input: ShootInput, links: ShootLinks) -> Result<Shoot, ServiceError>;

    async fn list_posts(&self, client_id: Option<&ClientId>) -> Result<Vec<Post>, ServiceError>;

    /// Load seed records into an empty store; returns `false` when records already exist.
    async fn insert_seed(&self, seed: SeedData) -> Result<bool, ServiceError>;
}
