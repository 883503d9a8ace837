use async_trait::async_trait;
use chrono::Utc;
use models::{Client, ClientId, ClientInput, Post, Shoot, ShootId, ShootInput, ShootLinks};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::{EntityStore, SeedData, ShootFilter, SnapshotFile};
use crate::errors::ServiceError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Tables {
    next_client: u64,
    next_shoot: u64,
    clients: Vec<Client>,
    shoots: Vec<Shoot>,
    #[serde(default)]
    posts: Vec<Post>,
}

impl Tables {
    fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.shoots.is_empty() && self.posts.is_empty()
    }

    fn next_client_id(&mut self) -> ClientId {
        loop {
            self.next_client += 1;
            let id = ClientId::new(self.next_client.to_string());
            if !self.clients.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    fn next_shoot_id(&mut self) -> ShootId {
        loop {
            self.next_shoot += 1;
            let id = ShootId::new(self.next_shoot.to_string());
            if !self.shoots.iter().any(|s| s.id == id) {
                return id;
            }
        }
    }

    /// Move counters past any numeric ids already present.
    fn bump_counters(&mut self) {
        let max_client = self.clients.iter().filter_map(|c| c.id.as_str().parse::<u64>().ok()).max();
        let max_shoot = self.shoots.iter().filter_map(|s| s.id.as_str().parse::<u64>().ok()).max();
        self.next_client = self.next_client.max(max_client.unwrap_or(0));
        self.next_shoot = self.next_shoot.max(max_shoot.unwrap_or(0));
    }

    fn has_client(&self, id: &ClientId) -> bool {
        self.clients.iter().any(|c| &c.id == id)
    }
}

/// In-process entity store guarded by a single `RwLock`.
///
/// Ids come from per-entity monotonic counters taken under the write lock.
/// With a snapshot configured every successful write is flushed to disk before
/// the lock is released; a failed flush rolls the write back.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    snapshot: Option<SnapshotFile>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store, loading `snapshot` if it exists.
    pub async fn open(snapshot: Option<SnapshotFile>) -> Result<Self, ServiceError> {
        let mut tables = match &snapshot {
            Some(file) => file.load::<Tables>().await?.unwrap_or_default(),
            None => Tables::default(),
        };
        tables.bump_counters();
        if let Some(file) = &snapshot {
            info!(
                path = %file.path().display(),
                clients = tables.clients.len(),
                shoots = tables.shoots.len(),
                "entity store snapshot loaded"
            );
        }
        Ok(Self { tables: RwLock::new(tables), snapshot })
    }

    async fn persist(&self, tables: &Tables) -> Result<(), ServiceError> {
        match &self.snapshot {
            Some(file) => file.save(tables).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        let tables = self.tables.read().await;
        let mut clients: Vec<Client> = tables.clients.iter().rev().cloned().collect();
        // stable sort: equal timestamps keep newest insertion first
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clients)
    }

    async fn get_client(&self, id: &ClientId) -> Result<Option<Client>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.iter().find(|c| &c.id == id).cloned())
    }

    #[instrument(skip(self, input))]
    async fn create_client(&self, input: ClientInput) -> Result<Client, ServiceError> {
        input.validate()?;
        let mut tables = self.tables.write().await;
        let id = tables.next_client_id();
        let client = input.into_client(id, Utc::now())?;
        tables.clients.push(client.clone());
        if let Err(e) = self.persist(&tables).await {
            tables.clients.pop();
            return Err(e);
        }
        debug!(client_id = %client.id, "client stored");
        Ok(client)
    }

    async fn list_shoots(&self, filter: &ShootFilter) -> Result<Vec<Shoot>, ServiceError> {
        let tables = self.tables.read().await;
        let mut shoots: Vec<Shoot> = tables.shoots.iter().filter(|s| filter.matches(s)).cloned().collect();
        shoots.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(shoots)
    }

    async fn get_shoot(&self, id: &ShootId) -> Result<Option<Shoot>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables.shoots.iter().find(|s| &s.id == id).cloned())
    }

    #[instrument(skip(self, input, links), fields(client_id = %input.client_id))]
    async fn create_shoot(&self, input: ShootInput, links: ShootLinks) -> Result<Shoot, ServiceError> {
        let client_id = input.client_id()?;
        let mut tables = self.tables.write().await;
        if !tables.has_client(&client_id) {
            return Err(ServiceError::not_found("client", &client_id));
        }
        input.validate()?;
        let id = tables.next_shoot_id();
        let shoot = input.into_shoot(id, links, Utc::now())?;
        tables.shoots.push(shoot.clone());
        if let Err(e) = self.persist(&tables).await {
            tables.shoots.pop();
            return Err(e);
        }
        debug!(shoot_id = %shoot.id, "shoot stored");
        Ok(shoot)
    }

    async fn list_posts(&self, client_id: Option<&ClientId>) -> Result<Vec<Post>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .filter(|p| client_id.map_or(true, |c| &p.client_id == c))
            .cloned()
            .collect())
    }

    async fn insert_seed(&self, seed: SeedData) -> Result<bool, ServiceError> {
        let mut tables = self.tables.write().await;
        if !tables.is_empty() {
            return Ok(false);
        }
        validate_seed(&seed)?;

        let previous = std::mem::take(&mut *tables);
        tables.clients = seed.clients;
        tables.shoots = seed.shoots;
        tables.posts = seed.posts;
        tables.next_client = previous.next_client;
        tables.next_shoot = previous.next_shoot;
        tables.bump_counters();
        if let Err(e) = self.persist(&tables).await {
            *tables = previous;
            return Err(e);
        }
        info!(clients = tables.clients.len(), shoots = tables.shoots.len(), "seed data loaded");
        Ok(true)
    }
}

fn validate_seed(seed: &SeedData) -> Result<(), ServiceError> {
    for (i, c) in seed.clients.iter().enumerate() {
        if seed.clients[..i].iter().any(|other| other.id == c.id) {
            return Err(ServiceError::Validation(format!("duplicate client id '{}'", c.id)));
        }
    }
    for (i, s) in seed.shoots.iter().enumerate() {
        if seed.shoots[..i].iter().any(|other| other.id == s.id) {
            return Err(ServiceError::Validation(format!("duplicate shoot id '{}'", s.id)));
        }
        if !seed.clients.iter().any(|c| c.id == s.client_id) {
            return Err(ServiceError::not_found("client", &s.client_id));
        }
        s.check_completion()?;
    }
    for p in &seed.posts {
        if !seed.clients.iter().any(|c| c.id == p.client_id) {
            return Err(ServiceError::not_found("client", &p.client_id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ClientStatus, ShootStatus};
    use std::collections::HashSet;

    fn shoot_input(client_id: &str) -> ShootInput {
        ShootInput {
            client_id: client_id.into(),
            date: "2024-01-25".into(),
            time: "10:00".into(),
            location: "Downtown Office".into(),
            ..ShootInput::default()
        }
    }

    #[tokio::test]
    async fn create_client_assigns_unique_ids() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let mut ids = HashSet::new();
        for i in 0..25 {
            let c = store.create_client(ClientInput::named(format!("Client {i}"))).await?;
            assert!(!c.id.as_str().is_empty());
            assert_eq!(c.created_at, c.updated_at);
            assert!(ids.insert(c.id.clone()), "duplicate id {}", c.id);
        }
        Ok(())
    }

    #[tokio::test]
    async fn acme_corp_defaults() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let c = store.create_client(ClientInput::named("Acme Corp")).await?;
        assert_eq!(c.id.as_str(), "1");
        assert_eq!(c.name, "Acme Corp");
        assert_eq!(c.status, ClientStatus::Active);
        assert_eq!(c.created_at, c.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_leaves_store_unchanged() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        store.create_client(ClientInput::named("Keep")).await?;
        for bad in [ClientInput::default(), ClientInput::named(""), ClientInput::named("  ")] {
            assert!(matches!(store.create_client(bad).await, Err(ServiceError::Validation(_))));
        }
        let clients = store.list_clients().await?;
        assert_eq!(clients.len(), 1);
        // counter untouched by failed creates
        assert_eq!(store.create_client(ClientInput::named("Next")).await?.id.as_str(), "2");
        Ok(())
    }

    #[tokio::test]
    async fn list_clients_newest_first() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        store.insert_seed(crate::seed::demo()).await?;
        for name in ["A", "B", "C"] {
            store.create_client(ClientInput::named(name)).await?;
        }
        let clients = store.list_clients().await?;
        assert!(clients.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        let names: Vec<&str> = clients.iter().take(3).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
        Ok(())
    }

    #[tokio::test]
    async fn create_shoot_requires_existing_client() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let res = store.create_shoot(shoot_input("42"), ShootLinks::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert!(store.list_shoots(&ShootFilter::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_shoot_validates_fields() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let client = store.create_client(ClientInput::named("Acme Corp")).await?;
        let no_location = ShootInput { location: String::new(), ..shoot_input(client.id.as_str()) };
        assert!(matches!(
            store.create_shoot(no_location, ShootLinks::default()).await,
            Err(ServiceError::Validation(_))
        ));
        let bad_time = ShootInput { time: "noon".into(), ..shoot_input(client.id.as_str()) };
        assert!(matches!(
            store.create_shoot(bad_time, ShootLinks::default()).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(store.list_shoots(&ShootFilter::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_shoots_filters_and_orders() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        store.insert_seed(crate::seed::demo()).await?;

        let all = store.list_shoots(&ShootFilter::default()).await?;
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));

        let complete = store
            .list_shoots(&ShootFilter { status: Some(ShootStatus::Complete), client_id: None })
            .await?;
        assert_eq!(complete.len(), 1);
        assert!(complete[0].completed_at.is_some());

        let acme = store
            .list_shoots(&ShootFilter { status: None, client_id: Some(ClientId::from("1")) })
            .await?;
        assert!(acme.iter().all(|s| s.client_id.as_str() == "1"));
        assert_eq!(acme.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn seed_only_loads_into_empty_store() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        assert!(store.insert_seed(crate::seed::demo()).await?);
        assert!(!store.insert_seed(crate::seed::demo()).await?);
        // counters continue after seeded ids
        let c = store.create_client(ClientInput::named("New")).await?;
        assert_eq!(c.id.as_str(), "4");
        let s = store.create_shoot(shoot_input("1"), ShootLinks::default()).await?;
        assert_eq!(s.id.as_str(), "4");
        Ok(())
    }

    #[tokio::test]
    async fn seed_with_dangling_reference_is_rejected() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let mut seed = crate::seed::demo();
        seed.clients.retain(|c| c.id.as_str() != "1");
        assert!(matches!(store.insert_seed(seed).await, Err(ServiceError::NotFound(_))));
        assert!(store.list_clients().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn snapshot_survives_reopen() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir()
            .join(format!("entity_store_{}", uuid::Uuid::new_v4()))
            .join("store.json");
        let store = InMemoryStore::open(Some(SnapshotFile::new(&path))).await?;
        let client = store.create_client(ClientInput::named("Acme Corp")).await?;
        store.create_shoot(shoot_input(client.id.as_str()), ShootLinks::default()).await?;
        drop(store);

        let reopened = InMemoryStore::open(Some(SnapshotFile::new(&path))).await?;
        let clients = reopened.list_clients().await?;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Acme Corp");
        assert_eq!(reopened.list_shoots(&ShootFilter::default()).await?.len(), 1);
        let next = reopened.create_client(ClientInput::named("Tech Startup")).await?;
        assert_eq!(next.id.as_str(), "2");

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_snapshot_write_rolls_back() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("entity_store_{}", uuid::Uuid::new_v4()));
        let path = dir.join("store.json");
        let store = InMemoryStore::open(Some(SnapshotFile::new(&path))).await?;
        let acme = store.create_client(ClientInput::named("Acme Corp")).await?;

        // snapshot directory replaced by a plain file: every later save fails
        tokio::fs::remove_dir_all(&dir).await?;
        tokio::fs::write(&dir, b"not a directory").await?;

        let err = store.create_client(ClientInput::named("Tech Startup")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)), "{err:?}");
        let clients = store.list_clients().await?;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, acme.id);

        let err = store
            .create_shoot(shoot_input(acme.id.as_str()), ShootLinks::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)), "{err:?}");
        assert!(store.list_shoots(&ShootFilter::default()).await?.is_empty());

        let _ = tokio::fs::remove_file(&dir).await;
        Ok(())
    }
}
