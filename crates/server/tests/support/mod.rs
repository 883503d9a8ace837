#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use models::{Client, ClientId, ClientInput, Post, Shoot, ShootId, ShootInput, ShootLinks};
use serde_json::Value;
use service::auth::service::{hash_password, OwnerCredentials};
use service::auth::JwtAuthProvider;
use service::integrations::{
    CalendarEvent, CalendarProvisioner, DriveFolder, EventRequest, MockCalendarProvisioner,
    MockDriveProvisioner, ProvisionError, StorageProvisioner,
};
use service::store::SeedData;
use service::{EntityStore, InMemoryStore, ServiceError, ShootFilter};
use tower::Service;
use tower_http::cors::CorsLayer;

use server::routes;
use server::ServerState;

pub const SECRET: &str = "test-secret";
pub const OWNER_EMAIL: &str = "owner@studio.test";
pub const OWNER_PASSWORD: &str = "S3curePass!";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn EntityStore>,
    pub tokens: Arc<JwtAuthProvider>,
}

impl TestApp {
    pub fn token(&self) -> String {
        self.tokens.issue(OWNER_EMAIL).expect("issue token").0
    }

    /// Send a request, returning status and decoded JSON body (`Null` when empty).
    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let resp = self.router.clone().call(req).await?;
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, body))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {}", self.token()))
            .body(Body::empty())?;
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("authorization", format!("Bearer {}", self.token()))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?;
        self.send(req).await
    }
}

// argon2 is slow in debug builds; hash once per test binary
fn owner_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(OWNER_PASSWORD).expect("hash password"))
}

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn build_app_with(
    store: Arc<dyn EntityStore>,
    storage: Arc<dyn StorageProvisioner>,
    calendar: Arc<dyn CalendarProvisioner>,
) -> TestApp {
    let tokens = Arc::new(JwtAuthProvider::new(SECRET, 1));
    let owner = OwnerCredentials {
        email: OWNER_EMAIL.into(),
        password_hash: owner_hash().to_string(),
    };
    let state = ServerState::new(store.clone(), storage, calendar, tokens.clone(), owner);
    TestApp { router: routes::build_router(state, cors()), store, tokens }
}

pub fn build_app() -> TestApp {
    build_app_with(
        Arc::new(InMemoryStore::new()),
        Arc::new(MockDriveProvisioner::new("https://drive.example/folders")),
        Arc::new(MockCalendarProvisioner::new("https://calendar.example/event")),
    )
}

pub async fn build_seeded_app() -> anyhow::Result<TestApp> {
    let store = Arc::new(InMemoryStore::new());
    store.insert_seed(service::seed::demo()).await?;
    Ok(build_app_with(
        store,
        Arc::new(MockDriveProvisioner::new("https://drive.example/folders")),
        Arc::new(MockCalendarProvisioner::new("https://calendar.example/event")),
    ))
}

/// Store whose every call fails as an unexpected backend error.
pub struct BrokenStore;

#[async_trait]
impl EntityStore for BrokenStore {
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn get_client(&self, _id: &ClientId) -> Result<Option<Client>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn create_client(&self, _input: ClientInput) -> Result<Client, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn list_shoots(&self, _filter: &ShootFilter) -> Result<Vec<Shoot>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn get_shoot(&self, _id: &ShootId) -> Result<Option<Shoot>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn create_shoot(&self, _input: ShootInput, _links: ShootLinks) -> Result<Shoot, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn list_posts(&self, _client_id: Option<&ClientId>) -> Result<Vec<Post>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn insert_seed(&self, _seed: SeedData) -> Result<bool, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
}

/// Provisioner that always fails.
pub struct DownProvisioner;

#[async_trait]
impl StorageProvisioner for DownProvisioner {
    async fn create_folder(&self, _client_name: &str, _date: NaiveDate) -> Result<DriveFolder, ProvisionError> {
        Err(ProvisionError::Unavailable("drive down".into()))
    }
}

#[async_trait]
impl CalendarProvisioner for DownProvisioner {
    async fn create_event(&self, _request: EventRequest) -> Result<CalendarEvent, ProvisionError> {
        Err(ProvisionError::Unavailable("calendar down".into()))
    }
}
