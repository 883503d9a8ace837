use std::sync::Arc;

use service::auth::service::OwnerCredentials;
use service::auth::{AuthProvider, AuthService, JwtAuthProvider};
use service::integrations::{CalendarProvisioner, StorageProvisioner};
use service::{EntityStore, SchedulingService};

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn EntityStore>,
    pub scheduler: Arc<SchedulingService>,
    pub auth: Arc<dyn AuthProvider>,
    pub login: Arc<AuthService>,
}

impl ServerState {
    pub fn new(
        store: Arc<dyn EntityStore>,
        storage: Arc<dyn StorageProvisioner>,
        calendar: Arc<dyn CalendarProvisioner>,
        tokens: Arc<JwtAuthProvider>,
        owner: OwnerCredentials,
    ) -> Self {
        let scheduler = Arc::new(SchedulingService::new(store.clone(), storage, calendar));
        let login = Arc::new(AuthService::new(tokens.clone(), owner));
        Self { store, scheduler, auth: tokens, login }
    }
}
