use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::auth::service::OwnerCredentials;
use service::auth::JwtAuthProvider;
use service::integrations::{MockCalendarProvisioner, MockDriveProvisioner};
use service::store::SnapshotFile;
use service::{seed, EntityStore, InMemoryStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the store, provisioners and auth from configuration.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    common::env::ensure_parent_dir(cfg.storage.snapshot_path.as_deref()).await?;
    let snapshot = cfg.storage.snapshot_path.clone().map(SnapshotFile::new);
    let store = Arc::new(InMemoryStore::open(snapshot).await?);

    if cfg.seed.demo_data {
        if store.insert_seed(seed::demo()).await? {
            info!("demo data seeded");
        } else {
            info!("store not empty; demo data skipped");
        }
    }

    let storage = Arc::new(MockDriveProvisioner::new(&cfg.integrations.drive_base_url));
    let calendar = Arc::new(MockCalendarProvisioner::new(&cfg.integrations.calendar_base_url));
    let tokens = Arc::new(JwtAuthProvider::new(&cfg.auth.jwt_secret, cfg.auth.token_ttl_hours));
    if !cfg.auth.login_enabled() {
        warn!("owner login disabled; set auth.owner_email and auth.owner_password_hash");
    }
    let owner = OwnerCredentials {
        email: cfg.auth.owner_email.clone(),
        password_hash: cfg.auth.owner_password_hash.clone(),
    };
    Ok(ServerState::new(store, storage, calendar, tokens, owner))
}

/// Build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.server.bind_addr())))?;
    info!(%addr, "starting server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
