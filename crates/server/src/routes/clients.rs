use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{Client, ClientId, ClientInput};
use service::ServiceError;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

/// 列出全部客户（按创建时间倒序）
pub async fn list_clients(State(state): State<ServerState>) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.store.list_clients().await?;
    Ok(Json(clients))
}

/// 创建客户
pub async fn create_client(
    State(state): State<ServerState>,
    payload: Result<Json<ClientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(input) = payload?;
    input.validate().map_err(ServiceError::from)?;
    let client = state.store.create_client(input).await?;
    // Drive folder structure for new clients is not provisioned yet.
    info!(client_id = %client.id, client_name = %client.name, "client created; drive folder setup deferred");
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn get_client(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Client>, ApiError> {
    let id = ClientId::from(id);
    state
        .store
        .get_client(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("client", &id).into())
}
