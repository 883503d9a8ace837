use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::{Shoot, ShootId, ShootInput};
use service::{ServiceError, ShootFilter};

use crate::errors::ApiError;
use crate::state::ServerState;

/// `?status=scheduled|complete|cancelled&clientId=..`
pub async fn list_shoots(
    State(state): State<ServerState>,
    filter: Result<Query<ShootFilter>, QueryRejection>,
) -> Result<Json<Vec<Shoot>>, ApiError> {
    let Query(filter) = filter?;
    let shoots = state.store.list_shoots(&filter).await?;
    Ok(Json(shoots))
}

pub async fn schedule_shoot(
    State(state): State<ServerState>,
    payload: Result<Json<ShootInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Shoot>), ApiError> {
    let Json(input) = payload?;
    let shoot = state.scheduler.schedule_shoot(input).await?;
    Ok((StatusCode::CREATED, Json(shoot)))
}

pub async fn get_shoot(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Shoot>, ApiError> {
    let id = ShootId::from(id);
    state
        .store
        .get_shoot(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("shoot", &id).into())
}
