use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use models::{ClientId, Post};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    pub client_id: Option<ClientId>,
}

pub async fn list_posts(
    State(state): State<ServerState>,
    query: Result<Query<PostQuery>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Query(query) = query?;
    let posts = state.store.list_posts(query.client_id.as_ref()).await?;
    Ok(Json(posts))
}
