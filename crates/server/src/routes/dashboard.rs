use axum::{extract::State, Json};
use chrono::Local;
use service::dashboard::{summarize, DashboardSummary};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn summary(State(state): State<ServerState>) -> Result<Json<DashboardSummary>, ApiError> {
    let today = Local::now().date_naive();
    let summary = summarize(state.store.as_ref(), today).await?;
    Ok(Json(summary))
}
