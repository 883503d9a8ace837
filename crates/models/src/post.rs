use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClientId, PostId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostState {
    Scheduled,
    Posted,
}

/// Read-only post record; there is no create path yet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub client_id: ClientId,
    #[serde(default)]
    pub content_refs: Vec<String>,
    pub state: PostState,
    pub scheduled_for: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
}
