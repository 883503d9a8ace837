use chrono::NaiveDate;
use models::{ClientStatus, ShootStatus};
use serde::Serialize;

use crate::errors::ServiceError;
use crate::store::{EntityStore, ShootFilter};

/// Headline counts for the dashboard landing page.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_clients: usize,
    pub paused_clients: usize,
    pub inactive_clients: usize,
    pub upcoming_shoots: usize,
    pub completed_shoots: usize,
    pub shoots_today: usize,
}

pub async fn summarize(store: &dyn EntityStore, today: NaiveDate) -> Result<DashboardSummary, ServiceError> {
    let clients = store.list_clients().await?;
    let shoots = store.list_shoots(&ShootFilter::default()).await?;

    let mut summary = DashboardSummary { total_clients: clients.len(), ..Default::default() };
    for c in &clients {
        match c.status {
            ClientStatus::Active => summary.active_clients += 1,
            ClientStatus::Paused => summary.paused_clients += 1,
            ClientStatus::Inactive => summary.inactive_clients += 1,
        }
    }
    for s in &shoots {
        match s.status {
            ShootStatus::Scheduled => {
                summary.upcoming_shoots += 1;
                if s.scheduled_at.date() == today {
                    summary.shoots_today += 1;
                }
            }
            ShootStatus::Complete => summary.completed_shoots += 1,
            ShootStatus::Cancelled => {}
        }
    }
    Ok(summary)
}
