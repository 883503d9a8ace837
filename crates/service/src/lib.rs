//! Service layer: entity store, shoot scheduling, auth and dashboard queries.
//! - Keeps business rules independent of the HTTP framework.
//! - Reuses record types and validation from the `models` crate.
//! - External collaborators (storage folders, calendar events) sit behind traits.

pub mod errors;
pub mod store;
pub mod integrations;
pub mod scheduling;
pub mod auth;
pub mod dashboard;
pub mod seed;

pub use errors::ServiceError;
pub use scheduling::SchedulingService;
pub use store::{EntityStore, InMemoryStore, ShootFilter};
