//! Record types for the dashboard: clients, shoots and posts.
//!
//! Records are plain serde structs (camelCase on the wire). Input types carry the
//! create payloads and own their validation; the store assigns ids and timestamps.

pub mod errors;
pub mod ids;
pub mod client;
pub mod shoot;
pub mod post;

pub use client::{Client, ClientInput, ClientStatus, Platform};
pub use errors::ModelError;
pub use ids::{ClientId, PostId, ShootId};
pub use post::{Post, PostState};
pub use shoot::{Shoot, ShootInput, ShootLinks, ShootStatus};
