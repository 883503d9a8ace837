//! Auth module: session lookup (provider) and owner login (service).
//!
//! The dashboard has a single owner account. Login verifies the configured
//! argon2 hash and issues a signed token; every gated request asks the
//! `AuthProvider` to turn that token back into a `Session`.

pub mod domain;
pub mod errors;
pub mod provider;
pub mod service;

pub use domain::{LoginInput, Session};
pub use errors::AuthError;
pub use provider::{AuthProvider, JwtAuthProvider};
pub use service::AuthService;
