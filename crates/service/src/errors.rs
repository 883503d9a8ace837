use thiserror::Error;

use crate::integrations::ProvisionError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("provisioning failed: {0}")]
    Provisioning(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} '{id}' not found"))
    }

    pub fn provisioning(step: &str, err: ProvisionError) -> Self {
        Self::Provisioning(format!("{step}: {err}"))
    }
}

impl From<models::ModelError> for ServiceError {
    fn from(err: models::ModelError) -> Self {
        match err {
            models::ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}
