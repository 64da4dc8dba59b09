use mock_scenarios::FieldErrors;
use mock_store::StoreError;
use thiserror::Error;

/// Failures of the admin mock that are not simulated by a scenario.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
