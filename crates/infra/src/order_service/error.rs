use thiserror::Error;

use orderdesk_core::DomainError;

use crate::store::StoreError;

/// Order workflow error.
///
/// Every failure reaching a workflow caller is classified into one of these
/// kinds; no partial results accompany an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Input rejected by a domain factory or mutator. Not retryable.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A customer or product lookup missed.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// An insert-only store operation hit an existing id.
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// A configuration step failed; the service was not built.
    #[error("configuration step `{step}` failed: {reason}")]
    Configuration { step: &'static str, reason: String },

    /// The storage backend could not serve the call.
    #[error(transparent)]
    Store(StoreError),
}

impl OrderError {
    pub fn configuration(step: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            step,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for OrderError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { entity, id } => OrderError::NotFound { entity, id },
            StoreError::AlreadyExists { entity, id } => OrderError::AlreadyExists { entity, id },
            other => OrderError::Store(other),
        }
    }
}

impl From<DomainError> for OrderError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => OrderError::Validation(msg),
            DomainError::InvalidId(msg) => OrderError::Validation(msg),
        }
    }
}
