use thiserror::Error;

use orderdesk_core::AggregateRoot;

/// Repository operation error.
///
/// These are **storage errors** (lookup misses, duplicate keys, backend
/// failures) as opposed to domain errors (validation).
///
/// ## Error Categories
///
/// - **NotFound**: no entry with the requested id
/// - **AlreadyExists**: an insert-only operation hit an existing id
/// - **Unavailable**: the backend could not serve the call (e.g. poisoned lock,
///   lost connection); callers may retry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found<A: AggregateRoot>(id: A::Id) -> Self {
        Self::NotFound {
            entity: A::kind(),
            id: id.to_string(),
        }
    }

    pub fn already_exists<A: AggregateRoot>(id: A::Id) -> Self {
        Self::AlreadyExists {
            entity: A::kind(),
            id: id.to_string(),
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
