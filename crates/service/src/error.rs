//! Typed error enum for the service layer.
//!
//! Unifies storage failures, validation and multi-step write outcomes so
//! callers can match on them instead of inspecting messages.

use labdesk_core::ValidationErrors;
use labdesk_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed before anything was written, or was a read.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The submitted row failed validation; nothing was written.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A multi-step write failed after at least one step succeeded.
    /// The store holds the completed steps; the caller must re-fetch.
    #[error(
        "partial write on {entity} {id}: {} step(s) applied before failure: {source}",
        .completed.len()
    )]
    PartialWrite {
        entity: &'static str,
        id: i64,
        completed: Vec<String>,
        #[source]
        source: StorageError,
    },
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) | Self::PartialWrite { source: e, .. } => e.is_transient(),
            Self::Validation(_) => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether cached lists may no longer match the store.
    pub fn requires_refetch(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::PartialWrite { .. })
    }
}
