//! Errors returned by the objective, price and work-order stores.
//!
//! The service layer tells a missing row apart from a rejected write and
//! from a database outage by matching on these variants.

use thiserror::Error;

/// Failure of a single store call.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matched the key of an update.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The store rejected the write (NOT NULL, foreign key, unique, check).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Development schema could not be applied.
    #[error("schema error: {0}")]
    Schema(String),
}

impl StorageError {
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "postgres")]
            Self::Database(err) => {
                matches!(err, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_))
            },
            _ => false,
        }
    }

    /// Whether the store rejected the write because of a constraint.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// SQLSTATE classes mapped to [`StorageError::Constraint`]:
/// not-null, foreign-key, unique and check violations.
#[cfg(feature = "postgres")]
const CONSTRAINT_SQLSTATES: [&str; 4] = ["23502", "23503", "23505", "23514"];

/// Hand-written `From<sqlx::Error>` instead of `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - integrity-constraint SQLSTATEs → `Constraint`
/// - everything else → `Database`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| CONSTRAINT_SQLSTATES.iter().any(|s| c == *s)) =>
            {
                Self::Constraint(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
