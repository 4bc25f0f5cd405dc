use async_trait::async_trait;
use labdesk_core::{Objective, ObjectiveDetails};

use crate::error::StorageError;

/// Operations on `objetivos`.
#[async_trait]
pub trait ObjectiveStore: Send + Sync {
    /// All objectives, ascending by id.
    async fn list_objectives(&self) -> Result<Vec<Objective>, StorageError>;

    /// Overwrite every column of the objective with the same id.
    ///
    /// Returns `NotFound` when no row has that id.
    async fn update_objective(&self, objective: &Objective) -> Result<(), StorageError>;

    /// Insert an objective and return its generated id.
    async fn insert_objective(&self, objective: &ObjectiveDetails) -> Result<i64, StorageError>;
}
