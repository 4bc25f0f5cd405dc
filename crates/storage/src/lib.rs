//! Storage layer for labdesk
//!
//! Store traits for objectives, prices and the work-order view, with a
//! PostgreSQL implementation for the hosted database and an in-process one
//! for demos and tests.

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_schema;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_schema::apply_dev_schema;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::{ObjectiveStore, PriceStore, WorkOrderStore};
