//! Storage backend trait abstraction
//!
//! Async domain traits over the hosted database tables, implemented by the
//! Postgres backend and the in-process store.

pub mod objective;
pub mod price;
pub mod work_order;

pub use objective::ObjectiveStore;
pub use price::PriceStore;
pub use work_order::WorkOrderStore;
