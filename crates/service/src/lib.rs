//! Service layer for labdesk
//!
//! Centralizes business logic between HTTP/CLI handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod cache;
mod catalog_service;
pub mod error;
#[cfg(test)]
mod test_support;
mod work_order_service;

pub use cache::{Keyed, MASTER_VIEW_KEY, OBJECTIVES_KEY, QueryCache};
pub use catalog_service::CatalogService;
pub use error::ServiceError;
pub use work_order_service::WorkOrderService;
