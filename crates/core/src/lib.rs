//! Core types for labdesk
//!
//! Domain types shared by storage, service and HTTP crates: objectives and
//! their prices, the reconciliation between them, the master work-order view
//! and release versions.

mod catalog;
mod category;
pub mod constants;
mod env_config;
mod error;
mod test_type;
mod validation;
mod version;
mod work_order;

pub use catalog::*;
pub use category::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use test_type::*;
pub use validation::*;
pub use version::*;
pub use work_order::*;
