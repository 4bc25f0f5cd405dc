//! Update availability for the labdesk console.
//!
//! Fetches the release manifest, compares its version with the running one,
//! and keeps the latest result for the UI to poll.

mod checker;
#[cfg(test)]
mod checker_tests;
mod client;
#[cfg(test)]
mod client_tests;
mod error;

pub use checker::{UpdateChecker, UpdateStatus};
pub use client::{UpdateClient, UpdateInfo};
pub use error::UpdateError;
