//! Field checks the grid runs before a row is written.
//!
//! Reconciliation and decomposition never validate; callers run
//! [`validate_objective`] first and refuse to write on error.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::{ObjectiveDetails, PricePair};

/// Field name → message, keyed by the serialized column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check an objective and its prices.
///
/// # Errors
/// Returns every failing field at once.
pub fn validate_objective(
    details: &ObjectiveDetails,
    prices: &PricePair,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if details.name.trim().is_empty() {
        errors.add("objetivo_nombre", "name is required");
    }
    if details.turnaround_days.is_some_and(|d| d <= 0) {
        errors.add("objetivo_dias_entrega_resultados", "must be a positive number");
    }
    for (field, value) in [("precio_quimico", prices.chemical), ("precio_biologico", prices.biological)]
    {
        if value.is_some_and(|p| !p.is_finite() || p < 0.0) {
            errors.add(field, "must be zero or a positive number");
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
