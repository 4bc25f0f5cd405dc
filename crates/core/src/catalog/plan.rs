//! Write path: split an edited or new reconciled row into store operations.

use super::{
    NewObjectiveWithPrices, NewPriceEntry, Objective, ObjectiveDetails, ObjectiveWithPrices,
    PriceEntry,
};
use crate::category::ProductCategory;

/// Desired price of one category for one objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceUpsert {
    pub objective_id: i64,
    pub category: ProductCategory,
    pub price: Option<f64>,
}

/// Store operation a [`PriceUpsert`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceWrite {
    /// Overwrite the existing row. A `None` price is still written.
    Update { price_id: i64, price: Option<f64> },
    Insert(NewPriceEntry),
    /// No existing row and nothing to set.
    Skip,
}

impl PriceUpsert {
    /// Decide the write given the row currently stored for this
    /// objective and category, if any.
    #[must_use]
    pub fn resolve(&self, existing: Option<&PriceEntry>) -> PriceWrite {
        match (existing, self.price) {
            (Some(entry), price) => PriceWrite::Update { price_id: entry.id, price },
            (None, Some(price)) => PriceWrite::Insert(NewPriceEntry {
                objective_id: self.objective_id,
                category: self.category,
                price,
            }),
            (None, None) => PriceWrite::Skip,
        }
    }
}

/// Find the stored price row for an objective and category.
///
/// Returns the last matching row in `prices`, which is the one
/// [`reconcile`](super::reconcile) shows for the same input.
#[must_use]
pub fn find_existing_price(
    prices: &[PriceEntry],
    objective_id: i64,
    category: ProductCategory,
) -> Option<&PriceEntry> {
    prices
        .iter()
        .rev()
        .find(|p| p.objective_id == Some(objective_id) && p.category() == Some(category))
}

/// Operations needed to persist an edited row.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub objective: Objective,
    /// One entry per category, chemical first.
    pub price_upserts: Vec<PriceUpsert>,
}

/// Split an edited row into an objective update and one price upsert per category.
#[must_use]
pub fn decompose_update(row: &ObjectiveWithPrices) -> UpdatePlan {
    let objective_id = row.objective.id;
    let price_upserts = ProductCategory::ALL
        .into_iter()
        .map(|category| PriceUpsert { objective_id, category, price: row.prices.get(category) })
        .collect();
    UpdatePlan { objective: row.objective.clone(), price_upserts }
}

/// Operations needed to persist a new row.
///
/// The objective is inserted first; price rows need its generated id.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlan {
    pub objective: ObjectiveDetails,
    pub prices: Vec<(ProductCategory, f64)>,
}

impl CreatePlan {
    #[must_use]
    pub fn price_inserts(&self, objective_id: i64) -> Vec<NewPriceEntry> {
        self.prices
            .iter()
            .map(|&(category, price)| NewPriceEntry { objective_id, category, price })
            .collect()
    }
}

/// Split a new row into an objective insert and inserts for its non-null prices.
#[must_use]
pub fn decompose_create(row: NewObjectiveWithPrices) -> CreatePlan {
    let prices = ProductCategory::ALL
        .into_iter()
        .filter_map(|category| row.prices.get(category).map(|price| (category, price)))
        .collect();
    CreatePlan { objective: row.details, prices }
}
