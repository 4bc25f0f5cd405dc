//! Read path: join objectives with their price rows.

use std::collections::HashMap;

use serde::Serialize;

use super::{Objective, ObjectiveWithPrices, PricePair, PriceEntry};
use crate::category::ProductCategory;

/// A price row that was skipped because its label is not a known category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnrecognizedPrice {
    pub price_id: i64,
    pub objective_id: i64,
    pub label: Option<String>,
}

/// Two price rows of the same category for one objective.
///
/// The row scanned later wins. Which one that is depends on the order the
/// store returned them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePrice {
    pub objective_id: i64,
    pub category: ProductCategory,
    pub replaced_price_id: i64,
    pub winning_price_id: i64,
}

/// Output of [`reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reconciliation {
    /// One row per input objective, in input order.
    pub rows: Vec<ObjectiveWithPrices>,
    pub unrecognized: Vec<UnrecognizedPrice>,
    pub duplicates: Vec<DuplicatePrice>,
}

#[derive(Default)]
struct Slots {
    chemical: Option<(i64, f64)>,
    biological: Option<(i64, f64)>,
}

impl Slots {
    fn slot_mut(&mut self, category: ProductCategory) -> &mut Option<(i64, f64)> {
        match category {
            ProductCategory::Chemical => &mut self.chemical,
            ProductCategory::Biological => &mut self.biological,
        }
    }

    fn to_pair(&self) -> PricePair {
        PricePair::new(self.chemical.map(|(_, p)| p), self.biological.map(|(_, p)| p))
    }
}

/// Attach chemical and biological prices to each objective.
///
/// Prices without an owning objective are ignored. Prices whose label does
/// not classify are reported in [`Reconciliation::unrecognized`]. When one
/// objective has several prices of the same category, the last one scanned
/// is kept and the collision is reported in [`Reconciliation::duplicates`].
#[must_use]
pub fn reconcile(objectives: &[Objective], prices: &[PriceEntry]) -> Reconciliation {
    let mut by_objective: HashMap<i64, Slots> = HashMap::new();
    let mut unrecognized = Vec::new();
    let mut duplicates = Vec::new();

    for entry in prices {
        let Some(objective_id) = entry.objective_id else {
            continue;
        };
        let Some(category) = entry.category() else {
            unrecognized.push(UnrecognizedPrice {
                price_id: entry.id,
                objective_id,
                label: entry.product_type.clone(),
            });
            continue;
        };
        let slot = by_objective.entry(objective_id).or_default().slot_mut(category);
        if let Some((replaced_price_id, _)) = *slot {
            duplicates.push(DuplicatePrice {
                objective_id,
                category,
                replaced_price_id,
                winning_price_id: entry.id,
            });
        }
        *slot = Some((entry.id, entry.price));
    }

    let rows = objectives
        .iter()
        .map(|objective| ObjectiveWithPrices {
            objective: objective.clone(),
            prices: by_objective.get(&objective.id).map(Slots::to_pair).unwrap_or_default(),
        })
        .collect();

    Reconciliation { rows, unrecognized, duplicates }
}
