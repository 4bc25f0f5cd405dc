//! Test objectives, their per-category prices, and the denormalized
//! objective-with-prices rows the pricing grid edits.
//!
//! Serialized field names follow the hosted schema (`objetivo_*`, `precio_*`)
//! so rows can be exchanged with the grid front end unchanged.

mod plan;
mod reconcile;

pub use plan::*;
pub use reconcile::*;

use serde::{Deserialize, Serialize};

use crate::category::ProductCategory;
use crate::test_type::TestType;

/// Objective attributes other than its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveDetails {
    #[serde(rename = "objetivo_nombre")]
    pub name: String,
    #[serde(rename = "objetivo_descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "objetivo_general", default)]
    pub general_objective: Option<String>,
    #[serde(rename = "objetivo_procedimiento", default)]
    pub procedure: Option<String>,
    #[serde(rename = "objetivo_tipo_prueba", default)]
    pub test_type: Option<TestType>,
    /// Expected turnaround in days.
    #[serde(rename = "objetivo_dias_entrega_resultados", default)]
    pub turnaround_days: Option<i32>,
}

impl ObjectiveDetails {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            general_objective: None,
            procedure: None,
            test_type: None,
            turnaround_days: None,
        }
    }

    #[must_use]
    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        self.test_type = Some(test_type);
        self
    }

    #[must_use]
    pub fn with_turnaround_days(mut self, days: i32) -> Self {
        self.turnaround_days = Some(days);
        self
    }
}

/// A named laboratory test definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(rename = "objetivo_id")]
    pub id: i64,
    #[serde(flatten)]
    pub details: ObjectiveDetails,
}

impl Objective {
    #[must_use]
    pub const fn new(id: i64, details: ObjectiveDetails) -> Self {
        Self { id, details }
    }
}

/// A price row from `precios_objetivo_tipo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "precio_id")]
    pub id: i64,
    #[serde(rename = "precio_objetivo_id")]
    pub objective_id: Option<i64>,
    /// Free-text product type; see [`ProductCategory::classify`].
    #[serde(rename = "precio_tipo_producto")]
    pub product_type: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl PriceEntry {
    /// Category of this entry, if its label is recognized.
    #[must_use]
    pub fn category(&self) -> Option<ProductCategory> {
        self.product_type.as_deref().and_then(ProductCategory::classify)
    }
}

/// A price row to insert. The label written is the category's canonical label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewPriceEntry {
    pub objective_id: i64,
    pub category: ProductCategory,
    pub price: f64,
}

/// Chemical and biological price of one objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    #[serde(rename = "precio_quimico", default)]
    pub chemical: Option<f64>,
    #[serde(rename = "precio_biologico", default)]
    pub biological: Option<f64>,
}

impl PricePair {
    #[must_use]
    pub const fn new(chemical: Option<f64>, biological: Option<f64>) -> Self {
        Self { chemical, biological }
    }

    #[must_use]
    pub const fn get(&self, category: ProductCategory) -> Option<f64> {
        match category {
            ProductCategory::Chemical => self.chemical,
            ProductCategory::Biological => self.biological,
        }
    }

    pub fn set(&mut self, category: ProductCategory, price: Option<f64>) {
        match category {
            ProductCategory::Chemical => self.chemical = price,
            ProductCategory::Biological => self.biological = price,
        }
    }
}

/// Reconciled row: one objective plus its chemical and biological prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWithPrices {
    #[serde(flatten)]
    pub objective: Objective,
    #[serde(flatten)]
    pub prices: PricePair,
}

impl ObjectiveWithPrices {
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.objective.id
    }
}

/// A reconciled row that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewObjectiveWithPrices {
    #[serde(flatten)]
    pub details: ObjectiveDetails,
    #[serde(flatten)]
    pub prices: PricePair,
}
