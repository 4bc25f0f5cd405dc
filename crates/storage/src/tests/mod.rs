//! Test utilities and module declarations for storage tests.

use labdesk_core::{MasterViewRow, Objective, ObjectiveDetails, PriceEntry, TestType};

use crate::MemoryStorage;

mod catalog_tests;
mod work_order_tests;

pub fn create_test_objective(id: i64, name: &str) -> Objective {
    Objective::new(id, ObjectiveDetails::named(name).with_test_type(TestType::Efficacy))
}

pub fn create_test_price(id: i64, objective_id: i64, label: &str, price: f64) -> PriceEntry {
    PriceEntry { id, objective_id: Some(objective_id), product_type: Some(label.to_owned()), price }
}

pub fn create_test_row(test_id: i64, order_id: Option<i64>) -> MasterViewRow {
    MasterViewRow {
        prueba_id: Some(test_id),
        prueba_orden_id: order_id,
        objetivo_nombre: Some(format!("objective {test_id}")),
        ..MasterViewRow::default()
    }
}

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::with_rows(
        vec![create_test_objective(2, "Mildiu"), create_test_objective(1, "Botrytis")],
        vec![
            create_test_price(1, 1, "Químico", 500.0),
            create_test_price(2, 1, "Biológico", 700.0),
        ],
        vec![create_test_row(10, Some(1)), create_test_row(12, Some(2)), create_test_row(11, Some(1))],
    )
}
