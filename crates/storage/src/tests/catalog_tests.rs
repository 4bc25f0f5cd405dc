use labdesk_core::{NewPriceEntry, ObjectiveDetails, ProductCategory};

use super::{create_test_objective, create_test_storage};
use crate::error::StorageError;
use crate::traits::{ObjectiveStore, PriceStore};

#[tokio::test]
async fn test_list_objectives_sorted_by_id() {
    let storage = create_test_storage();

    let objectives = storage.list_objectives().await.unwrap();

    let ids: Vec<i64> = objectives.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_update_objective() {
    let storage = create_test_storage();
    let mut objective = create_test_objective(1, "Botrytis cinerea");
    objective.details.turnaround_days = Some(21);

    storage.update_objective(&objective).await.unwrap();

    let stored = storage.list_objectives().await.unwrap();
    assert_eq!(stored[0], objective);
}

#[tokio::test]
async fn test_update_missing_objective_is_not_found() {
    let storage = create_test_storage();

    let err = storage.update_objective(&create_test_objective(99, "x")).await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound { entity: "objective", .. }));
}

#[tokio::test]
async fn test_insert_objective_assigns_next_id() {
    let storage = create_test_storage();

    let id = storage.insert_objective(&ObjectiveDetails::named("Oidio")).await.unwrap();

    assert_eq!(id, 3);
    let stored = storage.list_objectives().await.unwrap();
    assert_eq!(stored.last().map(|o| o.details.name.as_str()), Some("Oidio"));
}

#[tokio::test]
async fn test_insert_price_writes_canonical_label() {
    let storage = create_test_storage();
    let entry =
        NewPriceEntry { objective_id: 2, category: ProductCategory::Biological, price: 80.0 };

    let id = storage.insert_price(&entry).await.unwrap();

    let prices = storage.list_prices_for_objective(2).await.unwrap();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].id, id);
    assert_eq!(prices[0].product_type.as_deref(), Some("Biológico"));
    assert_eq!(prices[0].category(), Some(ProductCategory::Biological));
}

#[tokio::test]
async fn test_insert_price_for_missing_objective_violates_constraint() {
    let storage = create_test_storage();
    let entry = NewPriceEntry { objective_id: 99, category: ProductCategory::Chemical, price: 1.0 };

    let err = storage.insert_price(&entry).await.unwrap_err();

    assert!(err.is_constraint());
}

#[tokio::test]
async fn test_update_price() {
    let storage = create_test_storage();

    storage.update_price(1, Some(550.0)).await.unwrap();

    let prices = storage.list_prices().await.unwrap();
    assert_eq!(prices[0].price, 550.0);
    assert_eq!(prices[1].price, 700.0);
}

#[tokio::test]
async fn test_null_price_violates_not_null() {
    let storage = create_test_storage();

    let err = storage.update_price(1, None).await.unwrap_err();

    assert!(err.is_constraint());
    assert_eq!(storage.list_prices().await.unwrap()[0].price, 500.0);
}

#[tokio::test]
async fn test_update_missing_price_is_not_found() {
    let storage = create_test_storage();

    let err = storage.update_price(42, Some(1.0)).await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound { entity: "price", .. }));
}

#[tokio::test]
async fn test_clones_share_tables() {
    let storage = create_test_storage();
    let other = storage.clone();

    other.update_price(2, Some(1.5)).await.unwrap();

    assert_eq!(storage.list_prices().await.unwrap()[1].price, 1.5);
}
