use labdesk_core::TestOrderPatch;

use super::create_test_storage;
use crate::error::StorageError;
use crate::traits::WorkOrderStore;
use crate::{MemoryStorage, StorageBackend};

#[tokio::test]
async fn test_master_view_sorted_by_test_id_desc() {
    let storage = create_test_storage();

    let rows = storage.list_master_view().await.unwrap();

    let ids: Vec<Option<i64>> = rows.iter().map(|r| r.prueba_id).collect();
    assert_eq!(ids, vec![Some(12), Some(11), Some(10)]);
}

#[tokio::test]
async fn test_update_test_order_patches_only_set_columns() {
    let storage = create_test_storage();
    let patch = TestOrderPatch {
        observations: Some(Some("muestra dañada".to_owned())),
        lab_status: Some(Some("En proceso".to_owned())),
        ..TestOrderPatch::default()
    };

    storage.update_test_order(11, &patch).await.unwrap();

    let rows = storage.list_master_view().await.unwrap();
    let row = rows.iter().find(|r| r.prueba_id == Some(11)).unwrap();
    assert_eq!(row.observaciones.as_deref(), Some("muestra dañada"));
    assert_eq!(row.prueba_estado_lab.as_deref(), Some("En proceso"));
    assert!(row.notas_varias.is_none());
}

#[tokio::test]
async fn test_update_test_order_can_clear_column() {
    let storage = create_test_storage();
    let set = TestOrderPatch { misc_notes: Some(Some("x".to_owned())), ..TestOrderPatch::default() };
    let clear = TestOrderPatch { misc_notes: Some(None), ..TestOrderPatch::default() };

    storage.update_test_order(10, &set).await.unwrap();
    storage.update_test_order(10, &clear).await.unwrap();

    let rows = storage.list_master_view().await.unwrap();
    let row = rows.iter().find(|r| r.prueba_id == Some(10)).unwrap();
    assert!(row.notas_varias.is_none());
}

#[tokio::test]
async fn test_work_order_status_applies_to_every_test_of_the_order() {
    let storage = create_test_storage();

    storage.update_work_order_status(1, Some("Cerrada")).await.unwrap();

    let rows = storage.list_master_view().await.unwrap();
    for row in rows {
        let expected = (row.prueba_orden_id == Some(1)).then_some("Cerrada");
        assert_eq!(row.estado_ot.as_deref(), expected);
    }
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
    let storage = create_test_storage();

    let test_err = storage.update_test_order(99, &TestOrderPatch::default()).await.unwrap_err();
    let order_err = storage.update_work_order_status(99, None).await.unwrap_err();

    assert!(matches!(test_err, StorageError::NotFound { entity: "test order", .. }));
    assert!(matches!(order_err, StorageError::NotFound { entity: "work order", .. }));
}

#[tokio::test]
async fn test_backend_dispatches_to_memory() {
    let backend = StorageBackend::new_memory(MemoryStorage::demo());

    let rows = backend.list_master_view().await.unwrap();

    assert_eq!(backend.kind(), "memory");
    assert!(!rows.is_empty());
}
