//! WorkOrderStore implementation for PgStorage.

use async_trait::async_trait;
use labdesk_core::{MASTER_VIEW, MasterViewRow, TEST_ORDERS_TABLE, TestOrderPatch, WORK_ORDERS_TABLE};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::{PgStorage, require_row};
use crate::error::StorageError;
use crate::traits::WorkOrderStore;

/// View columns with casts to the types `MasterViewRow` expects.
const MASTER_VIEW_COLUMNS: &str = "prueba_orden_id::bigint AS prueba_orden_id, \
     prueba_id::bigint AS prueba_id, objetivo_nombre, producto_nombre, dosis_producto, \
     producto_unid, producto_tipo, producto_casa_comercial, especie_nombre, finca_nombre, \
     tipo_prueba, contacto, contacto_cargo, contacto_email, contacto_celular_principal, \
     contacto_celular_opcional, profesion_nombre, facturara, descuento::text AS descuento, \
     orden_compra, orden_numero_factura::bigint AS orden_numero_factura, \
     prueba_cantidad::text AS prueba_cantidad, prueba_numero_muestra, \
     prueba_precio::float8 AS prueba_precio, \
     prueba_fecha_creacion::text AS prueba_fecha_creacion, \
     fecha_recibo_muestra::text AS fecha_recibo_muestra, \
     prueba_fecha_entrega_calculada::text AS prueba_fecha_entrega_calculada, \
     prueba_semana_entrega::int4 AS prueba_semana_entrega, \
     fecha_entrega_info::text AS fecha_entrega_info, prueba_estado_proceso, \
     prueba_estado_foto, prueba_usuario_foto, prueba_estado_lab, estado_fact, estado_ot, \
     observaciones, notas_varias";

fn row_to_master(row: &PgRow) -> Result<MasterViewRow, StorageError> {
    Ok(MasterViewRow {
        prueba_orden_id: row.try_get("prueba_orden_id")?,
        prueba_id: row.try_get("prueba_id")?,
        objetivo_nombre: row.try_get("objetivo_nombre")?,
        producto_nombre: row.try_get("producto_nombre")?,
        dosis_producto: row.try_get("dosis_producto")?,
        producto_unid: row.try_get("producto_unid")?,
        producto_tipo: row.try_get("producto_tipo")?,
        producto_casa_comercial: row.try_get("producto_casa_comercial")?,
        especie_nombre: row.try_get("especie_nombre")?,
        finca_nombre: row.try_get("finca_nombre")?,
        tipo_prueba: row.try_get("tipo_prueba")?,
        contacto: row.try_get("contacto")?,
        contacto_cargo: row.try_get("contacto_cargo")?,
        contacto_email: row.try_get("contacto_email")?,
        contacto_celular_principal: row.try_get("contacto_celular_principal")?,
        contacto_celular_opcional: row.try_get("contacto_celular_opcional")?,
        profesion_nombre: row.try_get("profesion_nombre")?,
        facturara: row.try_get("facturara")?,
        descuento: row.try_get("descuento")?,
        orden_compra: row.try_get("orden_compra")?,
        orden_numero_factura: row.try_get("orden_numero_factura")?,
        prueba_cantidad: row.try_get("prueba_cantidad")?,
        prueba_numero_muestra: row.try_get("prueba_numero_muestra")?,
        prueba_precio: row.try_get("prueba_precio")?,
        prueba_fecha_creacion: row.try_get("prueba_fecha_creacion")?,
        fecha_recibo_muestra: row.try_get("fecha_recibo_muestra")?,
        prueba_fecha_entrega_calculada: row.try_get("prueba_fecha_entrega_calculada")?,
        prueba_semana_entrega: row.try_get("prueba_semana_entrega")?,
        fecha_entrega_info: row.try_get("fecha_entrega_info")?,
        prueba_estado_proceso: row.try_get("prueba_estado_proceso")?,
        prueba_estado_foto: row.try_get("prueba_estado_foto")?,
        prueba_usuario_foto: row.try_get("prueba_usuario_foto")?,
        prueba_estado_lab: row.try_get("prueba_estado_lab")?,
        estado_fact: row.try_get("estado_fact")?,
        estado_ot: row.try_get("estado_ot")?,
        observaciones: row.try_get("observaciones")?,
        notas_varias: row.try_get("notas_varias")?,
    })
}

#[async_trait]
impl WorkOrderStore for PgStorage {
    async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {MASTER_VIEW_COLUMNS} FROM {MASTER_VIEW} ORDER BY prueba_id DESC NULLS LAST"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_master).collect()
    }

    async fn update_test_order(
        &self,
        test_id: i64,
        patch: &TestOrderPatch,
    ) -> Result<(), StorageError> {
        let columns = patch.columns();
        if columns.is_empty() {
            return Ok(());
        }
        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ${}", i + 1))
            .collect();
        let sql = format!(
            "UPDATE {TEST_ORDERS_TABLE} SET {} WHERE prueba_id = ${}",
            assignments.join(", "),
            columns.len() + 1
        );
        let mut query = sqlx::query(&sql);
        for (_, value) in &columns {
            query = query.bind(*value);
        }
        let result = query.bind(test_id).execute(&self.pool).await?;
        require_row(result.rows_affected(), "test order", test_id)
    }

    async fn update_work_order_status(
        &self,
        order_id: i64,
        status: Option<&str>,
    ) -> Result<(), StorageError> {
        let result = sqlx::query(&format!(
            "UPDATE {WORK_ORDERS_TABLE} SET orden_estado_ot = $1 WHERE orden_id = $2"
        ))
        .bind(status)
        .bind(order_id)
        .execute(&self.pool)
        .await?;
        require_row(result.rows_affected(), "work order", order_id)
    }
}
