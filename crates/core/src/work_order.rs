//! Master work-order view and the edits the tracking grid can make to it.
//!
//! The view (`vistamaestratotal`) joins work orders with their tests and
//! lookup tables. Only a handful of its columns are editable, and they live in
//! two different tables: four on the test row, the work-order status on the
//! work order itself.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the master view, under the view's column names.
/// Every column is nullable in the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterViewRow {
    pub prueba_orden_id: Option<i64>,
    pub prueba_id: Option<i64>,
    pub objetivo_nombre: Option<String>,
    pub producto_nombre: Option<String>,
    pub dosis_producto: Option<String>,
    pub producto_unid: Option<String>,
    pub producto_tipo: Option<String>,
    pub producto_casa_comercial: Option<String>,
    pub especie_nombre: Option<String>,
    pub finca_nombre: Option<String>,
    pub tipo_prueba: Option<String>,
    pub contacto: Option<String>,
    pub contacto_cargo: Option<String>,
    pub contacto_email: Option<String>,
    pub contacto_celular_principal: Option<String>,
    pub contacto_celular_opcional: Option<String>,
    pub profesion_nombre: Option<String>,
    pub facturara: Option<String>,
    pub descuento: Option<String>,
    pub orden_compra: Option<String>,
    pub orden_numero_factura: Option<i64>,
    pub prueba_cantidad: Option<String>,
    pub prueba_numero_muestra: Option<String>,
    pub prueba_precio: Option<f64>,
    pub prueba_fecha_creacion: Option<String>,
    pub fecha_recibo_muestra: Option<String>,
    pub prueba_fecha_entrega_calculada: Option<String>,
    pub prueba_semana_entrega: Option<i32>,
    pub fecha_entrega_info: Option<String>,
    pub prueba_estado_proceso: Option<String>,
    pub prueba_estado_foto: Option<String>,
    pub prueba_usuario_foto: Option<String>,
    pub prueba_estado_lab: Option<String>,
    pub estado_fact: Option<String>,
    pub estado_ot: Option<String>,
    pub observaciones: Option<String>,
    pub notas_varias: Option<String>,
}

/// Deserialize a present field (including `null`) as `Some`, so that an
/// absent field stays `None` through `#[serde(default)]`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Editable columns of a master-view row, under their view names.
///
/// Outer `None`: leave the column alone. `Some(None)`: clear it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableFields {
    #[serde(
        rename = "observaciones",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub observations: Option<Option<String>>,
    #[serde(
        rename = "notas_varias",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub misc_notes: Option<Option<String>>,
    #[serde(
        rename = "prueba_estado_lab",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub lab_status: Option<Option<String>>,
    #[serde(
        rename = "estado_fact",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_status: Option<Option<String>>,
    #[serde(
        rename = "estado_ot",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_order_status: Option<Option<String>>,
}

/// Column changes for one row of `pruebas_ordenes_trabajo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOrderPatch {
    pub observations: Option<Option<String>>,
    pub misc_notes: Option<Option<String>>,
    pub lab_status: Option<Option<String>>,
    pub billing_status: Option<Option<String>>,
}

impl TestOrderPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observations.is_none()
            && self.misc_notes.is_none()
            && self.lab_status.is_none()
            && self.billing_status.is_none()
    }

    /// Set columns as `(table column, new value)`, in a fixed order.
    #[must_use]
    pub fn columns(&self) -> Vec<(&'static str, Option<&str>)> {
        [
            ("prueba_obs", &self.observations),
            ("prueba_notas_varias", &self.misc_notes),
            ("prueba_estado_lab", &self.lab_status),
            ("prueba_estado_facturacion", &self.billing_status),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_ref().map(|v| (column, v.as_deref())))
        .collect()
    }
}

impl MasterViewRow {
    /// Apply test-row column changes under their view names.
    pub fn apply_test_patch(&mut self, patch: &TestOrderPatch) {
        let targets = [
            (&mut self.observaciones, &patch.observations),
            (&mut self.notas_varias, &patch.misc_notes),
            (&mut self.prueba_estado_lab, &patch.lab_status),
            (&mut self.estado_fact, &patch.billing_status),
        ];
        for (column, change) in targets {
            if let Some(value) = change {
                column.clone_from(value);
            }
        }
    }
}

impl EditableFields {
    /// Separate test-row columns from the work-order status.
    #[must_use]
    pub fn split(self) -> (TestOrderPatch, Option<Option<String>>) {
        let patch = TestOrderPatch {
            observations: self.observations,
            misc_notes: self.misc_notes,
            lab_status: self.lab_status,
            billing_status: self.billing_status,
        };
        (patch, self.work_order_status)
    }
}

/// Store operations for one master-view edit, in the order they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderEditPlan {
    pub test_id: i64,
    /// `None` when no test-row column changed.
    pub test_patch: Option<TestOrderPatch>,
    /// `(order id, new status)`; `None` when unchanged or the row has no order.
    pub status_update: Option<(i64, Option<String>)>,
}

impl WorkOrderEditPlan {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.test_patch.is_none() && self.status_update.is_none()
    }
}

/// Plan the writes for an edit of the row identified by `test_id`.
///
/// A status change on a row without a work order is dropped.
#[must_use]
pub fn plan_work_order_edit(
    test_id: i64,
    order_id: Option<i64>,
    fields: EditableFields,
) -> WorkOrderEditPlan {
    let (patch, status) = fields.split();
    let test_patch = (!patch.is_empty()).then_some(patch);
    let status_update = match (status, order_id) {
        (Some(status), Some(order_id)) => Some((order_id, status)),
        (Some(_), None) => {
            tracing::debug!(test_id, "work-order status edit dropped: row has no work order");
            None
        },
        (None, _) => None,
    };
    WorkOrderEditPlan { test_id, test_patch, status_update }
}
