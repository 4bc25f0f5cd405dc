//! Development schema: the tables and master view the console reads and
//! writes, for local databases and integration tests.
//!
//! Hosted deployments already have these objects; every statement is
//! idempotent so running it against them is harmless.

use sqlx::PgPool;

use crate::error::StorageError;

const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS objetivos (
        objetivo_id BIGSERIAL PRIMARY KEY,
        objetivo_nombre TEXT NOT NULL,
        objetivo_descripcion TEXT,
        objetivo_general TEXT,
        objetivo_procedimiento TEXT,
        objetivo_tipo_prueba TEXT,
        objetivo_dias_entrega_resultados INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS precios_objetivo_tipo (
        precio_id BIGSERIAL PRIMARY KEY,
        precio_objetivo_id BIGINT REFERENCES objetivos (objetivo_id),
        precio_tipo_producto TEXT,
        precio DOUBLE PRECISION NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_precio_objetivo ON precios_objetivo_tipo (precio_objetivo_id)",
    r#"
    CREATE TABLE IF NOT EXISTS ordenes_trabajo (
        orden_id BIGSERIAL PRIMARY KEY,
        orden_compra TEXT,
        orden_descuento TEXT,
        orden_estado_ot TEXT,
        orden_fecha_creacion TIMESTAMPTZ DEFAULT NOW(),
        orden_numero_factura BIGINT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pruebas_ordenes_trabajo (
        prueba_id BIGSERIAL PRIMARY KEY,
        prueba_orden_id BIGINT NOT NULL REFERENCES ordenes_trabajo (orden_id),
        prueba_objetivo_id BIGINT REFERENCES objetivos (objetivo_id),
        prueba_dosis_producto TEXT NOT NULL DEFAULT '',
        prueba_producto_unid TEXT,
        prueba_cantidad TEXT,
        prueba_numero_muestra TEXT,
        prueba_precio DOUBLE PRECISION,
        prueba_fecha_creacion TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        prueba_fecha_recibido DATE,
        prueba_fecha_entrega_calculada DATE,
        prueba_fecha_entrega_informe DATE,
        prueba_semana_entrega INTEGER,
        prueba_estado_proceso TEXT,
        prueba_estado_foto TEXT,
        prueba_usuario_foto TEXT,
        prueba_estado_lab TEXT,
        prueba_estado_facturacion TEXT,
        prueba_obs TEXT,
        prueba_notas_varias TEXT
    )
    "#,
    r#"
    CREATE OR REPLACE VIEW vistamaestratotal AS
    SELECT
        p.prueba_orden_id,
        p.prueba_id,
        o.objetivo_nombre,
        NULL::text AS producto_nombre,
        p.prueba_dosis_producto AS dosis_producto,
        p.prueba_producto_unid AS producto_unid,
        NULL::text AS producto_tipo,
        NULL::text AS producto_casa_comercial,
        NULL::text AS especie_nombre,
        NULL::text AS finca_nombre,
        o.objetivo_tipo_prueba AS tipo_prueba,
        NULL::text AS contacto,
        NULL::text AS contacto_cargo,
        NULL::text AS contacto_email,
        NULL::text AS contacto_celular_principal,
        NULL::text AS contacto_celular_opcional,
        NULL::text AS profesion_nombre,
        NULL::text AS facturara,
        w.orden_descuento AS descuento,
        w.orden_compra,
        w.orden_numero_factura,
        p.prueba_cantidad,
        p.prueba_numero_muestra,
        p.prueba_precio,
        p.prueba_fecha_creacion,
        p.prueba_fecha_recibido AS fecha_recibo_muestra,
        p.prueba_fecha_entrega_calculada,
        p.prueba_semana_entrega,
        p.prueba_fecha_entrega_informe AS fecha_entrega_info,
        p.prueba_estado_proceso,
        p.prueba_estado_foto,
        p.prueba_usuario_foto,
        p.prueba_estado_lab,
        p.prueba_estado_facturacion AS estado_fact,
        w.orden_estado_ot AS estado_ot,
        p.prueba_obs AS observaciones,
        p.prueba_notas_varias AS notas_varias
    FROM pruebas_ordenes_trabajo p
    LEFT JOIN ordenes_trabajo w ON w.orden_id = p.prueba_orden_id
    LEFT JOIN objetivos o ON o.objetivo_id = p.prueba_objetivo_id
    "#,
];

/// Create the tables and view if they do not exist.
pub async fn apply_dev_schema(pool: &PgPool) -> Result<(), StorageError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
    }
    tracing::info!(statements = SCHEMA_STATEMENTS.len(), "development schema applied");
    Ok(())
}
