//! ObjectiveStore implementation for PgStorage.

use async_trait::async_trait;
use labdesk_core::{OBJECTIVES_TABLE, Objective, ObjectiveDetails};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::{PgStorage, parse_pg_test_type, require_row};
use crate::error::StorageError;
use crate::traits::ObjectiveStore;

const OBJECTIVE_COLUMNS: &str = "objetivo_id::bigint AS objetivo_id, objetivo_nombre, \
     objetivo_descripcion, objetivo_general, objetivo_procedimiento, objetivo_tipo_prueba, \
     objetivo_dias_entrega_resultados::int4 AS objetivo_dias_entrega_resultados";

fn row_to_objective(row: &PgRow) -> Result<Objective, StorageError> {
    let id: i64 = row.try_get("objetivo_id")?;
    let name: Option<String> = row.try_get("objetivo_nombre")?;
    let test_type: Option<String> = row.try_get("objetivo_tipo_prueba")?;
    Ok(Objective::new(id, ObjectiveDetails {
        name: name.unwrap_or_default(),
        description: row.try_get("objetivo_descripcion")?,
        general_objective: row.try_get("objetivo_general")?,
        procedure: row.try_get("objetivo_procedimiento")?,
        test_type: parse_pg_test_type(id, test_type.as_deref()),
        turnaround_days: row.try_get("objetivo_dias_entrega_resultados")?,
    }))
}

#[async_trait]
impl ObjectiveStore for PgStorage {
    async fn list_objectives(&self) -> Result<Vec<Objective>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {OBJECTIVE_COLUMNS} FROM {OBJECTIVES_TABLE} ORDER BY objetivo_id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_objective).collect()
    }

    async fn update_objective(&self, objective: &Objective) -> Result<(), StorageError> {
        let details = &objective.details;
        let result = sqlx::query(&format!(
            "UPDATE {OBJECTIVES_TABLE} SET
               objetivo_nombre = $1,
               objetivo_descripcion = $2,
               objetivo_general = $3,
               objetivo_procedimiento = $4,
               objetivo_tipo_prueba = $5,
               objetivo_dias_entrega_resultados = $6
             WHERE objetivo_id = $7"
        ))
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.general_objective)
        .bind(&details.procedure)
        .bind(details.test_type.map(|t| t.as_str()))
        .bind(details.turnaround_days)
        .bind(objective.id)
        .execute(&self.pool)
        .await?;
        require_row(result.rows_affected(), "objective", objective.id)
    }

    async fn insert_objective(&self, objective: &ObjectiveDetails) -> Result<i64, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO {OBJECTIVES_TABLE} (
               objetivo_nombre, objetivo_descripcion, objetivo_general,
               objetivo_procedimiento, objetivo_tipo_prueba, objetivo_dias_entrega_resultados)
             VALUES ($1,$2,$3,$4,$5,$6)
             RETURNING objetivo_id::bigint"
        ))
        .bind(&objective.name)
        .bind(&objective.description)
        .bind(&objective.general_objective)
        .bind(&objective.procedure)
        .bind(objective.test_type.map(|t| t.as_str()))
        .bind(objective.turnaround_days)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get(0)?)
    }
}
