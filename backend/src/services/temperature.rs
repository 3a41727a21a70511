//! Temperature service: CRUD and filtered listing over `temperatures`

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{AppError, AppResult};
use crate::models::{Temperature, TemperatureFilter, TemperatureInput, TemperatureRow};

/// Readings joined with the name and details of their location
pub(crate) const SELECT_JOINED: &str = r#"
    SELECT t.id, t.data, t.horario, t.temperatura, t.id_local,
           l.nome AS local_nome, l.estado AS local_estado, l.pais AS local_pais
    FROM temperatures t
    JOIN locations l ON t.id_local = l.id_local
"#;

/// Temperature service for managing readings
#[derive(Clone)]
pub struct TemperatureService {
    db: PgPool,
}

impl TemperatureService {
    /// Create a new TemperatureService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Build the list query. Each present filter adds one bound `AND` clause.
    pub fn list_query(filter: &TemperatureFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(SELECT_JOINED);
        query.push(" WHERE 1=1");

        if let Some(start_date) = filter.start_date {
            query.push(" AND t.data >= ").push_bind(start_date);
        }
        if let Some(end_date) = filter.end_date {
            query.push(" AND t.data <= ").push_bind(end_date);
        }
        if let Some(location_id) = filter.location_id {
            query.push(" AND t.id_local = ").push_bind(location_id);
        }

        query.push(" ORDER BY t.data DESC, t.horario DESC");
        query
    }

    /// List readings, newest first, narrowed by the optional filters
    pub async fn list_temperatures(
        &self,
        filter: &TemperatureFilter,
    ) -> AppResult<Vec<Temperature>> {
        tracing::debug!(?filter, "Listing temperatures");

        let mut query = Self::list_query(filter);
        let rows = query
            .build_query_as::<TemperatureRow>()
            .fetch_all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Temperature::from).collect())
    }

    /// Get a reading by ID
    pub async fn get_temperature(&self, id: i32) -> AppResult<Temperature> {
        let row = sqlx::query_as::<_, TemperatureRow>(&format!("{SELECT_JOINED} WHERE t.id = $1"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(AppError::NotFound("Temperature record"))?;

        Ok(row.into())
    }

    /// Record a new reading. The location must exist; the store enforces it.
    ///
    /// Returns the stored row, so `temperatura` comes back at the column's scale.
    pub async fn create_temperature(&self, input: TemperatureInput) -> AppResult<Temperature> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO temperatures (data, horario, temperatura, id_local)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(input.data)
        .bind(input.horario)
        .bind(input.temperatura)
        .bind(input.id_local)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(id, id_local = input.id_local, "Temperature recorded");
        self.get_temperature(id).await
    }

    /// Replace every field of a reading
    pub async fn replace_temperature(
        &self,
        id: i32,
        input: TemperatureInput,
    ) -> AppResult<Temperature> {
        let result = sqlx::query(
            r#"
            UPDATE temperatures
            SET data = $1, horario = $2, temperatura = $3, id_local = $4
            WHERE id = $5
            "#,
        )
        .bind(input.data)
        .bind(input.horario)
        .bind(input.temperatura)
        .bind(input.id_local)
        .bind(id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Temperature record"));
        }

        tracing::info!(id, "Temperature replaced");
        self.get_temperature(id).await
    }

    /// Delete a reading
    pub async fn delete_temperature(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM temperatures WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Temperature record"));
        }

        tracing::info!(id, "Temperature deleted");
        Ok(())
    }
}
