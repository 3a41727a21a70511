//! Location service: CRUD over the `locations` table

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Location, LocationInput, LocationRow};

/// Location service for managing monitoring sites
#[derive(Clone)]
pub struct LocationService {
    db: PgPool,
}

impl LocationService {
    /// Create a new LocationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all locations ordered by name
    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id_local, nome, estado, pais
            FROM locations
            ORDER BY nome ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// Get a location by ID
    pub async fn get_location(&self, id_local: i32) -> AppResult<Location> {
        let row = sqlx::query_as::<_, LocationRow>(
            "SELECT id_local, nome, estado, pais FROM locations WHERE id_local = $1",
        )
        .bind(id_local)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound("Location"))?;

        Ok(row.into())
    }

    /// Create a new location
    pub async fn create_location(&self, input: LocationInput) -> AppResult<Location> {
        let id_local = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO locations (nome, estado, pais)
            VALUES ($1, $2, $3)
            RETURNING id_local
            "#,
        )
        .bind(&input.nome)
        .bind(&input.estado)
        .bind(&input.pais)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(id_local, "Location created");
        Ok(input.into_location(id_local))
    }

    /// Replace every field of a location
    pub async fn replace_location(
        &self,
        id_local: i32,
        input: LocationInput,
    ) -> AppResult<Location> {
        let result = sqlx::query(
            r#"
            UPDATE locations
            SET nome = $1, estado = $2, pais = $3
            WHERE id_local = $4
            "#,
        )
        .bind(&input.nome)
        .bind(&input.estado)
        .bind(&input.pais)
        .bind(id_local)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location"));
        }

        tracing::info!(id_local, "Location replaced");
        Ok(input.into_location(id_local))
    }

    /// Delete a location
    pub async fn delete_location(&self, id_local: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id_local = $1")
            .bind(id_local)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location"));
        }

        tracing::info!(id_local, "Location deleted");
        Ok(())
    }
}
