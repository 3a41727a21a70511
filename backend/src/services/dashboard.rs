//! Dashboard aggregation service
//!
//! Four independent reads with no transaction: under concurrent writes the
//! counts, the mean and the recent list may disagree with each other.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::temperature::SELECT_JOINED;
use crate::error::AppResult;
use crate::models::{
    round_average, DashboardSummary, Temperature, TemperatureRow, DASHBOARD_RECENT_READINGS,
};

/// Dashboard service for the aggregate view
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Counts, overall mean (at the readings' scale) and the most recent readings
    pub async fn get_summary(&self) -> AppResult<DashboardSummary> {
        let total_locations = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.db)
            .await?;

        let total_readings = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM temperatures")
            .fetch_one(&self.db)
            .await?;

        let average_temperature =
            sqlx::query_scalar::<_, Option<Decimal>>("SELECT AVG(temperatura) FROM temperatures")
                .fetch_one(&self.db)
                .await?;

        let recent_readings = sqlx::query_as::<_, TemperatureRow>(&format!(
            "{SELECT_JOINED} ORDER BY t.data DESC, t.horario DESC LIMIT $1"
        ))
        .bind(DASHBOARD_RECENT_READINGS)
        .fetch_all(&self.db)
        .await?;

        Ok(DashboardSummary {
            total_locations,
            total_readings,
            average_temperature: average_temperature.map(round_average),
            recent_readings: recent_readings.into_iter().map(Temperature::from).collect(),
        })
    }
}
