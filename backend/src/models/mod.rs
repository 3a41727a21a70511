//! Database row types for the Climate Records API
//!
//! Re-exports the wire models from the shared crate and adds the sqlx row
//! shapes that map onto them.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

pub use shared::models::*;

/// Row of the `locations` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocationRow {
    pub id_local: i32,
    pub nome: String,
    pub estado: Option<String>,
    pub pais: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id_local: row.id_local,
            nome: row.nome,
            estado: row.estado,
            pais: row.pais,
        }
    }
}

/// Row of `temperatures` joined with its location
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TemperatureRow {
    pub id: i32,
    pub data: NaiveDate,
    pub horario: NaiveTime,
    pub temperatura: Decimal,
    pub id_local: i32,
    pub local_nome: Option<String>,
    pub local_estado: Option<String>,
    pub local_pais: Option<String>,
}

impl From<TemperatureRow> for Temperature {
    fn from(row: TemperatureRow) -> Self {
        let local = match (&row.local_nome, row.local_pais) {
            (Some(nome), Some(pais)) => Some(Location {
                id_local: row.id_local,
                nome: nome.clone(),
                estado: row.local_estado,
                pais,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            data: row.data,
            horario: row.horario,
            temperatura: row.temperatura,
            id_local: row.id_local,
            local_nome: row.local_nome,
            local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nome: Option<&str>, pais: Option<&str>) -> TemperatureRow {
        TemperatureRow {
            id: 10,
            data: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            horario: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            temperatura: Decimal::new(1450, 2),
            id_local: 3,
            local_nome: nome.map(str::to_string),
            local_estado: Some("SC".to_string()),
            local_pais: pais.map(str::to_string),
        }
    }

    #[test]
    fn test_joined_row_carries_location() {
        let reading = Temperature::from(row(Some("Florianópolis"), Some("Brasil")));
        assert_eq!(reading.local_nome.as_deref(), Some("Florianópolis"));
        let local = reading.local.unwrap();
        assert_eq!(local.id_local, 3);
        assert_eq!(local.estado.as_deref(), Some("SC"));
        assert_eq!(local.pais, "Brasil");
    }

    #[test]
    fn test_row_without_join_has_no_location() {
        let reading = Temperature::from(row(None, None));
        assert!(reading.local.is_none());
        assert!(reading.local_nome.is_none());
    }
}
