//! Temperature reading models

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Location;
use crate::types::clock_time;

/// A dated, timed temperature measurement tied to one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub id: i32,
    pub data: NaiveDate,
    #[serde(with = "clock_time")]
    pub horario: NaiveTime,
    pub temperatura: Decimal,
    pub id_local: i32,
    /// Name of the joined location, present on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<Location>,
}

impl Temperature {
    pub fn recorded_at(&self) -> NaiveDateTime {
        self.data.and_time(self.horario)
    }
}

/// Body of a temperature create or replace request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub data: NaiveDate,
    #[serde(with = "clock_time")]
    pub horario: NaiveTime,
    pub temperatura: Decimal,
    pub id_local: i32,
}

/// Temperature form as the browser holds it, every field a raw input value.
///
/// Absent fields deserialize as empty so they are reported as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TemperatureForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    pub data: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Time is required"))]
    pub horario: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Temperature is required"))]
    pub temperatura: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Location is required"))]
    pub id_local: String,
}

/// Raw `GET /api/temperatures` query string.
///
/// Values stay as strings so that an empty parameter counts as absent;
/// [`TemperatureQuery::into_filter`] does the parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location_id: Option<String>,
}

/// Parsed temperature list filters, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemperatureFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location_id: Option<i32>,
}

impl TemperatureQuery {
    pub fn into_filter(self) -> Result<TemperatureFilter, String> {
        Ok(TemperatureFilter {
            start_date: parse_date("startDate", self.start_date)?,
            end_date: parse_date("endDate", self.end_date)?,
            location_id: match present(self.location_id) {
                Some(raw) => Some(
                    raw.parse::<i32>()
                        .map_err(|_| format!("locationId must be an integer, got {raw:?}"))?,
                ),
                None => None,
            },
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(name: &str, value: Option<String>) -> Result<Option<NaiveDate>, String> {
    match present(value) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("{name} must be a YYYY-MM-DD date, got {raw:?}")),
        None => Ok(None),
    }
}
