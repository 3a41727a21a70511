//! Client-side view state for the dashboard
//!
//! The browser fetches the location list and the full reading list in
//! parallel; [`DashboardView::build`] turns the two lists into everything the
//! dashboard renders.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::Location;
use crate::stats::{self, ChartPoint, TimedReading, CHART_WINDOW, ROLLING_WINDOW};
use crate::types::clock_time;

/// Shown when a reading's location is not in the fetched list
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A reading as received by the client.
///
/// `temperatura` is kept as raw JSON: decimal columns arrive as strings and
/// hand-edited data may hold anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    #[serde(default)]
    pub id: Option<i32>,
    pub data: NaiveDate,
    #[serde(with = "clock_time")]
    pub horario: NaiveTime,
    #[serde(default)]
    pub temperatura: serde_json::Value,
    pub id_local: i32,
    #[serde(default)]
    pub local_nome: Option<String>,
}

/// Read a JSON value as a number. Numbers and numeric strings qualify.
pub fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

impl TimedReading for ReadingRecord {
    fn recorded_at(&self) -> NaiveDateTime {
        self.data.and_time(self.horario)
    }

    fn numeric_value(&self) -> Option<f64> {
        coerce_numeric(&self.temperatura)
    }
}

/// Name of the location with `id_local`, or [`UNKNOWN_LOCATION`]
pub fn location_name(locations: &[Location], id_local: i32) -> &str {
    locations
        .iter()
        .find(|l| l.id_local == id_local)
        .map(|l| l.nome.as_str())
        .unwrap_or(UNKNOWN_LOCATION)
}

/// The "latest measurement" card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestReadingView {
    pub temperatura: serde_json::Value,
    pub location_name: String,
    pub data: NaiveDate,
    #[serde(with = "clock_time")]
    pub horario: NaiveTime,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub location_count: usize,
    pub reading_count: usize,
    /// Mean of the newest readings, rounded to one decimal; `None` renders as "N/D"
    pub rolling_average: Option<f64>,
    pub latest: Option<LatestReadingView>,
    pub chart: Vec<ChartPoint>,
}

impl DashboardView {
    pub fn build(locations: &[Location], readings: &[ReadingRecord]) -> Self {
        let latest = stats::latest_reading(readings).map(|r| LatestReadingView {
            temperatura: r.temperatura.clone(),
            location_name: location_name(locations, r.id_local).to_string(),
            data: r.data,
            horario: r.horario,
        });

        Self {
            location_count: locations.len(),
            reading_count: readings.len(),
            rolling_average: stats::rolling_average(readings, ROLLING_WINDOW)
                .map(|avg| stats::round_to(avg, 1)),
            latest,
            chart: stats::chart_series(readings, CHART_WINDOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(
        id: i32,
        date: &str,
        time: &str,
        value: serde_json::Value,
        id_local: i32,
    ) -> ReadingRecord {
        ReadingRecord {
            id: Some(id),
            data: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            horario: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            temperatura: value,
            id_local,
            local_nome: None,
        }
    }

    fn location(id_local: i32, nome: &str) -> Location {
        Location {
            id_local,
            nome: nome.to_string(),
            estado: None,
            pais: "Brasil".to_string(),
        }
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(&json!(21.5)), Some(21.5));
        assert_eq!(coerce_numeric(&json!("21.50")), Some(21.5));
        assert_eq!(coerce_numeric(&json!(" -4 ")), Some(-4.0));
        assert_eq!(coerce_numeric(&json!("abc")), None);
        assert_eq!(coerce_numeric(&json!("")), None);
        assert_eq!(coerce_numeric(&json!(null)), None);
        assert_eq!(coerce_numeric(&json!(true)), None);
        assert_eq!(coerce_numeric(&json!("NaN")), None);
    }

    #[test]
    fn test_record_parses_server_json() {
        let raw = r#"{"id":1,"data":"2024-06-01","horario":"12:00:00","temperatura":"18.40","id_local":3,"local_nome":"Curitiba"}"#;
        let record: ReadingRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.numeric_value(), Some(18.4));
        assert_eq!(record.local_nome.as_deref(), Some("Curitiba"));
    }

    #[test]
    fn test_non_numeric_excluded_from_average() {
        let readings = vec![
            record(1, "2024-06-01", "10:00:00", json!("20"), 1),
            record(2, "2024-06-02", "10:00:00", json!("n/a"), 1),
            record(3, "2024-06-03", "10:00:00", json!(23), 1),
        ];
        let view = DashboardView::build(&[], &readings);
        assert_eq!(view.rolling_average, Some(21.5));
        assert_eq!(view.reading_count, 3);
    }

    #[test]
    fn test_dashboard_view_latest_with_location_name() {
        let locations = vec![location(1, "Recife"), location(2, "Manaus")];
        let readings = vec![
            record(1, "2024-06-01", "10:00:00", json!(30.1), 1),
            record(2, "2024-06-02", "09:00:00", json!(31.7), 2),
        ];
        let view = DashboardView::build(&locations, &readings);
        let latest = view.latest.unwrap();
        assert_eq!(latest.location_name, "Manaus");
        assert_eq!(latest.temperatura, json!(31.7));
        assert_eq!(view.location_count, 2);
        assert_eq!(view.rolling_average, Some(30.9));
    }

    #[test]
    fn test_dashboard_view_unknown_location() {
        let readings = vec![record(1, "2024-06-01", "10:00:00", json!(12), 99)];
        let view = DashboardView::build(&[location(1, "Recife")], &readings);
        assert_eq!(view.latest.unwrap().location_name, UNKNOWN_LOCATION);
    }

    #[test]
    fn test_dashboard_view_empty() {
        let view = DashboardView::build(&[], &[]);
        assert!(view.latest.is_none());
        assert!(view.rolling_average.is_none());
        assert!(view.chart.is_empty());
    }
}
