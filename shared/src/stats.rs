//! Derived statistics over temperature readings
//!
//! Everything here works on an in-memory list that the client has already
//! fetched. Ordering is always by the `(date, time)` composite.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::Temperature;
use crate::types::DateRange;

/// Readings considered by the dashboard rolling average
pub const ROLLING_WINDOW: usize = 30;

/// Readings plotted on the dashboard chart
pub const CHART_WINDOW: usize = 30;

/// A reading with a timestamp and a value that may or may not be numeric
pub trait TimedReading {
    fn recorded_at(&self) -> NaiveDateTime;

    /// The value as a number, or `None` if it cannot be read as one
    fn numeric_value(&self) -> Option<f64>;

    fn date(&self) -> NaiveDate {
        self.recorded_at().date()
    }
}

impl TimedReading for Temperature {
    fn recorded_at(&self) -> NaiveDateTime {
        Temperature::recorded_at(self)
    }

    fn numeric_value(&self) -> Option<f64> {
        self.temperatura.to_f64()
    }
}

/// The most recent reading. On ties the earliest in list order wins.
pub fn latest_reading<R: TimedReading>(readings: &[R]) -> Option<&R> {
    readings.iter().fold(None, |latest, current| match latest {
        Some(latest) if current.recorded_at() <= latest.recorded_at() => Some(latest),
        _ => Some(current),
    })
}

/// Stable sort, newest first
pub fn sort_most_recent_first<R: TimedReading>(readings: &mut [R]) {
    readings.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
}

/// The `limit` newest readings, newest first
pub fn most_recent<R: TimedReading + Clone>(readings: &[R], limit: usize) -> Vec<R> {
    let mut sorted = readings.to_vec();
    sort_most_recent_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// Mean of the `window` newest readings that have a numeric value.
///
/// Non-numeric readings are dropped before the window is taken. Returns
/// `None` when no numeric reading exists.
pub fn rolling_average<R: TimedReading>(readings: &[R], window: usize) -> Option<f64> {
    let mut values: Vec<(NaiveDateTime, f64)> = readings
        .iter()
        .filter_map(|r| r.numeric_value().map(|v| (r.recorded_at(), v)))
        .collect();
    values.sort_by(|a, b| b.0.cmp(&a.0));
    values.truncate(window);

    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|(_, v)| v).sum();
    Some(sum / values.len() as f64)
}

/// Readings whose date falls inside the inclusive range, in list order
pub fn filter_by_date_range<'a, R: TimedReading>(
    readings: &'a [R],
    range: &DateRange,
) -> Vec<&'a R> {
    readings.iter().filter(|r| range.contains(r.date())).collect()
}

/// Round for display, e.g. `round_to(21.456, 1) == 21.5`
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A point on the temperature trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// `dd/mm/yyyy HH:MM:SS`
    pub label: String,
    pub recorded_at: NaiveDateTime,
    pub value: Option<f64>,
}

/// Chart series from the first `limit` readings of the list, oldest first
pub fn chart_series<R: TimedReading>(readings: &[R], limit: usize) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = readings
        .iter()
        .take(limit)
        .map(|r| {
            let recorded_at = r.recorded_at();
            ChartPoint {
                label: recorded_at.format("%d/%m/%Y %H:%M:%S").to_string(),
                recorded_at,
                value: r.numeric_value(),
            }
        })
        .collect();
    points.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn reading(id: i32, date: &str, time: &str, value: &str) -> Temperature {
        Temperature {
            id,
            data: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            horario: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            temperatura: Decimal::from_str(value).unwrap(),
            id_local: 1,
            local_nome: None,
            local: None,
        }
    }

    #[test]
    fn test_latest_reading_uses_date_then_time() {
        let readings = vec![
            reading(1, "2024-03-01", "23:00:00", "10"),
            reading(2, "2024-03-02", "01:00:00", "11"),
            reading(3, "2024-03-02", "00:30:00", "12"),
        ];
        assert_eq!(latest_reading(&readings).unwrap().id, 2);
    }

    #[test]
    fn test_latest_reading_tie_keeps_first() {
        let readings = vec![
            reading(1, "2024-03-02", "08:00:00", "10"),
            reading(2, "2024-03-02", "08:00:00", "11"),
        ];
        assert_eq!(latest_reading(&readings).unwrap().id, 1);
    }

    #[test]
    fn test_latest_reading_empty() {
        let readings: Vec<Temperature> = vec![];
        assert!(latest_reading(&readings).is_none());
    }

    #[test]
    fn test_rolling_average_fewer_than_window() {
        let readings = vec![
            reading(1, "2024-03-01", "08:00:00", "10"),
            reading(2, "2024-03-02", "08:00:00", "20"),
            reading(3, "2024-03-03", "08:00:00", "30"),
        ];
        assert_eq!(rolling_average(&readings, ROLLING_WINDOW), Some(20.0));
    }

    #[test]
    fn test_rolling_average_uses_newest_only() {
        let readings = vec![
            reading(1, "2024-03-01", "08:00:00", "100"),
            reading(2, "2024-03-02", "08:00:00", "20"),
            reading(3, "2024-03-03", "08:00:00", "30"),
        ];
        assert_eq!(rolling_average(&readings, 2), Some(25.0));
    }

    #[test]
    fn test_rolling_average_empty() {
        let readings: Vec<Temperature> = vec![];
        assert_eq!(rolling_average(&readings, ROLLING_WINDOW), None);
    }

    #[test]
    fn test_most_recent_is_descending() {
        let readings = vec![
            reading(1, "2024-03-01", "08:00:00", "1"),
            reading(2, "2024-03-03", "07:00:00", "2"),
            reading(3, "2024-03-03", "09:00:00", "3"),
            reading(4, "2024-03-02", "08:00:00", "4"),
        ];
        let ids: Vec<i32> = most_recent(&readings, 3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        let readings = vec![
            reading(1, "2024-02-29", "08:00:00", "1"),
            reading(2, "2024-03-01", "00:00:00", "2"),
            reading(3, "2024-03-31", "23:59:59", "3"),
            reading(4, "2024-04-01", "00:00:00", "4"),
        ];
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1),
            NaiveDate::from_ymd_opt(2024, 3, 31),
        );
        let ids: Vec<i32> = filter_by_date_range(&readings, &range)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_chart_series_takes_head_then_sorts_ascending() {
        let readings = vec![
            reading(3, "2024-03-03", "08:00:00", "30"),
            reading(2, "2024-03-02", "08:00:00", "20"),
            reading(1, "2024-03-01", "08:00:00", "10"),
        ];
        let series = chart_series(&readings, 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "02/03/2024 08:00:00");
        assert_eq!(series[0].value, Some(20.0));
        assert_eq!(series[1].label, "03/03/2024 08:00:00");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(21.456, 1), 21.5);
        assert_eq!(round_to(-3.04, 1), -3.0);
    }
}
