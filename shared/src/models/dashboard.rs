//! Dashboard aggregate models

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Temperature;

/// Number of readings listed under `ultimasMedicoes`
pub const DASHBOARD_RECENT_READINGS: i64 = 5;

/// Decimal places of `mediaTemperatura`, the scale of the stored readings
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// Trim the store's `AVG` result to the readings' own scale
pub fn round_average(average: Decimal) -> Decimal {
    average.round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Read-only aggregate view over both tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalLocais")]
    pub total_locations: i64,
    #[serde(rename = "totalTemperaturas")]
    pub total_readings: i64,
    /// Mean over every reading; `null` when the table is empty
    #[serde(rename = "mediaTemperatura")]
    pub average_temperature: Option<Decimal>,
    /// Most recent readings, newest first, with `local_nome` set
    #[serde(rename = "ultimasMedicoes")]
    pub recent_readings: Vec<Temperature>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_average_rounds_to_reading_scale() {
        let average = Decimal::from_str("14.3550000000000000").unwrap();
        assert_eq!(round_average(average).to_string(), "14.36");

        let negative = Decimal::from_str("-2.3450000000000000").unwrap();
        assert_eq!(round_average(negative).to_string(), "-2.35");
    }

    #[test]
    fn test_summary_field_names() {
        let summary = DashboardSummary {
            total_locations: 3,
            total_readings: 0,
            average_temperature: None,
            recent_readings: vec![],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalLocais"], 3);
        assert_eq!(json["totalTemperaturas"], 0);
        assert!(json["mediaTemperatura"].is_null());
        assert_eq!(json["ultimasMedicoes"], serde_json::json!([]));
    }
}
