//! Temperature list query tests
//!
//! The list endpoint builds its SQL conditionally. These tests check the
//! generated statement without a database.

use chrono::NaiveDate;
use climate_records_backend::{models::TemperatureFilter, services::TemperatureService};
use proptest::prelude::*;

fn normalized(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_no_filters() {
        let query = TemperatureService::list_query(&TemperatureFilter::default());
        let sql = normalized(query.sql());

        assert!(sql.contains("JOIN locations l ON t.id_local = l.id_local"));
        assert!(sql.ends_with("WHERE 1=1 ORDER BY t.data DESC, t.horario DESC"));
        assert!(!sql.contains('$'));
    }

    #[test]
    fn test_all_filters_in_order() {
        let filter = TemperatureFilter {
            start_date: Some(date("2024-01-01")),
            end_date: Some(date("2024-01-31")),
            location_id: Some(7),
        };
        let query = TemperatureService::list_query(&filter);
        let sql = normalized(query.sql());

        assert!(sql.ends_with(
            "WHERE 1=1 AND t.data >= $1 AND t.data <= $2 AND t.id_local = $3 \
             ORDER BY t.data DESC, t.horario DESC"
        ));
    }

    #[test]
    fn test_location_only() {
        let filter = TemperatureFilter {
            location_id: Some(2),
            ..Default::default()
        };
        let query = TemperatureService::list_query(&filter);
        let sql = normalized(query.sql());

        assert!(sql.contains("WHERE 1=1 AND t.id_local = $1 ORDER BY"));
        assert!(!sql.contains("t.data >="));
    }

    #[test]
    fn test_end_date_only() {
        let filter = TemperatureFilter {
            end_date: Some(date("2024-06-30")),
            ..Default::default()
        };
        let query = TemperatureService::list_query(&filter);

        assert!(normalized(query.sql()).contains("WHERE 1=1 AND t.data <= $1 ORDER BY"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn filter_strategy() -> impl Strategy<Value = TemperatureFilter> {
        (
            proptest::option::of(0i64..365),
            proptest::option::of(0i64..365),
            proptest::option::of(1i32..1000),
        )
            .prop_map(|(start, end, location_id)| {
                let base = date("2024-01-01");
                TemperatureFilter {
                    start_date: start.map(|d| base + chrono::Duration::days(d)),
                    end_date: end.map(|d| base + chrono::Duration::days(d)),
                    location_id,
                }
            })
    }

    proptest! {
        /// One placeholder per present filter, numbered consecutively
        #[test]
        fn prop_one_placeholder_per_filter(filter in filter_strategy()) {
            let expected = [
                filter.start_date.is_some(),
                filter.end_date.is_some(),
                filter.location_id.is_some(),
            ]
            .iter()
            .filter(|present| **present)
            .count();

            let query = TemperatureService::list_query(&filter);
            let sql = query.sql();

            prop_assert_eq!(sql.matches('$').count(), expected);
            for n in 1..=expected {
                let placeholder = format!("${}", n);
                prop_assert!(sql.contains(&placeholder));
            }
            prop_assert!(sql.trim_end().ends_with("ORDER BY t.data DESC, t.horario DESC"));
        }
    }
}
