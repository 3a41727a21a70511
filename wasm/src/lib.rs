//! WebAssembly module for the Climate Records Platform
//!
//! Provides client-side computation for:
//! - Dashboard view state (counts, latest reading, rolling average, chart)
//! - Date-range filtering of fetched readings
//! - Page slicing of the records table
//! - Required-field checks on the location and temperature forms
//!
//! Every export takes and returns JSON strings.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::client::*;
pub use shared::models::*;
pub use shared::stats::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::error::{ClientError, ClientResult};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::debug_1(&JsValue::from_str("climate-records wasm module loaded"));
}

fn to_js_error(error: ClientError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn parse_readings(readings_json: &str) -> ClientResult<Vec<ReadingRecord>> {
    Ok(serde_json::from_str(readings_json)?)
}

fn parse_optional_date(value: Option<String>) -> ClientResult<Option<NaiveDate>> {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ClientError::InvalidDate(raw.to_string())),
        None => Ok(None),
    }
}

pub fn dashboard_view_json(locations_json: &str, readings_json: &str) -> ClientResult<String> {
    let locations: Vec<Location> = serde_json::from_str(locations_json)?;
    let readings = parse_readings(readings_json)?;
    Ok(serde_json::to_string(&DashboardView::build(&locations, &readings))?)
}

pub fn latest_reading_json(readings_json: &str) -> ClientResult<String> {
    let readings = parse_readings(readings_json)?;
    Ok(serde_json::to_string(&latest_reading(&readings))?)
}

pub fn rolling_average_of(readings_json: &str, window: usize) -> ClientResult<Option<f64>> {
    let readings = parse_readings(readings_json)?;
    Ok(rolling_average(&readings, window))
}

pub fn filter_readings_json(
    readings_json: &str,
    start_date: Option<String>,
    end_date: Option<String>,
) -> ClientResult<String> {
    let readings = parse_readings(readings_json)?;
    let range = DateRange::new(parse_optional_date(start_date)?, parse_optional_date(end_date)?);
    Ok(serde_json::to_string(&filter_by_date_range(&readings, &range))?)
}

pub fn readings_page_json(readings_json: &str, page: usize) -> ClientResult<String> {
    let readings = parse_readings(readings_json)?;
    let pagination = Pagination::new(page, ITEMS_PER_PAGE);
    let response = PaginatedResponse {
        data: pagination.slice(&readings).to_vec(),
        pagination: pagination.meta(readings.len()),
    };
    Ok(serde_json::to_string(&response)?)
}

pub fn missing_location_fields_json(form_json: &str) -> ClientResult<String> {
    let form: LocationInput = serde_json::from_str(form_json)?;
    Ok(serde_json::to_string(&missing_location_fields(&form))?)
}

pub fn missing_temperature_fields_json(form_json: &str) -> ClientResult<String> {
    let form: TemperatureForm = serde_json::from_str(form_json)?;
    Ok(serde_json::to_string(&missing_temperature_fields(&form))?)
}

/// Build the dashboard view from the fetched location and reading lists
#[wasm_bindgen(js_name = dashboardView)]
pub fn dashboard_view(locations_json: &str, readings_json: &str) -> Result<String, JsValue> {
    dashboard_view_json(locations_json, readings_json).map_err(to_js_error)
}

/// The most recent reading, or `null`
#[wasm_bindgen(js_name = latestReading)]
pub fn latest_reading_js(readings_json: &str) -> Result<String, JsValue> {
    latest_reading_json(readings_json).map_err(to_js_error)
}

/// Mean of the newest `window` numeric readings; `undefined` when there are none
#[wasm_bindgen(js_name = rollingAverage)]
pub fn rolling_average_js(readings_json: &str, window: usize) -> Result<Option<f64>, JsValue> {
    rolling_average_of(readings_json, window).map_err(to_js_error)
}

/// Readings inside the inclusive `[startDate, endDate]` range
#[wasm_bindgen(js_name = filterByDateRange)]
pub fn filter_by_date_range_js(
    readings_json: &str,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<String, JsValue> {
    filter_readings_json(readings_json, start_date, end_date).map_err(to_js_error)
}

/// One page of the records table with pagination metadata
#[wasm_bindgen(js_name = readingsPage)]
pub fn readings_page(readings_json: &str, page: usize) -> Result<String, JsValue> {
    readings_page_json(readings_json, page).map_err(to_js_error)
}

/// Number of record table pages for `total` rows
#[wasm_bindgen(js_name = pageCount)]
pub fn page_count(total: usize) -> usize {
    Pagination::default().total_pages(total)
}

/// Names of the required location form fields left empty
#[wasm_bindgen(js_name = missingLocationFields)]
pub fn missing_location_fields_js(form_json: &str) -> Result<String, JsValue> {
    missing_location_fields_json(form_json).map_err(to_js_error)
}

/// Names of the required temperature form fields left empty
#[wasm_bindgen(js_name = missingTemperatureFields)]
pub fn missing_temperature_fields_js(form_json: &str) -> Result<String, JsValue> {
    missing_temperature_fields_json(form_json).map_err(to_js_error)
}
