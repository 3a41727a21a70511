//! Required-field checks for the record forms
//!
//! These mirror the `required` attributes on the browser forms. The API
//! itself stores whatever it is sent.

use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::{LocationInput, TemperatureForm};

fn failing_fields<T: Validate>(form: &T) -> Vec<&'static str> {
    match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let mut fields: Vec<&'static str> = errors.field_errors().into_keys().collect();
            fields.sort_unstable();
            fields
        }
    }
}

/// Names of the location form fields that fail validation, sorted
pub fn missing_location_fields(input: &LocationInput) -> Vec<&'static str> {
    failing_fields(input)
}

/// Names of the temperature form fields left empty, sorted
pub fn missing_temperature_fields(form: &TemperatureForm) -> Vec<&'static str> {
    failing_fields(form)
}

/// Validate a location form before submission
pub fn validate_location_input(input: &LocationInput) -> ClientResult<()> {
    input
        .validate()
        .map_err(|errors| ClientError::Validation(errors.to_string()))
}

/// Validate a temperature form before submission
pub fn validate_temperature_form(form: &TemperatureForm) -> ClientResult<()> {
    form
        .validate()
        .map_err(|errors| ClientError::Validation(errors.to_string()))
}
