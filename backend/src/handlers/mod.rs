//! HTTP handlers for the Climate Records API

mod dashboard;
mod health;
mod location;
mod temperature;

use serde::Serialize;

pub use dashboard::*;
pub use health::*;
pub use location::*;
pub use temperature::*;

/// Body returned by successful deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
