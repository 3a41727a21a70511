//! Domain models for the Climate Records platform

mod dashboard;
mod location;
mod temperature;

pub use dashboard::*;
pub use location::*;
pub use temperature::*;
