//! Data access services for the Climate Records API

pub mod dashboard;
pub mod location;
pub mod temperature;

pub use dashboard::DashboardService;
pub use location::LocationService;
pub use temperature::TemperatureService;
