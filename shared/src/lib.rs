//! Shared types and models for the Climate Records platform
//!
//! This crate contains the wire types shared between the backend and the
//! browser client (via WASM), together with the statistics the dashboard
//! computes locally over fetched reading lists.

pub mod client;
pub mod error;
pub mod models;
pub mod stats;
pub mod types;
pub mod validation;

pub use client::*;
pub use error::*;
pub use models::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
