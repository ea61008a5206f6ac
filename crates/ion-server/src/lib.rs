//! Ion cannon HTTP service.
//!
//! This crate wires the fire control crates to the outside world: an axum
//! router for the request boundary, configuration loading, and logging
//! bootstrap.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;

pub use ion_core as core;
