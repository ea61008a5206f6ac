//! Core types and definitions for the ion cannon service.
//!
//! This crate defines the vocabulary shared across all other crates:
//! scan points, protocols, cannon resources, wire requests and responses,
//! the error taxonomy, and constants. It has no dependency on an async
//! runtime or HTTP framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use error::IonError;
