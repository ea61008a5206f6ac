//! Target selection for the ion cannon service.
//!
//! Normalizes raw scans, filters scan points through every requested
//! protocol, ranks the survivors by the first protocol, and picks one
//! target. Pure and synchronous: no cannon state lives here.

pub mod filter;
pub mod ranking;
pub mod scan;
pub mod selection;

pub use ion_core as core;
pub use scan::{parse_scan, ParsedScan};
pub use selection::select_target;
