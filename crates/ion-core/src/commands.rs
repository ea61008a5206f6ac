//! Inbound requests accepted at the service boundary.
//!
//! Fields are optional at this layer so that a missing field becomes an
//! `InvalidScanData` error from scan parsing rather than an opaque
//! deserialization failure.

use serde::{Deserialize, Serialize};

use crate::enums::Protocol;
use crate::types::{Coordinates, EnemyInfo};

/// `POST /api/attack` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackRequest {
    pub protocols: Option<Vec<Protocol>>,
    pub scan: Option<Vec<RawScanEntry>>,
}

/// One raw scan entry before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScanEntry {
    pub coordinates: Option<RawCoordinates>,
    pub enemies: Option<EnemyInfo>,
    pub allies: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawCoordinates {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// `POST /api/cannons/:cannon_id/fire` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireRequest {
    pub target: Coordinates,
}

/// One entry of the cannon catalog, as read from TOML at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default = "default_available")]
    pub available: bool,
    pub fire_time: f64,
    pub generation: u32,
}

fn default_available() -> bool {
    true
}
