//! Outbound views returned by the service boundary.

use serde::{Deserialize, Serialize};

use crate::types::{AttackResult, Coordinates, FireReport, ResourceStatus};

/// `POST /api/attack` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResponse {
    pub target: Coordinates,
    pub casualties: u32,
    pub generation: u32,
}

impl From<&AttackResult> for AttackResponse {
    fn from(result: &AttackResult) -> Self {
        Self {
            target: result.target.coordinates(),
            casualties: result.casualties,
            generation: result.generation,
        }
    }
}

/// `POST /api/cannons/:cannon_id/fire` success body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireResponse {
    pub casualties: u32,
    pub generation: u32,
}

impl From<FireReport> for FireResponse {
    fn from(report: FireReport) -> Self {
        Self {
            casualties: report.casualties,
            generation: report.generation,
        }
    }
}

/// `GET /api/cannons/:cannon_id/status` success body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub available: bool,
    pub generation: u32,
}

impl From<&ResourceStatus> for StatusView {
    fn from(status: &ResourceStatus) -> Self {
        Self {
            available: status.available,
            generation: status.generation,
        }
    }
}

/// Catalog entry merged with live availability, for `GET /api/cannons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannonView {
    pub id: String,
    pub available: bool,
    pub fire_time: f64,
    pub generation: u32,
}

/// Failure body for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
