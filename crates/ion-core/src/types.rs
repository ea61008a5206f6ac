//! Fundamental scan and resource types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::MECH_ENEMY_TYPE;

/// Cannon identifier as it appears in the catalog (e.g. `"cannon1"`).
pub type ResourceId = String;

/// 2D position on the scan plane. The firing origin is (0, 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    pub fn range_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Enemy presence at a scan point.
///
/// On the wire this is either a bare count (`10`) or an object
/// (`{"type": "mech", "number": 3}`). A bare count carries no type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EnemyField")]
pub struct EnemyInfo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub number: u32,
}

impl EnemyInfo {
    pub fn count(number: u32) -> Self {
        Self { kind: None, number }
    }

    pub fn typed(kind: impl Into<String>, number: u32) -> Self {
        Self {
            kind: Some(kind.into()),
            number,
        }
    }

    pub fn is_mech(&self) -> bool {
        self.kind.as_deref() == Some(MECH_ENEMY_TYPE)
    }
}

/// Both accepted wire shapes of the `enemies` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnemyField {
    Count(u32),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        number: u32,
    },
}

impl From<EnemyField> for EnemyInfo {
    fn from(field: EnemyField) -> Self {
        match field {
            EnemyField::Count(number) => EnemyInfo::count(number),
            EnemyField::Detailed { kind, number } => EnemyInfo { kind, number },
        }
    }
}

/// A normalized scan point. Immutable once produced by scan parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub x: f64,
    pub y: f64,
    pub enemies: EnemyInfo,
    pub allies: u32,
}

impl ScanPoint {
    pub fn new(x: f64, y: f64, enemies: EnemyInfo, allies: u32) -> Self {
        Self {
            x,
            y,
            enemies,
            allies,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }

    /// Euclidean distance from the firing origin.
    pub fn range_from_origin(&self) -> f64 {
        self.coordinates().range_from_origin()
    }

    pub fn is_mech(&self) -> bool {
        self.enemies.is_mech()
    }
}

/// A weapon resource from the static catalog. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    /// Lockout after firing. Built once when the catalog is loaded.
    pub cooldown: Duration,
    /// Generation (tier) of the cannon.
    pub generation: u32,
    /// Availability at startup.
    pub initially_available: bool,
}

/// Live availability of one resource, owned by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub resource_id: ResourceId,
    pub available: bool,
    pub generation: u32,
}

/// Outcome of one attack. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    pub target: ScanPoint,
    pub resource_id: ResourceId,
    pub casualties: u32,
    pub generation: u32,
}

/// What the fire action collaborator reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireReport {
    pub casualties: u32,
    pub generation: u32,
}
