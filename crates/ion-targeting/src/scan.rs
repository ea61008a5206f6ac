//! Raw scan normalization.

use ion_core::commands::{AttackRequest, RawScanEntry};
use ion_core::enums::Protocol;
use ion_core::error::IonError;
use ion_core::types::ScanPoint;

/// A validated attack request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScan {
    pub protocols: Vec<Protocol>,
    pub points: Vec<ScanPoint>,
}

/// Turn a raw request into scan points and protocols.
///
/// `allies` defaults to 0. Coordinates and enemies are required, and
/// coordinates must be finite.
pub fn parse_scan(request: AttackRequest) -> Result<ParsedScan, IonError> {
    let protocols = request
        .protocols
        .ok_or_else(|| IonError::InvalidScanData("missing field `protocols`".into()))?;
    let scan = request
        .scan
        .ok_or_else(|| IonError::InvalidScanData("missing field `scan`".into()))?;

    let points = scan
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| normalize_entry(idx, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedScan { protocols, points })
}

fn normalize_entry(idx: usize, entry: RawScanEntry) -> Result<ScanPoint, IonError> {
    let missing = |field: &str| IonError::InvalidScanData(format!("scan[{idx}]: missing {field}"));

    let coords = entry.coordinates.ok_or_else(|| missing("coordinates"))?;
    let x = coords.x.ok_or_else(|| missing("coordinates.x"))?;
    let y = coords.y.ok_or_else(|| missing("coordinates.y"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(IonError::InvalidScanData(format!(
            "scan[{idx}]: coordinates must be finite"
        )));
    }
    let enemies = entry.enemies.ok_or_else(|| missing("enemies"))?;

    Ok(ScanPoint::new(x, y, enemies, entry.allies.unwrap_or(0)))
}
