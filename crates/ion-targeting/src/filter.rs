//! Protocol filters.
//!
//! A point survives only if it passes the filter of every protocol in the
//! list. Ranking-only and unknown protocols pass everything.

use ion_core::enums::Protocol;
use ion_core::types::ScanPoint;

/// Whether `point` passes the filter for a single protocol.
pub fn passes(protocol: &Protocol, point: &ScanPoint) -> bool {
    match protocol {
        Protocol::AssistAllies => point.allies > 0,
        Protocol::AvoidCrossfire => point.allies == 0,
        Protocol::PrioritizeMech => point.is_mech(),
        Protocol::AvoidMech => !point.is_mech(),
        Protocol::ClosestEnemies | Protocol::FurthestEnemies | Protocol::Other(_) => true,
    }
}

/// Whether `point` passes every protocol.
pub fn passes_all(protocols: &[Protocol], point: &ScanPoint) -> bool {
    protocols.iter().all(|protocol| passes(protocol, point))
}

/// Keep the points that pass every protocol, preserving input order.
pub fn apply(points: &[ScanPoint], protocols: &[Protocol]) -> Vec<ScanPoint> {
    points
        .iter()
        .filter(|point| passes_all(protocols, point))
        .cloned()
        .collect()
}
