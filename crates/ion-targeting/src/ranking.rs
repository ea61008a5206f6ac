//! Ranking by the leading protocol.

use std::cmp::Ordering;
use std::collections::HashMap;

use ion_core::enums::Protocol;
use ion_core::types::ScanPoint;

/// Distance-from-origin memo for one selection call, keyed by exact (x, y).
#[derive(Debug, Default)]
pub struct RangeCache {
    ranges: HashMap<(u64, u64), f64>,
}

impl RangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&mut self, point: &ScanPoint) -> f64 {
        *self
            .ranges
            .entry((point.x.to_bits(), point.y.to_bits()))
            .or_insert_with(|| point.range_from_origin())
    }

    /// Number of distinct positions computed so far.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Compare two points under `leading`. `None` keeps input order.
pub fn compare(
    leading: Option<&Protocol>,
    a: &ScanPoint,
    b: &ScanPoint,
    cache: &mut RangeCache,
) -> Ordering {
    match leading {
        Some(Protocol::ClosestEnemies) => cache.range(a).total_cmp(&cache.range(b)),
        Some(Protocol::FurthestEnemies) => cache.range(b).total_cmp(&cache.range(a)),
        Some(Protocol::AssistAllies) => b
            .allies
            .cmp(&a.allies)
            .then_with(|| cache.range(a).total_cmp(&cache.range(b))),
        Some(Protocol::AvoidCrossfire) => a.allies.cmp(&b.allies),
        Some(Protocol::PrioritizeMech) => b.is_mech().cmp(&a.is_mech()),
        Some(Protocol::AvoidMech) => a.is_mech().cmp(&b.is_mech()),
        Some(Protocol::Other(_)) | None => Ordering::Equal,
    }
}

/// Stable sort of `points` by the first protocol only.
pub fn rank(points: &mut [ScanPoint], protocols: &[Protocol], cache: &mut RangeCache) {
    let leading = protocols.first();
    points.sort_by(|a, b| compare(leading, a, b, cache));
}
