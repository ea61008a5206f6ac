//! Target selection: filter by all protocols, rank by the first.

use ion_core::enums::Protocol;
use ion_core::error::IonError;
use ion_core::types::ScanPoint;

use crate::filter;
use crate::ranking::{self, RangeCache};

/// Pick the single target for an attack.
///
/// Filtering is an AND over the whole protocol list; ranking looks only at
/// `protocols[0]`. So `["avoid-crossfire", "closest-enemies"]` keeps
/// ally-free points and orders them by fewest allies, not by distance.
/// Fails with `NoTargetAvailable` if nothing survives the filters.
pub fn select_target(points: &[ScanPoint], protocols: &[Protocol]) -> Result<ScanPoint, IonError> {
    let mut survivors = filter::apply(points, protocols);
    let mut cache = RangeCache::new();
    ranking::rank(&mut survivors, protocols, &mut cache);

    tracing::debug!(
        scanned = points.len(),
        survivors = survivors.len(),
        leading = protocols.first().map(Protocol::tag).unwrap_or("none"),
        "target selection"
    );

    survivors
        .into_iter()
        .next()
        .ok_or(IonError::NoTargetAvailable)
}
