use crate::domain::candidate::PredictedPass;
use crate::domain::strategy::strategy_trait::{PriorityKey, SelectionStrategy};
use crate::domain::time_range::TimeRange;

/// Best reception first: passes are ranked by their peak elevation, highest first.
///
/// A loser keeps the remainder that still contains its own moment of peak elevation. If the
/// winner swallowed that moment the loser is dropped, even when some remainder would be long enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxElevationStrategy;

impl SelectionStrategy for MaxElevationStrategy {
    fn name(&self) -> &'static str {
        "max-elevation"
    }

    fn priority_key(&self, pass: &PredictedPass) -> PriorityKey {
        PriorityKey::Score(-pass.max_elevation_deg)
    }

    fn resolve(&self, loser: &PredictedPass, _winner: &TimeRange, left: Option<TimeRange>, right: Option<TimeRange>) -> Option<TimeRange> {
        [left, right].into_iter().flatten().find(|remainder| remainder.contains(loser.max_elevation_at))
    }
}
