use crate::domain::candidate::PredictedPass;
use crate::domain::strategy::strategy_trait::{PriorityKey, SelectionStrategy};
use crate::domain::time_range::TimeRange;

/// First come, first served: the pass with the earliest AOS owns the receiver.
///
/// A loser is only credited with the time after the winner's LOS. The part before the winner's
/// AOS is discarded even if it is valid, so a competitor never gets split around a winner.
#[derive(Debug, Clone, Copy, Default)]
pub struct AosPriorityStrategy;

impl SelectionStrategy for AosPriorityStrategy {
    fn name(&self) -> &'static str {
        "aos"
    }

    fn priority_key(&self, pass: &PredictedPass) -> PriorityKey {
        PriorityKey::Instant(pass.aos)
    }

    fn resolve(&self, _loser: &PredictedPass, _winner: &TimeRange, _left: Option<TimeRange>, right: Option<TimeRange>) -> Option<TimeRange> {
        right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minute)
    }

    #[test]
    fn test_earlier_aos_sorts_first() {
        let early = PredictedPass::with_peak_fraction(at(0), at(5), 10.0, 0.5);
        let late = PredictedPass::with_peak_fraction(at(1), at(2), 90.0, 0.5);

        let strategy = AosPriorityStrategy;
        assert!(strategy.priority_key(&early) < strategy.priority_key(&late));
    }

    #[test]
    fn test_resolve_keeps_only_the_right_remainder() {
        let loser = PredictedPass::with_peak_fraction(at(0), at(10), 10.0, 0.1);
        let winner = TimeRange::new(at(3), at(5));
        let left = Some(TimeRange::new(at(0), at(3)));
        let right = Some(TimeRange::new(at(5), at(10)));

        let strategy = AosPriorityStrategy;
        assert_eq!(strategy.resolve(&loser, &winner, left, right), right);
        assert_eq!(strategy.resolve(&loser, &winner, left, None), None, "left remainder must never be picked");
    }
}
