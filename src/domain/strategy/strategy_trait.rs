use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::domain::candidate::PredictedPass;
use crate::domain::time_range::TimeRange;

/// Sort key deciding the processing order of candidates. Lower keys are processed first.
#[derive(Debug, Clone, Copy)]
pub enum PriorityKey {
    /// Earlier instants win.
    Instant(DateTime<Utc>),
    /// Lower scores win. Compared with IEEE 754 total ordering, so the key is totally ordered even for NaN.
    Score(f64),
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PriorityKey::Instant(a), PriorityKey::Instant(b)) => a.cmp(b),
            (PriorityKey::Score(a), PriorityKey::Score(b)) => a.total_cmp(b),
            // A strategy only ever produces one kind of key; keep the order total anyway.
            (PriorityKey::Instant(_), PriorityKey::Score(_)) => Ordering::Less,
            (PriorityKey::Score(_), PriorityKey::Instant(_)) => Ordering::Greater,
        }
    }
}

/// Policy used by the scheduler to order candidates and to settle conflicts.
///
/// Implementations must be stateless: the same strategy value is reused for every candidate
/// of a run and may be shared between runs on different threads.
pub trait SelectionStrategy: Send + Sync + Debug {
    /// Name under which the strategy is selected in the configuration.
    fn name(&self) -> &'static str;

    fn priority_key(&self, pass: &PredictedPass) -> PriorityKey;

    /// Decides which part of a losing candidate survives a collision with `winner`.
    ///
    /// `left` and `right` are the remainders of the loser's current range before and after the
    /// winner, as produced by [`TimeRange::subtract`]. The returned range must be one of them,
    /// `None` eliminates the loser.
    fn resolve(&self, loser: &PredictedPass, winner: &TimeRange, left: Option<TimeRange>, right: Option<TimeRange>) -> Option<TimeRange>;
}
