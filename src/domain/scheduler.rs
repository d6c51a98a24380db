use std::fmt::Display;

use crate::domain::candidate::{Allocation, Candidate, PredictedPass};
use crate::domain::strategy::{SelectionStrategy, StrategyType};
use crate::domain::time_range::TimeRange;
use crate::error::{ConversionError, Error, Result};

pub const DEFAULT_MIN_DURATION_SECONDS: f64 = 1.0;

/// Target of the per-run analytics event.
pub const ANALYTICS_TARGET: &str = "pass_planner::analytics";

/// Why a candidate was dropped from a run. Dropping is normal control flow, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elimination {
    /// The winner covered the whole remaining range.
    Swallowed,
    /// The strategy did not accept any remainder.
    Rejected,
    /// Shorter than the minimum duration, or empty.
    TooShort,
}

/**
 * Greedy scheduler for a single receiver.
 *
 * Candidates are sorted once by the strategy's priority key (stable, so input order breaks
 * ties). The head of the queue is always accepted with its current range, every remaining
 * candidate that collides with it is trimmed by the strategy or dropped, and the loop repeats
 * until the queue is empty. The queue is never re-sorted after trimming.
 *
 * The accepted ranges are pairwise disjoint and each lies within its pass' `[aos, los]`.
 */
#[derive(Debug)]
pub struct PassScheduler {
    strategy: Box<dyn SelectionStrategy>,
    min_duration_seconds: f64,
}

#[derive(Debug, Default)]
struct RunStatistics {
    /// Accepted allocations shorter than their original pass.
    trimmed: usize,
    eliminated: usize,
}

impl PassScheduler {
    pub fn new(strategy: Box<dyn SelectionStrategy>, min_duration_seconds: f64) -> std::result::Result<Self, ConversionError> {
        if !min_duration_seconds.is_finite() || min_duration_seconds < 0.0 {
            return Err(ConversionError::InvalidMinDuration(min_duration_seconds));
        }

        Ok(PassScheduler { strategy, min_duration_seconds })
    }

    pub fn from_type(strategy_type: StrategyType, min_duration_seconds: f64) -> std::result::Result<Self, ConversionError> {
        Self::new(strategy_type.get_instance(), min_duration_seconds)
    }

    /// Resolves the strategy by its configuration name, e.g. `"aos"`.
    pub fn from_name(strategy_name: &str, min_duration_seconds: f64) -> std::result::Result<Self, ConversionError> {
        Self::from_type(strategy_name.parse()?, min_duration_seconds)
    }

    pub fn strategy(&self) -> &dyn SelectionStrategy {
        self.strategy.as_ref()
    }

    pub fn min_duration_seconds(&self) -> f64 {
        self.min_duration_seconds
    }

    /// Schedules `(id, pass)` pairs. The order of `passes` only matters for equal priority keys.
    pub fn schedule_passes<K, I>(&self, passes: I) -> Result<Vec<Allocation<K>>>
    where
        K: Display,
        I: IntoIterator<Item = (K, PredictedPass)>,
    {
        let candidates = passes.into_iter().map(|(id, pass)| Candidate::new(id, pass)).collect();
        self.schedule(candidates)
    }

    /// Picks a time-disjoint subset of `candidates`.
    ///
    /// # Returns
    /// The accepted allocations in acceptance order, which is not necessarily chronological.
    ///
    /// # Errors
    /// [`Error::InvalidTrimmedRange`] if the strategy hands back a range that is not a valid part of
    /// the loser's range outside the winner. The whole run is aborted in that case.
    pub fn schedule<K: Display>(&self, candidates: Vec<Candidate<K>>) -> Result<Vec<Allocation<K>>> {
        let total = candidates.len();
        let mut stats = RunStatistics::default();

        let mut queue: Vec<Candidate<K>> = Vec::with_capacity(total);
        for candidate in candidates {
            if self.is_too_short(candidate.range()) {
                self.log_elimination(&candidate, Elimination::TooShort);
                stats.eliminated += 1;
            } else {
                queue.push(candidate);
            }
        }

        // Stable sort, ties keep the input order.
        queue.sort_by_key(|candidate| self.strategy.priority_key(&candidate.pass));

        let mut allocations = Vec::with_capacity(queue.len());
        let mut queue = queue.into_iter();

        while let Some(winner) = queue.next() {
            let winner_range = *winner.range();
            log::debug!("Accepted '{}' for {}", winner.id, winner_range);

            let mut kept = Vec::with_capacity(queue.len());
            for mut candidate in queue {
                match self.settle_conflict(&mut candidate, &winner_range)? {
                    Some(elimination) => {
                        self.log_elimination(&candidate, elimination);
                        stats.eliminated += 1;
                    }
                    None => kept.push(candidate),
                }
            }

            if winner_range != winner.pass.range() {
                stats.trimmed += 1;
            }
            allocations.push(Allocation { id: winner.id, range: winner_range });
            queue = kept.into_iter();
        }

        self.log_run(total, allocations.len(), &stats);

        Ok(allocations)
    }

    /// Trims `candidate` against `winner`.
    ///
    /// # Returns
    /// `Some(reason)` if the candidate has to be dropped, `None` if it stays in the queue.
    fn settle_conflict<K: Display>(&self, candidate: &mut Candidate<K>, winner: &TimeRange) -> Result<Option<Elimination>> {
        let current = *candidate.range();

        if current.intersects(winner) {
            let (left, right) = current.subtract(winner);
            if left.is_none() && right.is_none() {
                return Ok(Some(Elimination::Swallowed));
            }

            let Some(selected) = self.strategy.resolve(&candidate.pass, winner, left, right) else {
                return Ok(Some(Elimination::Rejected));
            };

            if !selected.is_valid() || !current.encloses(&selected) || selected.intersects(winner) {
                log::error!(
                    "Strategy '{}' returned {} for '{}' (current range {}, winner {}). Aborting the run.",
                    self.strategy.name(),
                    selected,
                    candidate.id,
                    current,
                    winner
                );
                return Err(Error::InvalidTrimmedRange { id: candidate.id.to_string(), start: selected.start, end: selected.end });
            }

            log::debug!("Trimmed '{}' from {} to {}", candidate.id, current, selected);
            candidate.set_range(selected);
        }

        if self.is_too_short(candidate.range()) {
            return Ok(Some(Elimination::TooShort));
        }

        Ok(None)
    }

    fn is_too_short(&self, range: &TimeRange) -> bool {
        !range.is_valid() || range.duration_seconds() < self.min_duration_seconds
    }

    fn log_elimination<K: Display>(&self, candidate: &Candidate<K>, reason: Elimination) {
        log::debug!("Eliminated '{}' ({:?}), last range {}", candidate.id, reason, candidate.range());
    }

    fn log_run(&self, candidates: usize, accepted: usize, stats: &RunStatistics) {
        log::info!(
            "Scheduled {} of {} passes with strategy '{}' ({} trimmed, {} eliminated).",
            accepted,
            candidates,
            self.strategy.name(),
            stats.trimmed,
            stats.eliminated
        );

        tracing::info!(
            target: ANALYTICS_TARGET,
            Strategy = self.strategy.name(),
            Candidates = candidates,
            Accepted = accepted,
            Trimmed = stats.trimmed,
            Eliminated = stats.eliminated,
            MinDuration = self.min_duration_seconds,
        );
    }
}
