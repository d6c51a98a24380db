use chrono::{DateTime, Utc};
use std::fmt;

/// A closed interval `[start, end]` on the UTC time line.
///
/// A range is only meaningful if `start < end`. Zero-length and inverted ranges are never raised
/// as errors, operations that could produce them return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange { start, end }
    }

    /// Builds the range only if it is valid.
    pub fn checked(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        let range = TimeRange::new(start, end);
        if range.is_valid() { Some(range) } else { None }
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Returns `true` if both ranges share an open interval.
    /// Ranges that only touch at a boundary do not intersect.
    pub fn intersects(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the range in seconds, negative for inverted ranges.
    pub fn duration_seconds(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1_000.0
    }

    /// Inclusive on both boundaries.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// `true` if `other` lies completely inside this range.
    pub fn encloses(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Cuts `winner` out of this range.
    ///
    /// # Returns
    /// `(left, right)` where `left = [self.start, winner.start]` and `right = [winner.end, self.end]`,
    /// each `None` if the resulting range would not be valid. Which remainder is worth keeping is up
    /// to the caller.
    pub fn subtract(&self, winner: &TimeRange) -> (Option<TimeRange>, Option<TimeRange>) {
        let left = TimeRange::checked(self.start, winner.start);
        let right = TimeRange::checked(winner.end, self.end);
        (left, right)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
