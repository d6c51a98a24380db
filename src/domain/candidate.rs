use chrono::{DateTime, Utc};

use crate::domain::time_range::TimeRange;

/// A predicted pass of a satellite over the ground station, as delivered by the pass predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedPass {
    /// Acquisition of signal.
    pub aos: DateTime<Utc>,
    /// Loss of signal.
    pub los: DateTime<Utc>,
    /// Highest elevation above the horizon during the pass, in degrees.
    pub max_elevation_deg: f64,
    /// Instant at which `max_elevation_deg` is reached.
    pub max_elevation_at: DateTime<Utc>,
}

impl PredictedPass {
    pub fn new(aos: DateTime<Utc>, los: DateTime<Utc>, max_elevation_deg: f64, max_elevation_at: DateTime<Utc>) -> Self {
        PredictedPass { aos, los, max_elevation_deg, max_elevation_at }
    }

    /// Pass whose elevation peaks at `fraction` of its duration (0.5 is the midpoint).
    pub fn with_peak_fraction(aos: DateTime<Utc>, los: DateTime<Utc>, max_elevation_deg: f64, fraction: f64) -> Self {
        let duration_ms = (los - aos).num_milliseconds() as f64;
        let offset = chrono::Duration::milliseconds((duration_ms * fraction).round() as i64);
        PredictedPass::new(aos, los, max_elevation_deg, aos + offset)
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.aos, self.los)
    }
}

/// One pass under consideration by the scheduler.
///
/// `pass` is an immutable snapshot of the prediction. Only `range` changes during a run and it
/// only ever shrinks inside `[pass.aos, pass.los]`.
#[derive(Debug, Clone)]
pub struct Candidate<K> {
    pub id: K,
    pub pass: PredictedPass,
    range: TimeRange,
}

impl<K> Candidate<K> {
    pub fn new(id: K, pass: PredictedPass) -> Self {
        let range = pass.range();
        Candidate { id, pass, range }
    }

    pub fn range(&self) -> &TimeRange {
        &self.range
    }

    pub(crate) fn set_range(&mut self, range: TimeRange) {
        self.range = range;
    }
}

/// A committed receiver slot: the accepted candidate and its final, possibly trimmed, range.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation<K> {
    pub id: K,
    pub range: TimeRange,
}
