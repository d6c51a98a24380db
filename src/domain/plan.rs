use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use crate::domain::candidate::Allocation;
use crate::error::Result;

/// A recording job for one committed receiver slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedJob {
    pub satellite: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Command line to run at `start`.
    pub command: String,
}

/// Turns allocations into jobs in chronological order.
///
/// The receiver is told the satellite name and when to stop recording:
/// `<receiver_command> "<satellite>" "<end>"`.
pub fn build_plan<K: Display>(allocations: &[Allocation<K>], receiver_command: &str) -> Vec<PlannedJob> {
    let mut jobs: Vec<PlannedJob> = allocations
        .iter()
        .map(|allocation| {
            let satellite = allocation.id.to_string();
            let end = allocation.range.end;
            let command = format!("{} \"{}\" \"{}\"", receiver_command, satellite, end.to_rfc3339_opts(SecondsFormat::Secs, true));

            PlannedJob { satellite, start: allocation.range.start, end, command }
        })
        .collect();

    jobs.sort_by_key(|job| job.start);
    jobs
}

/// Writes `satellite,start,end,command` rows with a header line.
pub fn write_plan_csv<W: Write>(jobs: &[PlannedJob], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for job in jobs {
        csv_writer.serialize(job)?;
    }

    csv_writer.flush()?;
    Ok(())
}
