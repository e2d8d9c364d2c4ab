//! JSON adapters over the serde representation of the models.

use std::io::Write;

use crate::models::Schedule;
use crate::scheduler::StaffingRequest;

/// Parses a staffing request from JSON.
///
/// `busy_until` and `score` default to 0 when omitted.
pub fn parse_json(input: &str) -> serde_json::Result<StaffingRequest> {
    serde_json::from_str(input)
}

/// Writes a schedule as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(schedule: &Schedule, mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, schedule)?;
    writeln!(out).map_err(serde_json::Error::io)
}
