//! Boundary adapters: load a staffing problem, store a schedule.
//!
//! The scheduler itself performs no I/O. Everything here runs once
//! before or once after a run.

mod json;
mod text;

pub use json::{parse_json, write_json};
pub use text::{parse_text, write_text};

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::Schedule;
use crate::scheduler::StaffingRequest;

/// Serialization format for input and output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    /// Whitespace-separated competition format.
    #[default]
    Text,
    /// serde JSON.
    Json,
}

/// Parses a staffing problem held in memory.
pub fn parse(input: &str, format: Format) -> Result<StaffingRequest> {
    let request = match format {
        Format::Text => parse_text(input)?,
        Format::Json => parse_json(input)?,
    };
    debug!(
        workers = request.workers.len(),
        projects = request.projects.len(),
        ?format,
        "input parsed"
    );
    Ok(request)
}

/// Reads and parses a staffing problem from `path`.
pub fn load(path: &Path, format: Format) -> Result<StaffingRequest> {
    let input = fs::read_to_string(path)?;
    parse(&input, format)
}

/// Writes `schedule` to `out` in the given format.
pub fn write<W: Write>(schedule: &Schedule, format: Format, out: W) -> Result<()> {
    match format {
        Format::Text => write_text(schedule, out)?,
        Format::Json => write_json(schedule, out)?,
    }
    Ok(())
}

/// Writes `schedule` to `path`, replacing any existing file.
pub fn save(schedule: &Schedule, path: &Path, format: Format) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    write(schedule, format, &mut out)?;
    out.flush()?;
    debug!(path = %path.display(), entries = schedule.staffed_count(), "schedule written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffingError;
    use crate::models::ScheduleEntry;

    #[test]
    fn test_parse_dispatches_on_format() {
        let text = parse("1 0\nAnna 1\nGo 2\n", Format::Text).unwrap();
        assert_eq!(text.workers[0].skill_level("Go"), 2);

        let json = parse(r#"{"workers": [], "projects": []}"#, Format::Json).unwrap();
        assert!(json.workers.is_empty());
    }

    #[test]
    fn test_parse_errors_are_typed() {
        assert!(matches!(parse("nope", Format::Text), Err(StaffingError::Parse(_))));
        assert!(matches!(
            parse("nope", Format::Json),
            Err(StaffingError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/u-staffing/input.txt"), Format::Text).unwrap_err();
        assert!(matches!(err, StaffingError::Io(_)));
    }

    #[test]
    fn test_save_and_reload_text() {
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new("P", vec!["A".into(), "B".into()]));

        let path = std::env::temp_dir().join(format!("u-staffing-{}.out", std::process::id()));
        save(&schedule, &path, Format::Text).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, "1\nP\nA B\n");
    }
}
