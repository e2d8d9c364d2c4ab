//! Whitespace-separated text format.
//!
//! # Input
//!
//! ```text
//! C P                      worker count, project count
//! name N                   per worker, followed by N lines:
//! skill level
//! name D S B R             per project: days, score, best-before, role count,
//! skill level              followed by R lines
//! ```
//!
//! # Output
//!
//! ```text
//! E                        number of staffed projects
//! project                  per staffed project
//! worker worker ...        its workers in role order
//! ```
//!
//! Blank lines are ignored on input. Extra fields on a line are rejected.

use std::io::Write;
use std::iter::Enumerate;
use std::str::{FromStr, Lines, SplitWhitespace};

use crate::error::ParseError;
use crate::models::{Project, Schedule, Worker};
use crate::scheduler::StaffingRequest;

struct Record<'a> {
    line: usize,
    fields: SplitWhitespace<'a>,
}

impl<'a> Record<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.fields.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let raw = self.text(field)?;
        raw.parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.fields.next() {
            Some(_) => Err(ParseError::TrailingInput { line: self.line }),
            None => Ok(()),
        }
    }
}

struct Cursor<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn record(&mut self, expected: &'static str) -> Result<Record<'a>, ParseError> {
        self.lines
            .by_ref()
            .find(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| Record {
                line: i + 1,
                fields: l.split_whitespace(),
            })
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.lines.find(|(_, l)| !l.trim().is_empty()) {
            Some((i, _)) => Err(ParseError::TrailingInput { line: i + 1 }),
            None => Ok(()),
        }
    }
}

/// Parses a staffing problem from the text format.
///
/// A worker listing the same skill twice keeps the last level.
pub fn parse_text(input: &str) -> Result<StaffingRequest, ParseError> {
    let mut cursor = Cursor::new(input);

    let mut header = cursor.record("header")?;
    let worker_count: usize = header.number("worker count")?;
    let project_count: usize = header.number("project count")?;
    header.finish()?;

    let mut workers = Vec::with_capacity(worker_count);
    for _ in 0..worker_count {
        let mut rec = cursor.record("worker")?;
        let mut worker = Worker::new(rec.text("worker name")?);
        let skill_count: usize = rec.number("skill count")?;
        rec.finish()?;

        for _ in 0..skill_count {
            let mut rec = cursor.record("worker skill")?;
            let skill = rec.text("skill name")?;
            let level: u32 = rec.number("skill level")?;
            rec.finish()?;
            worker.skills.set(skill, level);
        }
        workers.push(worker);
    }

    let mut projects = Vec::with_capacity(project_count);
    for _ in 0..project_count {
        let mut rec = cursor.record("project")?;
        let name = rec.text("project name")?;
        let duration: i64 = rec.number("duration")?;
        let score: i64 = rec.number("score")?;
        let best_before: i64 = rec.number("best before")?;
        let role_count: usize = rec.number("role count")?;
        rec.finish()?;

        let mut project = Project::new(name)
            .with_duration(duration)
            .with_score(score)
            .with_best_before(best_before);
        for _ in 0..role_count {
            let mut rec = cursor.record("role")?;
            let skill = rec.text("skill name")?;
            let level: u32 = rec.number("role level")?;
            rec.finish()?;
            project = project.with_role(skill, level);
        }
        projects.push(project);
    }

    cursor.finish()?;
    Ok(StaffingRequest::new(workers, projects))
}

/// Writes a schedule in the text format. Entries without workers are
/// left out, and the header counts only the entries written.
pub fn write_text<W: Write>(schedule: &Schedule, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", schedule.staffed_count())?;
    for entry in schedule.entries.iter().filter(|e| !e.workers.is_empty()) {
        writeln!(out, "{}", entry.project)?;
        writeln!(out, "{}", entry.workers.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoleRequirement, ScheduleEntry};
    use crate::scheduler::Scheduler;
    use crate::validation::{validate_input, ValidationErrorKind};

    const SAMPLE: &str = "\
3 3
Anna 1
C++ 2
Bob 2
HTML 5
CSS 5
Maria 1
Python 3
Logging 5 10 5 1
C++ 3
WebServer 7 10 7 2
HTML 3
C++ 2
WebChat 10 20 20 2
Python 3
HTML 3
";

    #[test]
    fn test_parse_sample() {
        let req = parse_text(SAMPLE).unwrap();
        assert_eq!(req.workers.len(), 3);
        assert_eq!(req.workers[1].id, "Bob");
        assert_eq!(req.workers[1].skill_level("CSS"), 5);
        assert_eq!(req.workers[2].skill_level("C++"), 0);

        assert_eq!(req.projects.len(), 3);
        let web = &req.projects[1];
        assert_eq!(web.name, "WebServer");
        assert_eq!(web.duration, 7);
        assert_eq!(web.best_before, 7);
        assert_eq!(
            web.roles,
            vec![RoleRequirement::new("HTML", 3), RoleRequirement::new("C++", 2)]
        );
    }

    #[test]
    fn test_sample_end_to_end() {
        let req = parse_text(SAMPLE).unwrap();
        let mut s = Scheduler::from_request(req);
        let schedule = s.run().unwrap();

        // Logging needs C++ 3 and nobody has it; WebServer starts on day 0
        // with Bob and Anna; WebChat needs HTML 3 alongside Maria on day 10.
        let mut out = Vec::new();
        write_text(&schedule, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2\nWebServer\nBob Anna\nWebChat\nMaria Bob\n"
        );
    }

    #[test]
    fn test_max_level_input_runs() {
        let req = parse_text("1 1\nA 1\nGo 4294967295\nP 1 1 1 1\nGo 4294967295\n").unwrap();
        let mut s = Scheduler::from_request(req);
        let schedule = s.run().unwrap();
        assert_eq!(schedule.entries[0].workers, vec!["A"]);
        assert_eq!(s.workers()[0].skill_level("Go"), u32::MAX);
    }

    #[test]
    fn test_min_best_before_rejected_by_validation() {
        let req = parse_text("0 1\nP 1 1 -9223372036854775808 1\nGo 1\n").unwrap();
        let errors = validate_input(&req.workers, &req.projects).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DayOutOfRange);

        let mut s = Scheduler::from_request(req);
        assert!(s.run().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_skill_keeps_last() {
        let req = parse_text("1 0\nAnna 2\nGo 1\nGo 4\n").unwrap();
        assert_eq!(req.workers[0].skill_level("Go"), 4);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let req = parse_text("\n1 0\n\nAnna 0\n\n").unwrap();
        assert_eq!(req.workers[0].id, "Anna");
        assert!(req.workers[0].skills.is_empty());
    }

    #[test]
    fn test_missing_field() {
        let err = parse_text("1 0\nAnna\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                line: 2,
                field: "skill count"
            }
        );
    }

    #[test]
    fn test_non_numeric_count() {
        let err = parse_text("x 0\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                field: "worker count",
                value: "x".into()
            }
        );
    }

    #[test]
    fn test_negative_level_rejected() {
        let err = parse_text("1 0\nAnna 1\nGo -1\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 3, field: "skill level", .. }));
    }

    #[test]
    fn test_truncated_input() {
        let err = parse_text("0 1\nP 1 1 1 2\nGo 1\n").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEof { expected: "role" });
    }

    #[test]
    fn test_trailing_field_rejected() {
        let err = parse_text("0 0 7\n").unwrap_err();
        assert_eq!(err, ParseError::TrailingInput { line: 1 });
    }

    #[test]
    fn test_trailing_record_rejected() {
        let err = parse_text("0 0\nextra\n").unwrap_err();
        assert_eq!(err, ParseError::TrailingInput { line: 2 });
    }

    #[test]
    fn test_write_skips_empty_entries() {
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new("Idle", vec![]));
        schedule.add_entry(ScheduleEntry::new("P", vec!["A".into(), "B".into()]));

        let mut out = Vec::new();
        write_text(&schedule, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\nP\nA B\n");
    }

    #[test]
    fn test_write_empty_schedule() {
        let mut out = Vec::new();
        write_text(&Schedule::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }
}
