//! Error types.
//!
//! Per-candidate infeasibility is never an error during normal selection;
//! it only disqualifies the candidate. The variants here cover the direct
//! commit entry point, malformed input, and boundary I/O.

use thiserror::Error;

use crate::validation::ValidationError;

/// Raised by [`Worker::commit`](crate::models::Worker::commit) when asked
/// to commit an infeasible assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The worker is still busy on the requested start day.
    #[error("worker '{worker}' is busy until day {busy_until}, cannot start on day {day}")]
    Unavailable {
        worker: String,
        busy_until: i64,
        day: i64,
    },

    /// The worker's skill level is below the role's minimum.
    #[error("worker '{worker}' has {skill} level {actual}, role requires {required}")]
    SkillMismatch {
        worker: String,
        skill: String,
        actual: u32,
        required: u32,
    },
}

/// Malformed text input. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: missing field '{field}'")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: field '{field}' is not a valid number: '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected trailing input")]
    TrailingInput { line: usize },
}

/// Top-level error for loading, validating, and writing a staffing run.
#[derive(Debug, Error)]
pub enum StaffingError {
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for StaffingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        StaffingError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, StaffingError>;
