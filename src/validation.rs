//! Input validation for staffing problems.
//!
//! Checks structural integrity of the roster and project list before a
//! run. Detects:
//! - Duplicate worker IDs
//! - Duplicate project names
//! - Projects with a non-positive duration
//! - Projects whose start day (`best_before - duration`) leaves the day range
//!
//! A project with no roles is valid; it is simply never staffed.

use crate::models::{Project, Worker};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers or two projects share the same identifier.
    DuplicateId,
    /// A project lasts zero or fewer days.
    NonPositiveDuration,
    /// A project's start day cannot be represented.
    DayOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a staffing run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workers: &[Worker], projects: &[Project]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_ids = HashSet::new();
    for w in workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
    }

    let mut project_names = HashSet::new();
    for p in projects {
        if !project_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project name: {}", p.name),
            ));
        }

        if p.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Project '{}' lasts {} days", p.name, p.duration),
            ));
        }

        if p.checked_start_day().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!(
                    "Project '{}' cannot start {} days before day {}",
                    p.name, p.duration, p.best_before
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
