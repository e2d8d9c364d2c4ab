//! Greedy skill-based staffing for the U-Engine ecosystem.
//!
//! Assigns workers with leveled skills to time-bound projects, each of
//! which needs a fixed slate of roles. Projects are visited once, in
//! input order, and staffed all-or-nothing; successful assignments book
//! the workers and grow their skills, which shapes every later decision.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `RoleRequirement`, `Project`,
//!   `Schedule`
//! - **`scheduler`**: `ResourcePool` (candidate search, role filling,
//!   rollback), `Scheduler` (the single pass), `ScheduleKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, durations)
//! - **`io`**: Text and JSON adapters at the boundaries
//!
//! # Non-goals
//!
//! This is a best-effort heuristic. There is no backtracking across
//! projects and no global search.

pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{AssignmentError, ParseError, Result, StaffingError};
