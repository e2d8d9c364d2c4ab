//! Project model.
//!
//! A project is a time-bound unit of work with an ordered slate of roles.
//! It is attempted exactly once: every role is filled, or none is.
//!
//! # Time Representation
//! Days are integers relative to day 0. A project that runs for
//! `duration` days and must finish by `best_before` starts on
//! `best_before - duration`, which may be negative.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::RoleRequirement;

/// Lifecycle of a single project attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectState {
    /// Not yet attempted.
    #[default]
    Pending,
    /// Roles are being filled.
    Filling,
    /// Every role found a worker. Terminal.
    Staffed,
    /// Some role could not be filled; working state was reset. Terminal.
    Abandoned,
}

impl ProjectState {
    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectState::Staffed | ProjectState::Abandoned)
    }
}

/// A project to be staffed.
///
/// Workers are referenced by their position in the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Length in days.
    pub duration: i64,
    /// Score awarded when completed by `best_before`.
    pub score: i64,
    /// Day by which the project should be finished.
    pub best_before: i64,
    /// Ordered role slate.
    pub roles: Vec<RoleRequirement>,
    #[serde(skip)]
    role_members: Vec<Option<usize>>,
    #[serde(skip)]
    current_members: HashSet<usize>,
    #[serde(skip)]
    state: ProjectState,
}

impl Project {
    /// Creates a project with no roles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 0,
            score: 0,
            best_before: 0,
            roles: Vec::new(),
            role_members: Vec::new(),
            current_members: HashSet::new(),
            state: ProjectState::Pending,
        }
    }

    /// Sets the duration in days.
    pub fn with_duration(mut self, days: i64) -> Self {
        self.duration = days;
        self
    }

    /// Sets the score.
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Sets the best-before day.
    pub fn with_best_before(mut self, day: i64) -> Self {
        self.best_before = day;
        self
    }

    /// Appends a role to the slate.
    pub fn with_role(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.roles.push(RoleRequirement::new(skill, level));
        self
    }

    /// Day staffing must begin to finish exactly on `best_before`.
    /// Saturates at the `i64` bounds; see [`Project::checked_start_day`].
    #[inline]
    pub fn start_day(&self) -> i64 {
        self.best_before.saturating_sub(self.duration)
    }

    /// Start day, or `None` if `best_before - duration` leaves `i64`.
    pub fn checked_start_day(&self) -> Option<i64> {
        self.best_before.checked_sub(self.duration)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProjectState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ProjectState) {
        self.state = state;
    }

    /// Records `worker` against the role at `role_index`.
    pub fn add_member(&mut self, role_index: usize, worker: usize) {
        if self.role_members.len() <= role_index {
            self.role_members.resize(role_index + 1, None);
        }
        self.role_members[role_index] = Some(worker);
        self.current_members.insert(worker);
    }

    /// Whether `worker` already holds a role in the current attempt.
    #[inline]
    pub fn is_member(&self, worker: usize) -> bool {
        self.current_members.contains(&worker)
    }

    /// Worker assigned to the role at `role_index`, if any.
    pub fn member_for_role(&self, role_index: usize) -> Option<usize> {
        self.role_members.get(role_index).copied().flatten()
    }

    /// Assigned workers in role order, skipping unfilled roles.
    pub fn members(&self) -> Vec<usize> {
        (0..self.roles.len())
            .filter_map(|i| self.member_for_role(i))
            .collect()
    }

    /// Clears all tentative assignments.
    pub fn reset(&mut self) {
        self.role_members.clear();
        self.current_members.clear();
    }

    /// Number of roles on the slate.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
