//! Schedule (solution) model.
//!
//! A schedule lists, in project input order, every fully staffed project
//! with its workers in role order. Abandoned projects never appear.

use serde::{Deserialize, Serialize};

/// The result of a staffing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Staffed projects in the order they were attempted.
    pub entries: Vec<ScheduleEntry>,
}

/// One staffed project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Project name.
    pub project: String,
    /// Worker identifiers, one per role, in role order.
    pub workers: Vec<String>,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(project: impl Into<String>, workers: Vec<String>) -> Self {
        Self {
            project: project.into(),
            workers,
        }
    }

    /// Number of assigned workers.
    #[inline]
    pub fn team_size(&self) -> usize {
        self.workers.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries with at least one worker.
    pub fn staffed_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.workers.is_empty()).count()
    }

    /// Finds the entry for a project.
    pub fn entry_for_project(&self, project: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.project == project)
    }

    /// Returns all entries a worker takes part in.
    pub fn entries_for_worker(&self, worker: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.workers.iter().any(|w| w == worker))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
