//! Single-pass greedy staffing scheduler.
//!
//! # Algorithm
//!
//! 1. Visit projects strictly in input order (no sorting).
//! 2. For each project, start on `best_before - duration`.
//! 3. Ask the resource pool to fill every role; staffed projects become
//!    schedule entries, abandoned ones are skipped.
//!
//! Committed assignments change worker availability and skills, so
//! earlier projects shape the candidate pools of later ones. A failed
//! project is never retried.
//!
//! # Complexity
//! O(p * r * w) where p=projects, r=roles/project, w=roster size.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{PoolConfig, ResourcePool};
use crate::error::AssignmentError;
use crate::models::{Project, ProjectState, Schedule, ScheduleEntry, Worker};

/// Input container for a staffing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffingRequest {
    /// Roster in load order.
    pub workers: Vec<Worker>,
    /// Projects in input order.
    pub projects: Vec<Project>,
    /// Candidate search settings.
    #[serde(default)]
    pub pool: PoolConfig,
}

impl StaffingRequest {
    /// Creates a new staffing request.
    pub fn new(workers: Vec<Worker>, projects: Vec<Project>) -> Self {
        Self {
            workers,
            projects,
            pool: PoolConfig::default(),
        }
    }

    /// Sets the candidate search configuration.
    pub fn with_pool_config(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }
}

/// Greedy first-fit scheduler.
///
/// Owns the roster (through a [`ResourcePool`]) and the project list for
/// the duration of one run.
///
/// # Example
///
/// ```
/// use u_staffing::models::{Project, Worker};
/// use u_staffing::scheduler::Scheduler;
///
/// let workers = vec![
///     Worker::new("Anna").with_skill("C++", 2),
///     Worker::new("Bob").with_skill("C++", 3),
/// ];
/// let projects = vec![
///     Project::new("Logging")
///         .with_duration(1)
///         .with_score(10)
///         .with_best_before(1)
///         .with_role("C++", 2),
/// ];
///
/// let mut scheduler = Scheduler::new(workers, projects);
/// let schedule = scheduler.run().unwrap();
/// assert_eq!(schedule.staffed_count(), 1);
/// assert_eq!(schedule.entries[0].workers, vec!["Anna"]);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    pool: ResourcePool,
    projects: Vec<Project>,
}

impl Scheduler {
    /// Creates a scheduler with the default pool configuration.
    pub fn new(workers: Vec<Worker>, projects: Vec<Project>) -> Self {
        Self {
            pool: ResourcePool::new(workers),
            projects,
        }
    }

    /// Creates a scheduler from a request.
    pub fn from_request(request: StaffingRequest) -> Self {
        Self {
            pool: ResourcePool::new(request.workers).with_config(request.pool),
            projects: request.projects,
        }
    }

    /// Sets the candidate search configuration.
    pub fn with_pool_config(mut self, config: PoolConfig) -> Self {
        self.pool = self.pool.with_config(config);
        self
    }

    /// Staffs every pending project in input order.
    ///
    /// Projects already in a terminal state (from an earlier call) are
    /// not attempted again.
    ///
    /// # Errors
    /// Propagates an [`AssignmentError`] if a selected worker cannot be
    /// committed. Selection only picks feasible workers, so this signals
    /// a broken invariant rather than a normal outcome.
    pub fn run(&mut self) -> Result<Schedule, AssignmentError> {
        let mut schedule = Schedule::new();

        for project in &mut self.projects {
            if project.state().is_terminal() {
                continue;
            }

            let start_day = project.start_day();
            let members = self.pool.fill_roles(project, start_day)?;
            if members.is_empty() {
                debug!(project = %project.name, start_day, "project skipped");
                continue;
            }

            self.pool.credit_score(&members, project.score);
            let workers = members
                .iter()
                .filter_map(|&i| self.pool.worker(i))
                .map(|w| w.id.clone())
                .collect();
            schedule.add_entry(ScheduleEntry::new(project.name.clone(), workers));
        }

        info!(
            projects = self.projects.len(),
            staffed = schedule.staffed_count(),
            "staffing run complete"
        );
        Ok(schedule)
    }

    /// The resource pool in its current state.
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Roster in its current state.
    pub fn workers(&self) -> &[Worker] {
        self.pool.workers()
    }

    /// Projects in input order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Lifecycle state of every project, in input order.
    pub fn outcomes(&self) -> Vec<(&str, ProjectState)> {
        self.projects
            .iter()
            .map(|p| (p.name.as_str(), p.state()))
            .collect()
    }
}
