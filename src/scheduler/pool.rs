//! Resource pool: candidate search and per-project role filling.
//!
//! # Algorithm
//!
//! For each role on a project's slate, in order:
//! 1. Collect candidates: workers within `mentor_slack` levels of the role.
//! 2. Pick the first candidate in roster order that is free on the start
//!    day, meets the literal level, and is not already on this project.
//! 3. If none qualifies, reset the project and give up on it.
//!
//! Selections are buffered in the project's working state and committed
//! to the roster only once every role has a worker, so an abandoned
//! project never leaves a mutation behind.
//!
//! The candidate filter is always a superset of what step 2 accepts. Both
//! passes are kept so that a future mentoring rule can select from the
//! wider cohort without changing the search.
//!
//! # Complexity
//! O(r * w) per project, where r = roles and w = roster size.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::AssignmentError;
use crate::models::{Project, ProjectState, RoleRequirement, Worker};

/// Candidate search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Levels below a role's minimum still admitted as candidates.
    pub mentor_slack: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { mentor_slack: 1 }
    }
}

impl PoolConfig {
    /// Sets the mentor slack.
    pub fn with_mentor_slack(mut self, slack: u32) -> Self {
        self.mentor_slack = slack;
        self
    }
}

/// The worker roster and the single place it is mutated.
///
/// Workers are addressed by their roster position, which is also the
/// first-fit search order.
#[derive(Debug, Clone)]
pub struct ResourcePool {
    workers: Vec<Worker>,
    config: PoolConfig,
}

impl ResourcePool {
    /// Creates a pool over `workers` in load order.
    pub fn new(workers: Vec<Worker>) -> Self {
        Self {
            workers,
            config: PoolConfig::default(),
        }
    }

    /// Sets the candidate search configuration.
    pub fn with_config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// All workers in roster order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Worker at roster position `index`.
    pub fn worker(&self, index: usize) -> Option<&Worker> {
        self.workers.get(index)
    }

    /// Finds a worker by identifier.
    pub fn find_worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Roster positions of every worker whose level in the role's skill is
    /// at least `level - mentor_slack`, in roster order.
    pub fn find_candidates(&self, requirement: &RoleRequirement) -> Vec<usize> {
        let mentor_level = requirement.mentor_level(self.config.mentor_slack);
        self.workers
            .iter()
            .enumerate()
            .filter(|(_, w)| w.skill_level(&requirement.skill) >= mentor_level)
            .map(|(i, _)| i)
            .collect()
    }

    /// Attempts to staff every role of `project` starting on `start_day`.
    ///
    /// Returns the roster positions of the assigned workers in role order,
    /// or an empty vector if some role could not be filled (the project
    /// is then `Abandoned` and its working state cleared). On success the
    /// project is `Staffed` and each worker has been committed.
    ///
    /// # Errors
    /// Only if committing a selected worker fails, which selection rules
    /// out. The roster is restored before the error is returned.
    pub fn fill_roles(
        &mut self,
        project: &mut Project,
        start_day: i64,
    ) -> Result<Vec<usize>, AssignmentError> {
        project.reset();
        project.set_state(ProjectState::Filling);

        if project.roles.is_empty() {
            debug!(project = %project.name, "empty role slate, abandoning project");
            project.set_state(ProjectState::Abandoned);
            return Ok(Vec::new());
        }

        for role_index in 0..project.roles.len() {
            let role = &project.roles[role_index];
            let candidates = self.find_candidates(role);
            trace!(
                project = %project.name,
                skill = %role.skill,
                level = role.level,
                candidates = candidates.len(),
                "candidate search"
            );

            let selected = candidates.into_iter().find(|&i| {
                let w = &self.workers[i];
                w.is_available(start_day) && w.meets_role(role) && !project.is_member(i)
            });

            match selected {
                Some(worker) => {
                    debug!(
                        project = %project.name,
                        role = role_index,
                        worker = %self.workers[worker].id,
                        "role filled"
                    );
                    project.add_member(role_index, worker);
                }
                None => {
                    debug!(
                        project = %project.name,
                        role = role_index,
                        skill = %role.skill,
                        level = role.level,
                        "no eligible worker, abandoning project"
                    );
                    project.reset();
                    project.set_state(ProjectState::Abandoned);
                    return Ok(Vec::new());
                }
            }
        }

        let members = project.members();
        self.commit_all(project, &members, start_day)?;
        project.set_state(ProjectState::Staffed);
        Ok(members)
    }

    /// Adds `score` to each listed worker.
    pub fn credit_score(&mut self, members: &[usize], score: i64) {
        for &i in members {
            self.workers[i].score = self.workers[i].score.saturating_add(score);
        }
    }

    fn commit_all(
        &mut self,
        project: &mut Project,
        members: &[usize],
        start_day: i64,
    ) -> Result<(), AssignmentError> {
        let snapshot: Vec<(usize, Worker)> = members
            .iter()
            .map(|&i| (i, self.workers[i].clone()))
            .collect();

        let staffed: &Project = project;
        let failure = staffed
            .roles
            .iter()
            .zip(members)
            .find_map(|(role, &worker)| {
                self.workers[worker]
                    .commit(staffed, role, start_day)
                    .err()
            });

        match failure {
            None => Ok(()),
            Some(e) => {
                for (i, w) in snapshot {
                    self.workers[i] = w;
                }
                project.reset();
                project.set_state(ProjectState::Abandoned);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Worker> {
        vec![
            Worker::new("A").with_skill("C++", 2),
            Worker::new("B").with_skill("C++", 3),
        ]
    }

    fn single_role(level: u32) -> Project {
        Project::new("P")
            .with_duration(1)
            .with_best_before(1)
            .with_score(10)
            .with_role("C++", level)
    }

    #[test]
    fn test_find_candidates_includes_one_level_under() {
        let pool = ResourcePool::new(roster());
        let c = pool.find_candidates(&RoleRequirement::new("C++", 3));
        assert_eq!(c, vec![0, 1]);

        let c = pool.find_candidates(&RoleRequirement::new("C++", 4));
        assert_eq!(c, vec![1]);

        assert!(pool.find_candidates(&RoleRequirement::new("C++", 5)).is_empty());
    }

    #[test]
    fn test_find_candidates_unknown_skill() {
        let pool = ResourcePool::new(roster());
        assert!(pool.find_candidates(&RoleRequirement::new("Go", 2)).is_empty());
        assert_eq!(pool.find_candidates(&RoleRequirement::new("Go", 1)), vec![0, 1]);
    }

    #[test]
    fn test_find_candidates_zero_slack() {
        let config = PoolConfig::default().with_mentor_slack(0);
        let pool = ResourcePool::new(roster()).with_config(config);
        assert_eq!(pool.find_candidates(&RoleRequirement::new("C++", 3)), vec![1]);
    }

    #[test]
    fn test_first_fit_selection() {
        let mut pool = ResourcePool::new(roster());
        let mut p = single_role(2);
        let start = p.start_day();

        let members = pool.fill_roles(&mut p, start).unwrap();
        assert_eq!(members, vec![0]);
        assert_eq!(p.state(), ProjectState::Staffed);

        let a = pool.worker(0).unwrap();
        assert_eq!(a.skill_level("C++"), 3);
        assert_eq!(a.busy_until, 1);
        assert_eq!(pool.worker(1).unwrap().busy_until, 0);
    }

    #[test]
    fn test_trainee_candidate_not_selected() {
        // A is one level short: a candidate, but never selected.
        let mut pool = ResourcePool::new(roster());
        let mut p = single_role(3);

        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert_eq!(members, vec![1]);
        assert_eq!(pool.worker(0).unwrap().skill_level("C++"), 2);
    }

    #[test]
    fn test_unfillable_role_leaves_roster_untouched() {
        let mut pool = ResourcePool::new(roster());
        let before = pool.workers().to_vec();
        let mut p = single_role(4);

        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert!(members.is_empty());
        assert_eq!(p.state(), ProjectState::Abandoned);
        assert!(p.members().is_empty());
        assert_eq!(pool.workers(), &before[..]);
    }

    #[test]
    fn test_worker_fills_one_role_per_project() {
        let mut pool = ResourcePool::new(vec![Worker::new("Solo").with_skill("C++", 1)]);
        let before = pool.workers().to_vec();
        let mut p = Project::new("Pair")
            .with_duration(2)
            .with_best_before(2)
            .with_role("C++", 1)
            .with_role("C++", 1);

        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert!(members.is_empty());
        assert!(!p.is_member(0));
        assert_eq!(pool.workers(), &before[..]);
    }

    #[test]
    fn test_busy_worker_skipped() {
        let mut workers = roster();
        workers[0].busy_until = 5;
        let mut pool = ResourcePool::new(workers);
        let mut p = single_role(2);

        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert_eq!(members, vec![1]);
        // B exceeds the role level: no growth.
        assert_eq!(pool.worker(1).unwrap().skill_level("C++"), 3);
    }

    #[test]
    fn test_members_in_role_order() {
        let mut pool = ResourcePool::new(vec![
            Worker::new("Anna").with_skill("C++", 2),
            Worker::new("Bob").with_skill("HTML", 5).with_skill("CSS", 5),
            Worker::new("Maria").with_skill("Python", 3),
        ]);
        let mut p = Project::new("WebServer")
            .with_duration(7)
            .with_best_before(7)
            .with_role("HTML", 3)
            .with_role("C++", 2);

        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert_eq!(members, vec![1, 0]);
        assert_eq!(pool.worker(1).unwrap().busy_until, 7);
        assert_eq!(pool.worker(0).unwrap().busy_until, 7);
    }

    #[test]
    fn test_empty_slate_yields_no_members() {
        let mut pool = ResourcePool::new(roster());
        let mut p = Project::new("Nothing").with_duration(1).with_best_before(1);
        let members = pool.fill_roles(&mut p, 0).unwrap();
        assert!(members.is_empty());
        assert_eq!(p.state(), ProjectState::Abandoned);
    }

    #[test]
    fn test_credit_score() {
        let mut pool = ResourcePool::new(roster());
        pool.credit_score(&[0, 1], 10);
        pool.credit_score(&[1], 5);
        assert_eq!(pool.worker(0).unwrap().score, 10);
        assert_eq!(pool.find_worker("B").unwrap().score, 15);
    }
}
