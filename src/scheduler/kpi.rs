//! Staffing quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Staffing rate | Staffed projects / attempted projects |
//! | Total score | Sum of scores of staffed projects |
//! | Engagement rate | Workers on at least one project / roster size |
//! | Avg team size | Mean workers per staffed project |
//!
//! Every staffed project starts on `best_before - duration` and therefore
//! finishes on its best-before day, so it earns its full score.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::{Project, Schedule};

/// Staffing performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Projects in the input.
    pub projects_total: usize,
    /// Projects with a schedule entry.
    pub staffed_projects: usize,
    /// Projects without a schedule entry.
    pub abandoned_projects: usize,
    /// Fraction of projects staffed (0.0..1.0).
    pub staffing_rate: f64,
    /// Sum of the scores of staffed projects.
    pub total_score: i64,
    /// Distinct workers holding at least one role.
    pub engaged_workers: usize,
    /// Fraction of the roster engaged (0.0..1.0).
    pub engagement_rate: f64,
    /// Mean workers per staffed project.
    pub avg_team_size: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input.
    ///
    /// # Arguments
    /// * `schedule` - The completed schedule.
    /// * `projects` - The input projects (for scores).
    /// * `roster_size` - Number of workers in the roster.
    pub fn calculate(schedule: &Schedule, projects: &[Project], roster_size: usize) -> Self {
        let staffed: Vec<_> = schedule
            .entries
            .iter()
            .filter(|e| !e.workers.is_empty())
            .collect();

        let total_score = projects
            .iter()
            .filter(|p| staffed.iter().any(|e| e.project == p.name))
            .map(|p| p.score)
            .sum();

        let engaged: HashSet<&str> = staffed
            .iter()
            .flat_map(|e| e.workers.iter().map(|w| w.as_str()))
            .collect();

        let staffed_projects = staffed.len();
        let staffing_rate = if projects.is_empty() {
            0.0
        } else {
            staffed_projects as f64 / projects.len() as f64
        };
        let engagement_rate = if roster_size == 0 {
            0.0
        } else {
            engaged.len() as f64 / roster_size as f64
        };
        let avg_team_size = if staffed_projects == 0 {
            0.0
        } else {
            staffed.iter().map(|e| e.team_size()).sum::<usize>() as f64 / staffed_projects as f64
        };

        Self {
            projects_total: projects.len(),
            staffed_projects,
            abandoned_projects: projects.len().saturating_sub(staffed_projects),
            staffing_rate,
            total_score,
            engaged_workers: engaged.len(),
            engagement_rate,
            avg_team_size,
        }
    }
}
