//! Worker model.
//!
//! Workers are the pooled resource: each holds leveled skills and the day
//! it becomes free again. Skills grow through level-up when a worker
//! commits to a role at or above its current level.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Project, RoleRequirement};
use crate::error::AssignmentError;

/// Skill name → level. Skills that were never recorded read as level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillMap(HashMap<String, u32>);

impl SkillMap {
    /// Creates an empty skill map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level for `skill`, or 0 if unknown.
    #[inline]
    pub fn level(&self, skill: &str) -> u32 {
        self.0.get(skill).copied().unwrap_or(0)
    }

    /// Sets the level for `skill`, replacing any previous value.
    pub fn set(&mut self, skill: impl Into<String>, level: u32) {
        self.0.insert(skill.into(), level);
    }

    /// Raises `skill` by one level, creating it at 1 if absent. Levels
    /// saturate at `u32::MAX`.
    pub fn increment(&mut self, skill: &str) {
        let level = self.0.entry(skill.to_string()).or_insert(0);
        *level = level.saturating_add(1);
    }

    /// Number of explicitly recorded skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no skill has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates recorded (skill, level) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SkillMap {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A worker that can be assigned to project roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Skills with levels.
    pub skills: SkillMap,
    /// First day on which the worker is free (initially 0).
    #[serde(default)]
    pub busy_until: i64,
    /// Score credited from staffed projects. Not read by selection.
    #[serde(default)]
    pub score: i64,
}

impl Worker {
    /// Creates a worker with no skills, free from day 0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            skills: SkillMap::new(),
            busy_until: 0,
            score: 0,
        }
    }

    /// Sets a skill level.
    pub fn with_skill(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.skills.set(skill, level);
        self
    }

    /// Returns the level for a skill (0 if not found).
    #[inline]
    pub fn skill_level(&self, skill: &str) -> u32 {
        self.skills.level(skill)
    }

    /// Grows the role's skill by one if the worker is at or below the
    /// role's level. A worker already above it learns nothing.
    pub fn level_up(&mut self, requirement: &RoleRequirement) {
        if self.skill_level(&requirement.skill) <= requirement.level {
            self.skills.increment(&requirement.skill);
        }
    }

    /// Whether the worker holds at least the role's literal level.
    #[inline]
    pub fn meets_role(&self, requirement: &RoleRequirement) -> bool {
        self.skill_level(&requirement.skill) >= requirement.level
    }

    /// Whether the worker is free on `day`.
    #[inline]
    pub fn is_available(&self, day: i64) -> bool {
        day >= self.busy_until
    }

    /// Books the worker on `project` from `start_day` and applies level-up.
    ///
    /// # Errors
    /// [`AssignmentError::Unavailable`] if the worker is still busy, or
    /// [`AssignmentError::SkillMismatch`] if the role is not met. The
    /// worker is left untouched on error.
    pub fn commit(
        &mut self,
        project: &Project,
        requirement: &RoleRequirement,
        start_day: i64,
    ) -> Result<(), AssignmentError> {
        if !self.is_available(start_day) {
            return Err(AssignmentError::Unavailable {
                worker: self.id.clone(),
                busy_until: self.busy_until,
                day: start_day,
            });
        }
        if !self.meets_role(requirement) {
            return Err(AssignmentError::SkillMismatch {
                worker: self.id.clone(),
                skill: requirement.skill.clone(),
                actual: self.skill_level(&requirement.skill),
                required: requirement.level,
            });
        }
        self.busy_until = start_day.saturating_add(project.duration);
        self.level_up(requirement);
        Ok(())
    }
}
