//! Role requirement model.
//!
//! A role requirement is one position on a project's slate: a skill name
//! and the minimum level a worker must hold to fill it.

use serde::{Deserialize, Serialize};

/// A (skill, minimum level) pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Skill name (e.g., "C++", "HTML").
    pub skill: String,
    /// Minimum level required to fill the role outright.
    pub level: u32,
}

impl RoleRequirement {
    /// Creates a new role requirement.
    pub fn new(skill: impl Into<String>, level: u32) -> Self {
        Self {
            skill: skill.into(),
            level,
        }
    }

    /// Lowest level admitted to the candidate search when `slack` levels
    /// of mentoring headroom are allowed. Saturates at zero.
    #[inline]
    pub fn mentor_level(&self, slack: u32) -> u32 {
        self.level.saturating_sub(slack)
    }
}
