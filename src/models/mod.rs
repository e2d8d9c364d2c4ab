//! Staffing domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Worker` | Pooled resource with leveled skills and a busy-until day |
//! | `RoleRequirement` | One (skill, minimum level) position on a project |
//! | `Project` | Time-bound role slate plus the working state of one attempt |
//! | `Schedule` | Staffed projects with their workers in role order |

mod project;
mod role;
mod schedule;
mod worker;

pub use project::{Project, ProjectState};
pub use role::RoleRequirement;
pub use schedule::{Schedule, ScheduleEntry};
pub use worker::{SkillMap, Worker};
