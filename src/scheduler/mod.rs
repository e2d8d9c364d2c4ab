//! Greedy staffing scheduler, resource pool, and KPI evaluation.
//!
//! # Algorithm
//!
//! `Scheduler` makes one pass over the projects in input order. For each
//! project the `ResourcePool` fills roles first-fit from the roster and
//! commits the team only if every role is covered. It is not optimal:
//! there is no backtracking across projects and no global search.
//!
//! # KPI
//!
//! `ScheduleKpi` reports staffing rate, total score, and roster engagement.

mod greedy;
mod kpi;
mod pool;

pub use greedy::{Scheduler, StaffingRequest};
pub use kpi::ScheduleKpi;
pub use pool::{PoolConfig, ResourcePool};
