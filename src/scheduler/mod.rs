//! Press scheduling and KPI evaluation.
//!
//! `PressScheduler` places jobs on the two presses in input order, each
//! at its press's availability frontier unless a preferred start fixes it.
//! `ScheduleKpi` summarizes the resulting plan.

mod kpi;
mod press;

pub use kpi::ScheduleKpi;
pub use press::{
    schedule_jobs, schedule_jobs_at, truncate_to_hour, FrontierPolicy, MaintenancePolicy,
    PressScheduler,
};
