//! Frontier-based press scheduler.
//!
//! # Algorithm
//!
//! 1. Both press frontiers start at the current hour (minutes and below zeroed).
//! 2. Jobs are placed in input order; there is no sorting.
//! 3. A job with a preferred start runs at that fixed instant. Any other
//!    job runs at its press's frontier.
//! 4. `end = start + quantity / rate` hours, and the press frontier moves
//!    to `end`.
//! 5. Run-by misses, maintenance conflicts and press overlaps are reported
//!    after placement without moving anything.
//!
//! Policies control two behaviors that can be tightened:
//! [`MaintenancePolicy`] (whether frontier placement skips maintenance) and
//! [`FrontierPolicy`] (whether a fixed-start job can pull a frontier back).
//!
//! # Complexity
//! O(n) placement with the default policies, O(n * m) when avoiding
//! m maintenance windows. Reporting is O(n^2 + n * m).

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::models::{
    offset_saturating, Job, MaintenanceWindow, Press, Schedule, ScheduledJob, Violation,
};

/// How maintenance windows affect frontier placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaintenancePolicy {
    /// Place jobs as if no maintenance existed; conflicts are only reported.
    #[default]
    Ignore,
    /// Push frontier-placed jobs past any window they would overlap.
    /// Fixed-start jobs are never moved.
    Avoid,
}

/// How a placed job updates its press frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Frontier becomes the job's end, even if that is earlier.
    #[default]
    Overwrite,
    /// Frontier becomes the later of its current value and the job's end.
    MonotonicMax,
}

/// Two-press scheduler.
///
/// Stateless: every call recomputes from the given jobs, maintenance and
/// clock, so repeated calls with the same inputs agree.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use press_schedule::builder::create_job;
/// use press_schedule::models::Catalog;
/// use press_schedule::scheduler::PressScheduler;
///
/// let catalog = Catalog::default();
/// let run_by = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let job = create_job(&catalog, "DUT10-40360R6W", "B163600316C", 100, run_by, None).unwrap();
///
/// let now = run_by.and_hms_opt(7, 45, 12).unwrap();
/// let schedule = PressScheduler::new().schedule_at(&[job], &[], now);
/// assert_eq!(schedule.jobs[0].start, run_by.and_hms_opt(7, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PressScheduler {
    maintenance_policy: MaintenancePolicy,
    frontier_policy: FrontierPolicy,
}

impl PressScheduler {
    /// Creates a scheduler with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maintenance policy.
    pub fn with_maintenance_policy(mut self, policy: MaintenancePolicy) -> Self {
        self.maintenance_policy = policy;
        self
    }

    /// Sets the frontier policy.
    pub fn with_frontier_policy(mut self, policy: FrontierPolicy) -> Self {
        self.frontier_policy = policy;
        self
    }

    pub fn maintenance_policy(&self) -> MaintenancePolicy {
        self.maintenance_policy
    }

    pub fn frontier_policy(&self) -> FrontierPolicy {
        self.frontier_policy
    }

    /// Schedules against the local wall clock.
    pub fn schedule(&self, jobs: &[Job], maintenance: &[MaintenanceWindow]) -> Schedule {
        self.schedule_at(jobs, maintenance, Local::now().naive_local())
    }

    /// Schedules with both frontiers starting at `now` truncated to the hour.
    pub fn schedule_at(
        &self,
        jobs: &[Job],
        maintenance: &[MaintenanceWindow],
        now: NaiveDateTime,
    ) -> Schedule {
        self.schedule_from(jobs, maintenance, truncate_to_hour(now))
    }

    /// Schedules with both frontiers starting exactly at `origin`.
    #[instrument(
        level = "debug",
        skip(self, jobs, maintenance),
        fields(jobs = jobs.len(), windows = maintenance.len())
    )]
    pub fn schedule_from(
        &self,
        jobs: &[Job],
        maintenance: &[MaintenanceWindow],
        origin: NaiveDateTime,
    ) -> Schedule {
        let mut schedule = Schedule::new();
        let mut frontier: HashMap<Press, NaiveDateTime> =
            Press::ALL.iter().map(|&p| (p, origin)).collect();

        let blackouts = blackouts_by_press(maintenance);

        for (index, job) in jobs.iter().enumerate() {
            let press = job.press();
            let available = frontier.get(&press).copied().unwrap_or(origin);

            let start = match job.fixed_start() {
                Some(fixed) => fixed,
                None => match self.maintenance_policy {
                    MaintenancePolicy::Ignore => available,
                    MaintenancePolicy::Avoid => skip_blackouts(
                        available,
                        job.duration(),
                        blackouts.get(&press).map(Vec::as_slice).unwrap_or(&[]),
                    ),
                },
            };

            let placed = ScheduledJob::new(job.clone(), start);

            let next = match self.frontier_policy {
                FrontierPolicy::Overwrite => placed.end,
                FrontierPolicy::MonotonicMax => placed.end.max(available),
            };
            frontier.insert(press, next);

            debug!(
                index,
                press = %press,
                product = job.product(),
                start = %placed.start,
                end = %placed.end,
                fixed = job.preferred_start().is_some(),
                "job placed"
            );
            schedule.add_job(placed);
        }

        for violation in detect_violations(&schedule, maintenance) {
            warn!(
                job_index = violation.job_index,
                kind = ?violation.violation_type,
                "{}",
                violation.message
            );
            schedule.add_violation(violation);
        }

        info!(
            jobs = schedule.len(),
            violations = schedule.violations.len(),
            "schedule computed"
        );
        schedule
    }
}

/// Schedules with the default policies against the local wall clock.
pub fn schedule_jobs(jobs: &[Job], maintenance: &[MaintenanceWindow]) -> Vec<ScheduledJob> {
    schedule_jobs_at(jobs, maintenance, Local::now().naive_local())
}

/// [`schedule_jobs`] with an explicit clock reading.
pub fn schedule_jobs_at(
    jobs: &[Job],
    maintenance: &[MaintenanceWindow],
    now: NaiveDateTime,
) -> Vec<ScheduledJob> {
    PressScheduler::new()
        .schedule_at(jobs, maintenance, now)
        .into_jobs()
}

/// Zeroes minutes, seconds and sub-second components.
pub fn truncate_to_hour(at: NaiveDateTime) -> NaiveDateTime {
    at - Duration::minutes(i64::from(at.minute()))
        - Duration::seconds(i64::from(at.second()))
        - Duration::nanoseconds(i64::from(at.nanosecond()))
}

/// Valid maintenance windows grouped by press.
fn blackouts_by_press(
    maintenance: &[MaintenanceWindow],
) -> HashMap<Press, Vec<&MaintenanceWindow>> {
    let mut by_press: HashMap<Press, Vec<&MaintenanceWindow>> = HashMap::new();
    for window in maintenance.iter().filter(|w| w.is_valid()) {
        by_press.entry(window.press).or_default().push(window);
    }
    by_press
}

/// Earliest start at or after `from` whose run avoids every window.
///
/// Each step jumps to the latest end among overlapping windows, and a
/// window cannot overlap again once passed, so the loop ends. Run ends
/// clamp at `NaiveDateTime::MAX`.
fn skip_blackouts(
    from: NaiveDateTime,
    duration: Duration,
    windows: &[&MaintenanceWindow],
) -> NaiveDateTime {
    let mut start = from;
    loop {
        let end = offset_saturating(start, duration);
        let resume = windows
            .iter()
            .filter(|w| w.overlaps(start, end) || w.contains(start))
            .map(|w| w.end)
            .max();
        match resume {
            Some(resume) if resume > start => start = resume,
            _ => return start,
        }
    }
}

/// Post-placement report. Never moves jobs.
fn detect_violations(schedule: &Schedule, maintenance: &[MaintenanceWindow]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, placed) in schedule.jobs.iter().enumerate() {
        if placed.is_late() {
            violations.push(Violation::run_by_missed(
                index,
                format!(
                    "{} on {} ends {} ({:.2}h after run-by {})",
                    placed.job.product(),
                    placed.press(),
                    placed.end,
                    placed.lateness_hours(),
                    placed.job.run_by()
                ),
            ));
        }

        for window in maintenance
            .iter()
            .filter(|w| w.press == placed.press() && w.overlaps(placed.start, placed.end))
        {
            violations.push(Violation::maintenance_conflict(
                index,
                format!(
                    "{} on {} [{} - {}) overlaps maintenance [{} - {})",
                    placed.job.product(),
                    placed.press(),
                    placed.start,
                    placed.end,
                    window.start,
                    window.end
                ),
            ));
        }

        if let Some(earlier) = schedule.jobs[..index]
            .iter()
            .position(|other| other.overlaps(placed))
        {
            violations.push(Violation::press_overlap(
                index,
                format!(
                    "{} on {} overlaps job #{} ({})",
                    placed.job.product(),
                    placed.press(),
                    earlier,
                    schedule.jobs[earlier].job.product()
                ),
            ));
        }
    }

    violations
}
