//! Schedule (solution) model.
//!
//! A schedule is the ordered list of placed jobs from one scheduling pass,
//! plus any problems detected after placement. Violations are reported,
//! never acted on: they do not move jobs.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::job::{duration_to_hours, offset_saturating};
use super::{Job, Press};

/// A job with its computed timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// The job as built.
    pub job: Job,
    /// `quantity / rate`.
    pub duration_hours: f64,
    /// Start instant.
    pub start: NaiveDateTime,
    /// End instant.
    pub end: NaiveDateTime,
}

/// A problem found in a placed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Position of the affected job in the schedule.
    pub job_index: usize,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of schedule problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Job ends after its run-by date.
    RunByMissed,
    /// Job runs during a maintenance window on its press.
    MaintenanceConflict,
    /// Job overlaps an earlier job on the same press.
    PressOverlap,
}

impl ScheduledJob {
    /// Places a job at `start`; the end follows from its duration.
    ///
    /// An end past the last representable instant is clamped to
    /// `NaiveDateTime::MAX`.
    pub fn new(job: Job, start: NaiveDateTime) -> Self {
        let duration_hours = job.duration_hours();
        let end = offset_saturating(start, job.duration());
        Self {
            job,
            duration_hours,
            start,
            end,
        }
    }

    #[inline]
    pub fn press(&self) -> Press {
        self.job.press()
    }

    /// Elapsed time between start and end.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Whether two placed jobs share a press and intersect in time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.press() == other.press() && self.start < other.end && other.start < self.end
    }

    /// Hours past the run-by date (0.0 when on time).
    pub fn lateness_hours(&self) -> f64 {
        let deadline = self.job.run_by_deadline();
        if self.end > deadline {
            duration_to_hours(self.end - deadline)
        } else {
            0.0
        }
    }

    pub fn is_late(&self) -> bool {
        self.end > self.job.run_by_deadline()
    }
}

impl Violation {
    /// Creates a run-by miss.
    pub fn run_by_missed(job_index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::RunByMissed,
            job_index,
            message: message.into(),
            severity: 60,
        }
    }

    /// Creates a maintenance conflict.
    pub fn maintenance_conflict(job_index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::MaintenanceConflict,
            job_index,
            message: message.into(),
            severity: 90,
        }
    }

    /// Creates a press overlap.
    pub fn press_overlap(job_index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::PressOverlap,
            job_index,
            message: message.into(),
            severity: 95,
        }
    }
}

/// The result of one scheduling pass.
///
/// Jobs keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed jobs, in input order.
    pub jobs: Vec<ScheduledJob>,
    /// Problems detected after placement.
    pub violations: Vec<Violation>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placed job.
    pub fn add_job(&mut self, job: ScheduledJob) {
        self.jobs.push(job);
    }

    /// Adds a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether no violations were reported.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledJob> {
        self.jobs.iter()
    }

    /// Drops the report and returns the placed jobs.
    pub fn into_jobs(self) -> Vec<ScheduledJob> {
        self.jobs
    }

    /// Earliest start across all jobs.
    pub fn first_start(&self) -> Option<NaiveDateTime> {
        self.jobs.iter().map(|j| j.start).min()
    }

    /// Latest end across all jobs.
    pub fn makespan_end(&self) -> Option<NaiveDateTime> {
        self.jobs.iter().map(|j| j.end).max()
    }

    /// Jobs placed on one press, in input order.
    pub fn jobs_for_press(&self, press: Press) -> Vec<&ScheduledJob> {
        self.jobs.iter().filter(|j| j.press() == press).collect()
    }

    /// Jobs that finish after their run-by date.
    pub fn late_jobs(&self) -> Vec<&ScheduledJob> {
        self.jobs.iter().filter(|j| j.is_late()).collect()
    }

    /// Violations of one type.
    pub fn violations_of(&self, violation_type: ViolationType) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .collect()
    }

    /// Total hours of work on one press.
    pub fn busy_hours(&self, press: Press) -> f64 {
        self.jobs
            .iter()
            .filter(|j| j.press() == press)
            .map(|j| j.duration_hours)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduledJob;
    type IntoIter = std::slice::Iter<'a, ScheduledJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
