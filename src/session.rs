//! Planning session.
//!
//! Owns the catalog and the three append-only lists the planner works
//! with: jobs, maintenance windows and free-text suggestions. Nothing is
//! removed or edited in place. Each scheduling pass reads the current
//! lists as a snapshot and leaves them untouched.

use chrono::NaiveDateTime;
use tracing::info;

use crate::builder::{JobBuilder, JobRequest};
use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, Job, MaintenanceWindow, Schedule};
use crate::scheduler::PressScheduler;

/// Prefix that marks chat input as a suggestion.
pub const SUGGESTION_PREFIX: &str = "suggest:";

/// Catalog plus append-only planning state.
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    catalog: Catalog,
    jobs: Vec<Job>,
    maintenance: Vec<MaintenanceWindow>,
    suggestions: Vec<String>,
}

impl PlanningSession {
    /// Creates an empty session over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            jobs: Vec::new(),
            maintenance: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Jobs in submission order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Maintenance windows in submission order.
    pub fn maintenance(&self) -> &[MaintenanceWindow] {
        &self.maintenance
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Builds a job without storing it.
    pub fn create_job(&self, request: &JobRequest) -> Result<Job> {
        JobBuilder::new(&self.catalog).build(request)
    }

    /// Builds a job and appends it to the job list.
    pub fn submit_job(&mut self, request: &JobRequest) -> Result<&Job> {
        let job = self.create_job(request)?;
        info!(
            product = job.product(),
            press = %job.press(),
            quantity = job.quantity(),
            "job added"
        );
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Appends a job built elsewhere (e.g. deserialized). Every `Job` has a
    /// positive quantity and rate, so it is always schedulable.
    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Appends a maintenance window.
    pub fn add_maintenance(&mut self, window: MaintenanceWindow) {
        info!(
            press = %window.press,
            start = %window.start,
            end = %window.end,
            "maintenance scheduled"
        );
        self.maintenance.push(window);
    }

    /// Records chat input of the form `suggest: <text>`.
    ///
    /// The prefix is matched case-insensitively and the remainder is
    /// trimmed before storing.
    pub fn record_suggestion(&mut self, input: &str) -> Result<&str> {
        let text = input
            .get(..SUGGESTION_PREFIX.len())
            .filter(|head| head.eq_ignore_ascii_case(SUGGESTION_PREFIX))
            .map(|_| input[SUGGESTION_PREFIX.len()..].trim())
            .ok_or(ScheduleError::MissingSuggestionPrefix)?;

        self.suggestions.push(text.to_string());
        Ok(&self.suggestions[self.suggestions.len() - 1])
    }

    /// Schedules the current jobs and maintenance against the wall clock.
    pub fn schedule(&self, scheduler: &PressScheduler) -> Schedule {
        scheduler.schedule(&self.jobs, &self.maintenance)
    }

    /// Schedules the current jobs and maintenance at an explicit instant.
    pub fn schedule_at(&self, scheduler: &PressScheduler, now: NaiveDateTime) -> Schedule {
        scheduler.schedule_at(&self.jobs, &self.maintenance, now)
    }
}
