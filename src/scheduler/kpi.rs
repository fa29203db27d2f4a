//! Schedule quality metrics (KPIs).
//!
//! Computed from a finished schedule only; they describe the plan and
//! never feed back into placement.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Horizon | Earliest start to latest end (hours) |
//! | Busy hours | Sum of job durations per press |
//! | Utilization | Busy hours / horizon, per press |
//! | Late jobs | Jobs ending after their run-by date |
//! | Total / max lateness | Hours past run-by |
//! | On-time rate | Fraction of jobs not late |

use std::collections::HashMap;

use crate::models::{duration_to_hours, Press, Schedule};

/// Schedule performance indicators. All durations are in hours.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Earliest start to latest end.
    pub horizon_hours: f64,
    /// Sum of job durations per press.
    pub busy_hours_by_press: HashMap<Press, f64>,
    /// Busy hours over horizon, per press.
    pub utilization_by_press: HashMap<Press, f64>,
    /// Number of jobs ending after their run-by date.
    pub late_jobs: usize,
    /// Sum of lateness across all jobs.
    pub total_lateness_hours: f64,
    /// Largest single lateness.
    pub max_lateness_hours: f64,
    /// Fraction of jobs finishing on time (1.0 for an empty schedule).
    pub on_time_rate: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let horizon_hours = match (schedule.first_start(), schedule.makespan_end()) {
            (Some(first), Some(last)) => duration_to_hours(last - first),
            _ => 0.0,
        };

        let mut busy_hours_by_press = HashMap::new();
        let mut utilization_by_press = HashMap::new();
        for press in Press::ALL {
            let busy = schedule.busy_hours(press);
            busy_hours_by_press.insert(press, busy);
            let utilization = if horizon_hours > 0.0 {
                busy / horizon_hours
            } else {
                0.0
            };
            utilization_by_press.insert(press, utilization);
        }

        let mut late_jobs = 0;
        let mut total_lateness_hours = 0.0;
        let mut max_lateness_hours: f64 = 0.0;
        for placed in schedule {
            let lateness = placed.lateness_hours();
            if lateness > 0.0 {
                late_jobs += 1;
                total_lateness_hours += lateness;
                max_lateness_hours = max_lateness_hours.max(lateness);
            }
        }

        let on_time_rate = if schedule.is_empty() {
            1.0
        } else {
            (schedule.len() - late_jobs) as f64 / schedule.len() as f64
        };

        Self {
            horizon_hours,
            busy_hours_by_press,
            utilization_by_press,
            late_jobs,
            total_lateness_hours,
            max_lateness_hours,
            on_time_rate,
        }
    }

    /// Mean utilization across both presses.
    pub fn avg_utilization(&self) -> f64 {
        let sum: f64 = self.utilization_by_press.values().sum();
        sum / Press::ALL.len() as f64
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_lateness_hours: f64, min_on_time_rate: f64) -> bool {
        self.max_lateness_hours <= max_lateness_hours && self.on_time_rate >= min_on_time_rate
    }
}
