//! Print job scheduler for a two-press plant.
//!
//! Jobs are resolved against static catalogs (product → rate,
//! raw board → width), routed to the wide or narrow press by board width,
//! and placed on a timeline per press. Placement is sequential in input
//! order, starting from the current hour; a preferred start pins a job to
//! a fixed instant instead.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Catalog`, `Press`, `Job`,
//!   `MaintenanceWindow`, `ScheduledJob`, `Schedule`
//! - **`builder`**: Resolves job requests into jobs
//! - **`scheduler`**: `PressScheduler` and `ScheduleKpi`
//! - **`session`**: Append-only planning state feeding the scheduler
//! - **`validation`**: Checks for jobs and windows from outside the builder
//! - **`config`**: Built-in catalog and JSON catalog loading
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use press_schedule::builder::JobRequest;
//! use press_schedule::models::{Catalog, Press};
//! use press_schedule::scheduler::PressScheduler;
//! use press_schedule::session::PlanningSession;
//!
//! let mut session = PlanningSession::new(Catalog::default());
//! let run_by = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! session
//!     .submit_job(&JobRequest::new("DUT10-40360R6W", "B163600316C", 100, run_by))
//!     .unwrap();
//!
//! let now = run_by.and_hms_opt(6, 30, 0).unwrap();
//! let schedule = session.schedule_at(&PressScheduler::new(), now);
//! assert_eq!(schedule.jobs[0].press(), Press::PressA);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use error::{Result, ScheduleError};
