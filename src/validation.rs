//! Input validation for scheduling passes.
//!
//! Every `Job` has a positive quantity and a positive finite rate, whether
//! built or deserialized. Jobs and windows that arrive from elsewhere can
//! still disagree with the catalog, and are checked here before
//! scheduling. Detects:
//! - Products missing from the catalog, or rates that disagree with it
//! - Press assignments that disagree with the board width
//! - Inverted or empty maintenance windows
//! - Overlapping maintenance windows on one press
//!
//! The scheduler never calls this; it stays total over its input.

use crate::models::{Catalog, Job, MaintenanceWindow};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Job product is not in the catalog.
    UnknownProduct,
    /// Job rate differs from the catalog rate.
    RateMismatch,
    /// Job press does not match its board width.
    PressMismatch,
    /// Maintenance window ends at or before its start.
    InvalidWindow,
    /// Two maintenance windows on one press overlap.
    OverlappingWindows,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates jobs and maintenance windows against a catalog.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    catalog: &Catalog,
    jobs: &[Job],
    maintenance: &[MaintenanceWindow],
) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, job) in jobs.iter().enumerate() {
        match catalog.rate(job.product()) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProduct,
                format!("Job #{index} references unknown product '{}'", job.product()),
            )),
            Some(rate) if rate != job.rate() => errors.push(ValidationError::new(
                ValidationErrorKind::RateMismatch,
                format!(
                    "Job #{index} ({}) has rate {} but catalog says {rate}",
                    job.product(),
                    job.rate()
                ),
            )),
            Some(_) => {}
        }

        let expected = catalog.press_for_width(job.board_width());
        if expected != job.press() {
            errors.push(ValidationError::new(
                ValidationErrorKind::PressMismatch,
                format!(
                    "Job #{index} ({}) width {} belongs on {expected}, not {}",
                    job.product(),
                    job.board_width(),
                    job.press()
                ),
            ));
        }
    }

    for (index, window) in maintenance.iter().enumerate() {
        if !window.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Maintenance #{index} on {} ends {} at or before its start {}",
                    window.press, window.end, window.start
                ),
            ));
        }
    }

    for (i, a) in maintenance.iter().enumerate() {
        for (j, b) in maintenance.iter().enumerate().skip(i + 1) {
            if a.is_valid() && b.is_valid() && a.conflicts_with(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingWindows,
                    format!("Maintenance #{i} and #{j} overlap on {}", a.press),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
