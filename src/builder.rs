//! Job record builder.
//!
//! Resolves a job request against the catalog:
//!
//! 1. `rate` from the product table (unknown product is an error).
//! 2. `board_width` from the width table, or the default width.
//! 3. `press` from the width: wide press iff width > threshold.
//!
//! Unknown raw boards are accepted silently and routed with the default
//! width. Building is pure; storing the job is the caller's concern.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, Job};

/// Caller input for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Product id; must be in the rate table.
    pub product: String,
    /// Raw board id; free text.
    pub raw_board: String,
    /// Rolls, at least one.
    pub quantity: u32,
    /// Date the job should be finished by.
    pub run_by: NaiveDate,
    /// Fixed time of day on `run_by`, if the job must start then.
    pub preferred_start: Option<NaiveTime>,
}

impl JobRequest {
    /// Creates a request without a preferred start.
    pub fn new(
        product: impl Into<String>,
        raw_board: impl Into<String>,
        quantity: u32,
        run_by: NaiveDate,
    ) -> Self {
        Self {
            product: product.into(),
            raw_board: raw_board.into(),
            quantity,
            run_by,
            preferred_start: None,
        }
    }

    /// Sets the preferred start time.
    pub fn with_preferred_start(mut self, time: NaiveTime) -> Self {
        self.preferred_start = Some(time);
        self
    }
}

/// Builds jobs against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct JobBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> JobBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves a request into a job.
    ///
    /// # Errors
    /// - [`ScheduleError::UnknownProduct`] if the product has no rate.
    /// - [`ScheduleError::InvalidQuantity`] if `quantity` is zero.
    #[instrument(
        level = "debug",
        skip(self, request),
        fields(product = %request.product, quantity = request.quantity)
    )]
    pub fn build(&self, request: &JobRequest) -> Result<Job> {
        let rate = self
            .catalog
            .rate(&request.product)
            .ok_or_else(|| ScheduleError::UnknownProduct {
                product: request.product.clone(),
            })?;

        if request.quantity < 1 {
            return Err(ScheduleError::InvalidQuantity {
                quantity: request.quantity,
            });
        }

        let board_width = self.catalog.board_width(&request.raw_board);
        let press = self.catalog.press_for_width(board_width);

        if !self.catalog.is_known_board(&request.raw_board) {
            debug!(
                raw_board = %request.raw_board,
                board_width,
                "unknown raw board, using default width"
            );
        }

        Ok(Job::new(
            request.product.clone(),
            request.raw_board.clone(),
            request.quantity,
            rate,
            board_width,
            press,
            request.run_by,
            request.preferred_start,
        ))
    }
}

/// Builds one job from loose arguments.
pub fn create_job(
    catalog: &Catalog,
    product: &str,
    raw_board: &str,
    quantity: u32,
    run_by: NaiveDate,
    preferred_start: Option<NaiveTime>,
) -> Result<Job> {
    let request = JobRequest {
        product: product.to_string(),
        raw_board: raw_board.to_string(),
        quantity,
        run_by,
        preferred_start,
    };
    JobBuilder::new(catalog).build(&request)
}
