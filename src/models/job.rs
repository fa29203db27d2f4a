//! Print job model.
//!
//! A job is one unit of press work: a quantity of rolls of one product
//! printed on one raw board. Rate, board width and press are resolved
//! once when the job is built and never recomputed.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Press;
use crate::error::{Result, ScheduleError};

/// An immutable print job.
///
/// Built through [`JobBuilder`](crate::builder::JobBuilder); fields are
/// read-only after construction. Deserialized jobs go through the same
/// quantity, rate and width checks, so `duration_hours` is always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobRecord", into = "JobRecord")]
pub struct Job {
    product: String,
    raw_board: String,
    quantity: u32,
    rate: f64,
    board_width: f64,
    press: Press,
    run_by: NaiveDate,
    preferred_start: Option<NaiveTime>,
}

impl Job {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        product: String,
        raw_board: String,
        quantity: u32,
        rate: f64,
        board_width: f64,
        press: Press,
        run_by: NaiveDate,
        preferred_start: Option<NaiveTime>,
    ) -> Self {
        Self {
            product,
            raw_board,
            quantity,
            rate,
            board_width,
            press,
            run_by,
            preferred_start,
        }
    }

    /// Product id (key of the rate table).
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Raw board id as entered; may be unknown to the width table.
    pub fn raw_board(&self) -> &str {
        &self.raw_board
    }

    /// Number of rolls.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Rolls per hour.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn board_width(&self) -> f64 {
        self.board_width
    }

    pub fn press(&self) -> Press {
        self.press
    }

    /// Date the job should be finished by. Advisory only.
    pub fn run_by(&self) -> NaiveDate {
        self.run_by
    }

    /// Requested time of day, if any.
    pub fn preferred_start(&self) -> Option<NaiveTime> {
        self.preferred_start
    }

    /// Fixed start instant: the preferred time on the run-by date.
    ///
    /// `None` means the job is placed at its press's frontier.
    pub fn fixed_start(&self) -> Option<NaiveDateTime> {
        self.preferred_start.map(|t| self.run_by.and_time(t))
    }

    /// Processing time in hours (`quantity / rate`).
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.quantity) / self.rate
    }

    /// Processing time at microsecond resolution.
    pub fn duration(&self) -> Duration {
        hours_to_duration(self.duration_hours())
    }

    /// First instant after the run-by date (exclusive completion bound).
    ///
    /// Clamps to `NaiveDateTime::MAX` when the run-by date is the last
    /// representable day.
    pub fn run_by_deadline(&self) -> NaiveDateTime {
        self.run_by
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN))
    }
}

/// Serialized shape of a [`Job`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    product: String,
    raw_board: String,
    quantity: u32,
    rate: f64,
    board_width: f64,
    press: Press,
    run_by: NaiveDate,
    preferred_start: Option<NaiveTime>,
}

impl TryFrom<JobRecord> for Job {
    type Error = ScheduleError;

    fn try_from(record: JobRecord) -> Result<Self> {
        if record.quantity < 1 {
            return Err(ScheduleError::InvalidQuantity {
                quantity: record.quantity,
            });
        }
        if !(record.rate.is_finite() && record.rate > 0.0) {
            return Err(ScheduleError::InvalidRate {
                product: record.product,
                rate: record.rate,
            });
        }
        if !(record.board_width.is_finite() && record.board_width > 0.0) {
            return Err(ScheduleError::InvalidCatalogEntry {
                table: "width",
                key: record.raw_board,
                value: record.board_width,
            });
        }
        Ok(Job::new(
            record.product,
            record.raw_board,
            record.quantity,
            record.rate,
            record.board_width,
            record.press,
            record.run_by,
            record.preferred_start,
        ))
    }
}

impl From<Job> for JobRecord {
    fn from(job: Job) -> Self {
        Self {
            product: job.product,
            raw_board: job.raw_board,
            quantity: job.quantity,
            rate: job.rate,
            board_width: job.board_width,
            press: job.press,
            run_by: job.run_by,
            preferred_start: job.preferred_start,
        }
    }
}

/// Converts fractional hours to a `Duration`, rounded to the microsecond.
///
/// Spans beyond `i64::MAX` microseconds (about 292,000 years) saturate to
/// that bound; [`offset_saturating`] then clamps the resulting instant.
pub fn hours_to_duration(hours: f64) -> Duration {
    let us = (hours * 3_600_000_000.0).round();
    if us >= i64::MAX as f64 {
        Duration::microseconds(i64::MAX)
    } else if us <= i64::MIN as f64 {
        Duration::microseconds(i64::MIN)
    } else {
        Duration::microseconds(us as i64)
    }
}

/// `at + by`, clamped to the representable datetime range.
pub fn offset_saturating(at: NaiveDateTime, by: Duration) -> NaiveDateTime {
    match at.checked_add_signed(by) {
        Some(t) => t,
        None if by < Duration::zero() => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

/// Converts a `Duration` back to fractional hours.
pub fn duration_to_hours(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(us) => us as f64 / 3_600_000_000.0,
        None => duration.num_seconds() as f64 / 3_600.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn job(quantity: u32, rate: f64, preferred: Option<NaiveTime>) -> Job {
        Job::new(
            "DUT10-40360R6W".into(),
            "B163600316C".into(),
            quantity,
            rate,
            60.3125,
            Press::PressA,
            date(2024, 6, 1),
            preferred,
        )
    }

    #[test]
    fn test_duration_hours() {
        let j = job(100, 4.76, None);
        assert_eq!(j.duration_hours(), 100.0 / 4.76);
        assert!((j.duration_hours() - 21.0084).abs() < 1e-4);
        assert!((duration_to_hours(j.duration()) - 21.0084).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_start() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let j = job(10, 5.0, Some(nine));
        assert_eq!(j.fixed_start(), Some(date(2024, 6, 1).and_time(nine)));
        assert_eq!(job(10, 5.0, None).fixed_start(), None);
    }

    #[test]
    fn test_midnight_preferred_start_is_kept() {
        let j = job(10, 5.0, Some(NaiveTime::MIN));
        assert_eq!(j.fixed_start(), Some(date(2024, 6, 1).and_time(NaiveTime::MIN)));
    }

    #[test]
    fn test_run_by_deadline() {
        let j = job(10, 5.0, None);
        assert_eq!(j.run_by_deadline(), date(2024, 6, 2).and_time(NaiveTime::MIN));
    }

    #[test]
    fn test_run_by_deadline_on_last_date() {
        let mut j = job(10, 5.0, None);
        j.run_by = NaiveDate::MAX;
        assert_eq!(j.run_by_deadline(), NaiveDateTime::MAX);
    }

    #[test]
    fn test_hours_to_duration() {
        assert_eq!(hours_to_duration(1.5), Duration::minutes(90));
        assert_eq!(hours_to_duration(0.0), Duration::zero());
        assert_eq!(hours_to_duration(1e300), Duration::microseconds(i64::MAX));
    }

    #[test]
    fn test_offset_saturating() {
        let start = date(2024, 6, 1).and_time(NaiveTime::MIN);
        assert_eq!(
            offset_saturating(start, Duration::hours(3)),
            date(2024, 6, 1).and_hms_opt(3, 0, 0).unwrap()
        );

        let longest = job(u32::MAX, 1.0, None).duration();
        assert_eq!(offset_saturating(start, longest), NaiveDateTime::MAX);
        assert_eq!(offset_saturating(start, -longest), NaiveDateTime::MIN);
    }

    #[test]
    fn test_deserialize_checks_fields() {
        let valid = job(10, 5.0, None);
        let mut value = serde_json::to_value(&valid).unwrap();
        let back: Job = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back, valid);

        value["rate"] = serde_json::json!(0.0);
        let err = serde_json::from_value::<Job>(value.clone()).unwrap_err();
        assert!(err.to_string().contains("invalid rate"));

        value["rate"] = serde_json::json!(5.0);
        value["quantity"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Job>(value.clone()).is_err());

        value["quantity"] = serde_json::json!(10);
        value["board_width"] = serde_json::json!(-1.0);
        assert!(serde_json::from_value::<Job>(value).is_err());
    }
}
