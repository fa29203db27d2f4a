//! Maintenance window model.
//!
//! A maintenance window reserves a press for upkeep over a half-open
//! interval `[start, end)`. Windows are append-only input to the
//! scheduler; whether placement avoids them is a scheduler policy.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::job::duration_to_hours;
use super::Press;

/// A maintenance reservation on one press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    /// Press under maintenance.
    pub press: Press,
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl MaintenanceWindow {
    /// Creates a window. No ordering check is made; see [`is_valid`](Self::is_valid).
    pub fn new(press: Press, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { press, start, end }
    }

    /// Creates a window from a date and two times of day on that date.
    pub fn on_date(press: Press, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(press, date.and_time(start), date.and_time(end))
    }

    /// Whether the window has positive length.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Length in hours (negative for inverted windows).
    pub fn duration_hours(&self) -> f64 {
        duration_to_hours(self.end - self.start)
    }

    /// Whether an instant falls inside the window.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether `[start, end)` intersects this window.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }

    /// Whether two windows on the same press intersect.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.press == other.press && self.overlaps(other.start, other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window(h0: u32, h1: u32) -> MaintenanceWindow {
        MaintenanceWindow::new(Press::PressA, at(h0, 0), at(h1, 0))
    }

    #[test]
    fn test_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let w = MaintenanceWindow::on_date(
            Press::PressB,
            date,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        );
        assert_eq!(w.start, at(8, 0));
        assert_eq!(w.end, at(10, 30));
        assert!((w.duration_hours() - 2.5).abs() < 1e-10);
        assert!(w.is_valid());
    }

    #[test]
    fn test_contains_half_open() {
        let w = window(8, 10);
        assert!(w.contains(at(8, 0)));
        assert!(w.contains(at(9, 59)));
        assert!(!w.contains(at(10, 0))); // exclusive end
        assert!(!w.contains(at(7, 59)));
    }

    #[test]
    fn test_overlaps() {
        let w = window(8, 10);
        assert!(w.overlaps(at(9, 0), at(11, 0)));
        assert!(w.overlaps(at(6, 0), at(12, 0)));
        assert!(!w.overlaps(at(10, 0), at(12, 0))); // touching
        assert!(!w.overlaps(at(6, 0), at(8, 0)));
    }

    #[test]
    fn test_conflicts_same_press_only() {
        let a = window(8, 10);
        let b = window(9, 11);
        let mut c = b.clone();
        c.press = Press::PressB;
        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&c));
    }

    #[test]
    fn test_inverted_window() {
        let w = window(10, 8);
        assert!(!w.is_valid());
        assert!(w.duration_hours() < 0.0);
    }
}
