//! Static lookup tables: product rates and raw board widths.
//!
//! Both tables are loaded once and never mutated. Lookups are exact
//! string matches. Every stored value is positive and finite; the
//! constructors reject anything else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Press;
use crate::config::CatalogDocument;
use crate::error::{Result, ScheduleError};

/// Width assumed for raw boards missing from the width table.
pub const DEFAULT_BOARD_WIDTH: f64 = 50.0;

/// Widths strictly above this value are routed to the wide press.
pub const WIDE_PRESS_THRESHOLD: f64 = 50.0;

/// Product-rate and board-width tables plus press routing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    pub(crate) product_rates: BTreeMap<String, f64>,
    pub(crate) board_widths: BTreeMap<String, f64>,
    pub(crate) default_width: f64,
    pub(crate) wide_threshold: f64,
}

impl Catalog {
    /// Creates a catalog from explicit tables with default routing parameters.
    ///
    /// Fails with [`ScheduleError::InvalidCatalogEntry`] on the first
    /// non-positive or non-finite rate or width.
    pub fn new(
        product_rates: impl IntoIterator<Item = (String, f64)>,
        board_widths: impl IntoIterator<Item = (String, f64)>,
    ) -> Result<Self> {
        let product_rates: BTreeMap<String, f64> = product_rates.into_iter().collect();
        let board_widths: BTreeMap<String, f64> = board_widths.into_iter().collect();

        for (key, &value) in &product_rates {
            check_positive("rate", key, value)?;
        }
        for (key, &value) in &board_widths {
            check_positive("width", key, value)?;
        }

        Ok(Self {
            product_rates,
            board_widths,
            default_width: DEFAULT_BOARD_WIDTH,
            wide_threshold: WIDE_PRESS_THRESHOLD,
        })
    }

    /// Sets the width used for unknown raw boards.
    pub fn with_default_width(mut self, width: f64) -> Result<Self> {
        check_positive("default width", "default_width", width)?;
        self.default_width = width;
        Ok(self)
    }

    /// Sets the wide-press routing threshold.
    pub fn with_wide_threshold(mut self, threshold: f64) -> Result<Self> {
        check_positive("threshold", "wide_threshold", threshold)?;
        self.wide_threshold = threshold;
        Ok(self)
    }

    /// Processing rate (rolls per hour) for a product.
    pub fn rate(&self, product: &str) -> Option<f64> {
        self.product_rates.get(product).copied()
    }

    /// Whether the product is in the rate table.
    pub fn contains_product(&self, product: &str) -> bool {
        self.product_rates.contains_key(product)
    }

    /// Width for a raw board, or the default width if unknown.
    pub fn board_width(&self, raw_board: &str) -> f64 {
        self.board_widths
            .get(raw_board)
            .copied()
            .unwrap_or(self.default_width)
    }

    /// Whether the raw board is in the width table.
    pub fn is_known_board(&self, raw_board: &str) -> bool {
        self.board_widths.contains_key(raw_board)
    }

    /// Press a board of the given width runs on.
    pub fn press_for_width(&self, width: f64) -> Press {
        Press::for_width(width, self.wide_threshold)
    }

    /// Product ids with their rates, sorted by id.
    pub fn products(&self) -> impl Iterator<Item = (&str, f64)> {
        self.product_rates.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Raw board ids with their widths, sorted by id.
    pub fn boards(&self) -> impl Iterator<Item = (&str, f64)> {
        self.board_widths.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    pub fn wide_threshold(&self) -> f64 {
        self.wide_threshold
    }

    pub fn product_count(&self) -> usize {
        self.product_rates.len()
    }

    pub fn board_count(&self) -> usize {
        self.board_widths.len()
    }
}

fn check_positive(table: &'static str, key: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidCatalogEntry {
            table,
            key: key.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![("P1".to_string(), 4.0), ("P2".to_string(), 5.5)],
            vec![("WIDE".to_string(), 60.0), ("EDGE".to_string(), 50.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_rate_lookup() {
        let c = small_catalog();
        assert_eq!(c.rate("P1"), Some(4.0));
        assert_eq!(c.rate("p1"), None); // exact match only
        assert!(c.contains_product("P2"));
        assert_eq!(c.product_count(), 2);
    }

    #[test]
    fn test_board_width_default() {
        let c = small_catalog();
        assert!((c.board_width("WIDE") - 60.0).abs() < 1e-10);
        assert!((c.board_width("nope") - DEFAULT_BOARD_WIDTH).abs() < 1e-10);
        assert!(!c.is_known_board("nope"));
    }

    #[test]
    fn test_press_routing() {
        let c = small_catalog();
        assert_eq!(c.press_for_width(c.board_width("WIDE")), Press::PressA);
        assert_eq!(c.press_for_width(c.board_width("EDGE")), Press::PressB);
        assert_eq!(c.press_for_width(c.board_width("unknown")), Press::PressB);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Catalog::new(vec![("P1".to_string(), 0.0)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidCatalogEntry { table: "rate", .. }
        ));

        let err = Catalog::new(vec![], vec![("B".to_string(), f64::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidCatalogEntry { table: "width", .. }
        ));
    }

    #[test]
    fn test_custom_routing_parameters() {
        let c = small_catalog()
            .with_default_width(55.0)
            .unwrap()
            .with_wide_threshold(58.0)
            .unwrap();
        assert_eq!(c.press_for_width(c.board_width("unknown")), Press::PressB);
        assert_eq!(c.press_for_width(c.board_width("WIDE")), Press::PressA);
        assert!(small_catalog().with_default_width(-1.0).is_err());
    }
}
