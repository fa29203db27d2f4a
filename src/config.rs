//! Catalog configuration.
//!
//! The product-rate and board-width tables ship with the plant's current
//! values ([`Catalog::default`]) and can be replaced at startup from a JSON
//! document:
//!
//! ```json
//! {
//!   "product_rates": { "DUT10-40360R6W": 4.76 },
//!   "board_widths": { "B163600316C": 60.3125 },
//!   "default_width": 50.0,
//!   "wide_threshold": 50.0
//! }
//! ```
//!
//! `board_widths`, `default_width` and `wide_threshold` are optional.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, DEFAULT_BOARD_WIDTH, WIDE_PRESS_THRESHOLD};

/// Built-in product rates (rolls per hour).
pub const PRODUCT_RATES: &[(&str, f64)] = &[
    ("DUT10-40360R6W", 4.76),
    ("DUT9-40330R6W", 4.76),
    ("DUT9-40360R6W", 4.76),
    ("U10-30331RCA6W", 5.41),
    ("U10-30333RCA5W", 5.95),
    ("U10-30333RCA6W", 5.95),
    ("U10-40386R5WTG", 5.95),
    ("U9-20346R6W", 5.71),
    ("S12-30331RCA6W", 4.33),
    ("SX12-20346R6W", 4.33),
    ("SX12-30444D6W", 5.49),
    ("SX12-40360R6W", 4.37),
    ("SX20-20346R5W", 5.22),
    ("SX20-30331R5W", 5.22),
    ("SX20-30331RCA5W", 5.22),
    ("SX20-30444D5W", 5.27),
    ("U9-30331R5W", 5.19),
    ("U9-30331RCA5W", 5.50),
];

/// Built-in raw board widths.
pub const BOARD_WIDTHS: &[(&str, f64)] = &[
    ("B163600316C", 60.3125),
    ("B163510332C", 51.5),
    ("B206600316C", 60.3125),
    ("B206500708C", 50.875),
    ("B196510332C", 51.5),
    ("B166420332C", 42.5),
    ("B206420332C", 42.5),
    ("B206420508C", 50.875),
    ("B196420508C", 50.875),
];

/// On-disk shape of a [`Catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    product_rates: BTreeMap<String, f64>,
    #[serde(default)]
    board_widths: BTreeMap<String, f64>,
    #[serde(default = "default_width")]
    default_width: f64,
    #[serde(default = "wide_threshold")]
    wide_threshold: f64,
}

fn default_width() -> f64 {
    DEFAULT_BOARD_WIDTH
}

fn wide_threshold() -> f64 {
    WIDE_PRESS_THRESHOLD
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = ScheduleError;

    fn try_from(doc: CatalogDocument) -> Result<Self> {
        Catalog::new(doc.product_rates, doc.board_widths)?
            .with_default_width(doc.default_width)?
            .with_wide_threshold(doc.wide_threshold)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        Self {
            product_rates: catalog.product_rates,
            board_widths: catalog.board_widths,
            default_width: catalog.default_width,
            wide_threshold: catalog.wide_threshold,
        }
    }
}

impl Default for Catalog {
    /// The plant's built-in tables.
    fn default() -> Self {
        Self {
            product_rates: PRODUCT_RATES
                .iter()
                .map(|&(k, v)| (k.to_string(), v))
                .collect(),
            board_widths: BOARD_WIDTHS
                .iter()
                .map(|&(k, v)| (k.to_string(), v))
                .collect(),
            default_width: DEFAULT_BOARD_WIDTH,
            wide_threshold: WIDE_PRESS_THRESHOLD,
        }
    }
}

impl Catalog {
    /// Parses and validates a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Reads a JSON catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            products = catalog.product_count(),
            boards = catalog.board_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Serializes the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
