//! Crate error type.
//!
//! Lookup and catalog errors fail fast at job-creation or load time.
//! The scheduler itself never fails: every `Job` is checked on the way in.

use thiserror::Error;

/// Errors raised while building jobs, loading catalogs, or recording input.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Product id is not a key of the rate catalog.
    #[error("unknown product: {product}")]
    UnknownProduct { product: String },

    /// Quantity below the minimum of one roll.
    #[error("invalid quantity {quantity}: at least one roll is required")]
    InvalidQuantity { quantity: u32 },

    /// Job rate that is not a positive finite number of rolls per hour.
    #[error("invalid rate {rate} for product {product}: must be positive and finite")]
    InvalidRate { product: String, rate: f64 },

    /// Press name other than `PressA` / `PressB`.
    #[error("unknown press: {press}")]
    UnknownPress { press: String },

    /// Catalog value that is not a positive finite number.
    #[error("invalid {table} entry '{key}': {value} (must be positive and finite)")]
    InvalidCatalogEntry {
        table: &'static str,
        key: String,
        value: f64,
    },

    /// Suggestion text without the `suggest:` prefix.
    #[error("suggestions must start with 'suggest:'")]
    MissingSuggestionPrefix,

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;
