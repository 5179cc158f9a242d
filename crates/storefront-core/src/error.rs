//! Storefront error types.

use thiserror::Error;

/// Errors that can occur while deriving storefront state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    /// A configured value cannot be used (e.g. a zero free-shipping minimum).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Neither the recommendation list nor the fallback list had products.
    #[error("No product data available from upstream")]
    NoRecommendationData,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A timestamp from content could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for StorefrontError {
    fn from(e: toml::de::Error) -> Self {
        StorefrontError::Serialization(e.to_string())
    }
}
