//! Storefront domain types and derived-state engines.
//!
//! This crate holds the small amount of real logic behind the storefront's
//! presentation layer:
//!
//! - **Countdown**: days/hours/minutes/seconds until a promotion expires,
//!   plus a scoped one-second ticker
//! - **Shipping**: progress toward the free-shipping threshold
//! - **Recommendations**: merging recommended and best-selling products
//! - **Catalog / Cart**: product summaries and cart totals feeding the above
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let total = Money::from_decimal(40.0, Currency::GBP);
//! let minimum = Money::from_decimal(100.0, Currency::GBP);
//! let progress = compute_progress(&total, &minimum).unwrap();
//!
//! assert!(!progress.qualifies);
//! assert_eq!(progress.amount_remaining.display(), "\u{00a3}60.00");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod countdown;
pub mod recommendations;
pub mod shipping;

pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{featured_filter, FeaturedTag, ProductImage, ProductSummary};

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Engines
    pub use crate::countdown::{
        compute_remaining, parse_promotion_expiry, remaining_for, Clock, CountdownTick,
        CountdownTimer, DigitVisibility, Remaining, SystemClock,
    };
    pub use crate::recommendations::{merge_recommendations, RecommendationResponse};
    pub use crate::shipping::{compute_progress, ShippingProgress};
}
