//! Product catalog module.
//!
//! Contains the product summary used by every list section and the
//! featured-products tag filter.

mod featured;
mod product;

pub use featured::{featured_filter, FeaturedTag};
pub use product::{MoneyV2, ProductCard, ProductImage, ProductSummary};
