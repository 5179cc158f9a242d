//! Content models for storefront pages.

mod cms;

pub use cms::*;
