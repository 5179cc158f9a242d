//! Storefront pages.
//!
//! Loaders gather upstream data through [`CommerceSource`] and
//! [`ContentSource`], run the `storefront-core` engines and render
//! server-side HTML sections:
//!
//! - [`ProductPage`]: announcement countdown, product header,
//!   complete-the-look and recommendations
//! - [`CartDrawer`]: free-shipping progress
//! - [`HomePage`]: featured-products swimlane

pub mod data;
pub mod error;
pub mod pages;
pub mod sections;
pub mod source;

pub use data::{AnnouncementContent, CmsCatalog, CmsProduct, Reference};
pub use error::{PageError, SourceError};
pub use pages::{CartDrawer, HomePage, LogSettings, ProductPage, Sources};
pub use storefront_observability::{LogFormat, LogLevel, RequestId};
pub use source::{CommerceSource, ContentSource, InMemoryCommerce, InMemoryContent};
