//! Home page featured swimlane.

use storefront_core::catalog::{featured_filter, FeaturedTag, ProductSummary};
use storefront_core::StorefrontConfig;

use super::Sources;
use crate::error::PageError;
use crate::sections::render_swimlane;

/// Home page state: the selected swimlane tab and its products.
#[derive(Debug, Clone)]
pub struct HomePage {
    /// Tab matching the query, `None` for an unknown tag.
    pub active_tag: Option<FeaturedTag>,
    /// Upstream filter that was queried (e.g. "tag:Sport").
    pub filter: String,
    pub products: Vec<ProductSummary>,
}

impl HomePage {
    /// Load the swimlane for the `?tag=` query parameter.
    pub async fn load(
        sources: &Sources<'_>,
        tag: Option<&str>,
        config: &StorefrontConfig,
    ) -> Result<Self, PageError> {
        let filter = featured_filter(tag, config.featured.default_tag);
        let active_tag = FeaturedTag::from_tag(filter.trim_start_matches("tag:"));

        let logger = sources.logger("home", "/".to_string());
        let products = sources
            .commerce
            .featured_products(&filter, config.featured.count)
            .await?;

        logger.info_builder("home page loaded")
            .field("filter", filter.as_str())
            .field_i64("products", products.len() as i64)
            .emit();

        Ok(Self {
            active_tag,
            filter,
            products,
        })
    }

    pub fn render(&self) -> String {
        render_swimlane(self.active_tag, &self.products)
    }
}
