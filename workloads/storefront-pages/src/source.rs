//! Upstream data sources.
//!
//! Pages never talk to the commerce platform or the CMS directly; hosts
//! hand them implementations of these traits. The in-memory versions back
//! tests, fixtures and the CLI.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use storefront_core::catalog::ProductSummary;
use storefront_core::ids::ProductId;
use storefront_core::recommendations::RecommendationResponse;

use crate::data::{AnnouncementContent, CmsCatalog};
use crate::error::SourceError;

/// Commerce platform queries used by the pages.
#[async_trait]
pub trait CommerceSource: Send + Sync {
    /// Product by URL handle, `None` if the platform has no such product.
    async fn product(&self, handle: &str) -> Result<Option<ProductSummary>, SourceError>;

    /// Recommendations for `product_id` plus `count` best sellers.
    async fn recommendations(
        &self,
        product_id: &ProductId,
        count: usize,
    ) -> Result<RecommendationResponse, SourceError>;

    /// At most `count` products matching a `tag:<Tag>` filter.
    async fn featured_products(
        &self,
        filter: &str,
        count: usize,
    ) -> Result<Vec<ProductSummary>, SourceError>;
}

/// Headless CMS queries used by the pages.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Current announcement, if editors published one.
    async fn announcement(&self) -> Result<Option<AnnouncementContent>, SourceError>;

    /// Every product document.
    async fn catalog(&self) -> Result<CmsCatalog, SourceError>;
}

/// Commerce data held in memory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryCommerce {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    /// Platform recommendations keyed by product id.
    #[serde(default)]
    pub recommendations: HashMap<ProductId, Vec<ProductSummary>>,
    #[serde(default)]
    pub best_sellers: Vec<ProductSummary>,
}

impl InMemoryCommerce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: ProductSummary) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_recommendations(mut self, id: impl Into<ProductId>, products: Vec<ProductSummary>) -> Self {
        self.recommendations.insert(id.into(), products);
        self
    }

    pub fn with_best_sellers(mut self, products: Vec<ProductSummary>) -> Self {
        self.best_sellers = products;
        self
    }

    /// Load a fixture document.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Malformed {
            source_name: "commerce",
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CommerceSource for InMemoryCommerce {
    async fn product(&self, handle: &str) -> Result<Option<ProductSummary>, SourceError> {
        Ok(self.products.iter().find(|p| p.handle == handle).cloned())
    }

    async fn recommendations(
        &self,
        product_id: &ProductId,
        count: usize,
    ) -> Result<RecommendationResponse, SourceError> {
        let best_sellers: Vec<ProductSummary> = self.best_sellers.iter().take(count).cloned().collect();
        Ok(RecommendationResponse {
            recommended: self.recommendations.get(product_id).cloned(),
            additional: (!best_sellers.is_empty()).then_some(best_sellers),
        })
    }

    async fn featured_products(
        &self,
        filter: &str,
        count: usize,
    ) -> Result<Vec<ProductSummary>, SourceError> {
        let tag = filter.strip_prefix("tag:").unwrap_or(filter);
        Ok(self
            .products
            .iter()
            .filter(|p| p.has_tag(tag))
            .take(count)
            .cloned()
            .collect())
    }
}

/// CMS content held in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InMemoryContent {
    #[serde(default)]
    pub announcement: Option<AnnouncementContent>,
    #[serde(default)]
    pub catalog: CmsCatalog,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_announcement(mut self, announcement: AnnouncementContent) -> Self {
        self.announcement = Some(announcement);
        self
    }

    pub fn with_catalog(mut self, catalog: CmsCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

#[async_trait]
impl ContentSource for InMemoryContent {
    async fn announcement(&self) -> Result<Option<AnnouncementContent>, SourceError> {
        Ok(self.announcement.clone())
    }

    async fn catalog(&self) -> Result<CmsCatalog, SourceError> {
        Ok(self.catalog.clone())
    }
}
