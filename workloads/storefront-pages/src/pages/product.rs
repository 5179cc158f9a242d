//! Product detail page.

use chrono::{DateTime, Utc};

use storefront_core::catalog::ProductSummary;
use storefront_core::countdown::{Clock, CountdownTick, CountdownTimer};
use storefront_core::{StorefrontConfig, StorefrontError};
use storefront_observability::StructuredLogger;

use super::Sources;
use crate::data::{AnnouncementContent, CmsProduct};
use crate::error::PageError;
use crate::sections::{
    render_announcement, render_complete_the_look, render_product_header, render_recommendations,
};

/// Everything the product page renders.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub product: ProductSummary,
    pub announcement: Option<AnnouncementContent>,
    /// Parsed promotion end. `None` leaves the countdown inactive.
    pub promotion_expiry: Option<DateTime<Utc>>,
    /// Countdown as of load time.
    pub countdown: Option<CountdownTick>,
    pub complete_the_look: Vec<CmsProduct>,
    /// `None` when the section is omitted.
    pub recommendations: Option<Vec<ProductSummary>>,
}

impl ProductPage {
    /// Load the page for the product with URL handle `handle`.
    ///
    /// Only the product itself is critical: a missing product is
    /// [`PageError::NotFound`] and a failed product query is
    /// [`PageError::Upstream`]. Announcement, CMS and recommendation
    /// failures are logged and their sections left out.
    pub async fn load(
        sources: &Sources<'_>,
        handle: &str,
        config: &StorefrontConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, PageError> {
        let logger = sources.logger("product", format!("/products/{}", handle));
        logger.info_builder("product page load started")
            .field("handle", handle)
            .emit();

        let (product_res, catalog_res, announcement_res) = futures::join!(
            sources.commerce.product(handle),
            sources.content.catalog(),
            sources.content.announcement()
        );

        let product = match product_res {
            Ok(Some(product)) => product,
            Ok(None) => {
                logger.info_builder("product not found")
                    .field("handle", handle)
                    .emit();
                return Err(PageError::NotFound(handle.to_string()));
            }
            Err(e) => {
                logger.error_builder("product fetch failed")
                    .field("error", e.to_string())
                    .emit();
                return Err(e.into());
            }
        };
        logger.debug_builder("upstream fetches complete")
            .field("product_id", product.id.to_string())
            .emit();

        let complete_the_look = match catalog_res {
            Ok(catalog) => match catalog.find_by_slug(handle) {
                Some(document) => catalog
                    .complete_the_look(document)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => Vec::new(),
            },
            Err(e) => {
                logger.warn_builder("CMS catalog fetch failed")
                    .field("error", e.to_string())
                    .emit();
                Vec::new()
            }
        };

        let announcement = match announcement_res {
            Ok(announcement) => announcement,
            Err(e) => {
                logger.warn_builder("announcement fetch failed")
                    .field("error", e.to_string())
                    .emit();
                None
            }
        };
        let promotion_expiry = announcement
            .as_ref()
            .and_then(|content| promotion_expiry(content, &logger));
        let countdown = promotion_expiry.map(|target| CountdownTick::at(Some(target), now));

        let recommendations = load_recommendations(sources, &product, config, &logger).await?;

        logger.info_builder("product page loaded")
            .field("product_id", product.id.to_string())
            .field_bool("countdown", countdown.is_some())
            .field_i64("complete_the_look", complete_the_look.len() as i64)
            .field_bool("recommendations", recommendations.is_some())
            .emit();

        Ok(Self {
            product,
            announcement,
            promotion_expiry,
            countdown,
            complete_the_look,
            recommendations,
        })
    }

    /// Start the live countdown for this page's promotion.
    ///
    /// The returned timer belongs to the rendered view and stops when it is
    /// dropped. Outside a tokio runtime the timer never ticks.
    pub fn start_countdown<C: Clock>(&self, clock: C) -> CountdownTimer {
        match self.promotion_expiry {
            Some(target) => CountdownTimer::start(Some(target), clock),
            None => CountdownTimer::idle(),
        }
    }

    /// Render the page body.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(announcement) = &self.announcement {
            html.push_str(&render_announcement(announcement, self.countdown.as_ref()));
            html.push('\n');
        }

        html.push_str(&render_product_header(&self.product));

        let look = render_complete_the_look(&self.complete_the_look);
        if !look.is_empty() {
            html.push('\n');
            html.push_str(&look);
        }

        if let Some(recommendations) = &self.recommendations {
            html.push('\n');
            html.push_str(&render_recommendations(recommendations));
        }

        html
    }
}

fn promotion_expiry(content: &AnnouncementContent, logger: &StructuredLogger) -> Option<DateTime<Utc>> {
    match content.expiry() {
        Ok(expiry) => expiry,
        Err(e) => {
            logger.warn_builder("ignoring unparseable promotion expiry")
                .field("error", e.to_string())
                .emit();
            None
        }
    }
}

async fn load_recommendations(
    sources: &Sources<'_>,
    product: &ProductSummary,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> Result<Option<Vec<ProductSummary>>, PageError> {
    let response = match sources
        .commerce
        .recommendations(&product.id, config.recommendations.count)
        .await
    {
        Ok(response) => response,
        Err(e) => {
            logger.warn_builder("recommendations fetch failed")
                .field("error", e.to_string())
                .emit();
            return Ok(None);
        }
    };

    match response.merge(&product.id, config.recommendations.limit) {
        Ok(merged) => Ok(Some(merged)),
        Err(StorefrontError::NoRecommendationData) => {
            logger.warn_builder("no recommendation data, omitting section")
                .field("product_id", product.id.to_string())
                .emit();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
