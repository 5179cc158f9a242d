//! Merging platform recommendations with best sellers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductSummary;
use crate::error::StorefrontError;
use crate::ids::ProductId;

/// Upstream payload of the recommendations query.
///
/// `recommended` is the platform's per-product recommendation list and may
/// be missing entirely for new products; `additional` is a best-selling
/// list used to pad it out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommended: Option<Vec<ProductSummary>>,
    #[serde(default)]
    pub additional: Option<Vec<ProductSummary>>,
}

impl RecommendationResponse {
    /// Merge both lists for the product page of `current`.
    pub fn merge(
        &self,
        current: &ProductId,
        limit: Option<usize>,
    ) -> Result<Vec<ProductSummary>, StorefrontError> {
        merge_recommendations(
            self.recommended.as_deref().unwrap_or_default(),
            self.additional.as_deref().unwrap_or_default(),
            current,
            limit,
        )
    }
}

/// Concatenate `primary` and `fallback`, keep the first occurrence of each
/// product id, drop `exclude` and cap the result at `limit`.
///
/// Fails with [`StorefrontError::NoRecommendationData`] when both inputs are
/// empty. An empty result after exclusion is not an error.
pub fn merge_recommendations(
    primary: &[ProductSummary],
    fallback: &[ProductSummary],
    exclude: &ProductId,
    limit: Option<usize>,
) -> Result<Vec<ProductSummary>, StorefrontError> {
    if primary.is_empty() && fallback.is_empty() {
        return Err(StorefrontError::NoRecommendationData);
    }

    let mut seen: HashSet<&ProductId> = HashSet::with_capacity(primary.len() + fallback.len());
    let merged: Vec<ProductSummary> = primary
        .iter()
        .chain(fallback)
        .filter(|product| seen.insert(&product.id))
        .filter(|product| &product.id != exclude)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    tracing::debug!(
        primary = primary.len(),
        fallback = fallback.len(),
        merged = merged.len(),
        exclude = %exclude,
        "recommendations merged"
    );

    Ok(merged)
}
