//! Storefront configuration.
//!
//! Loaded from `storefront.toml` (or a `.json` file) by the CLI and by page
//! hosts. Every field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::catalog::FeaturedTag;
use crate::error::StorefrontError;
use crate::money::{Currency, Money};

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub shipping: ShippingConfig,

    #[serde(default)]
    pub recommendations: RecommendationsConfig,

    #[serde(default)]
    pub featured: FeaturedConfig,
}

impl StorefrontConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        let minimum = self.shipping.free_shipping_minimum;
        if !minimum.is_finite() || minimum <= 0.0 {
            return Err(StorefrontError::InvalidConfiguration(format!(
                "shipping.free_shipping_minimum must be a positive amount, got {}",
                minimum
            )));
        }
        // The minimum is applied in the cart's currency, so it has to survive
        // rounding to that currency's minor unit.
        if let Some(currency) = Currency::ALL
            .into_iter()
            .find(|c| !self.shipping.minimum_for(*c).is_positive())
        {
            return Err(StorefrontError::InvalidConfiguration(format!(
                "shipping.free_shipping_minimum {} rounds to zero in {}",
                minimum, currency
            )));
        }
        if self.recommendations.count == 0 {
            return Err(StorefrontError::InvalidConfiguration(
                "recommendations.count must be at least 1".to_string(),
            ));
        }
        if self.featured.count == 0 {
            return Err(StorefrontError::InvalidConfiguration(
                "featured.count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Free-shipping settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingConfig {
    /// Cart total (in the cart's currency) that unlocks free shipping.
    #[serde(default = "default_free_shipping_minimum")]
    pub free_shipping_minimum: f64,
}

fn default_free_shipping_minimum() -> f64 {
    100.0
}

impl ShippingConfig {
    /// The threshold expressed in `currency`.
    pub fn minimum_for(&self, currency: Currency) -> Money {
        Money::from_decimal(self.free_shipping_minimum, currency)
    }
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_shipping_minimum: default_free_shipping_minimum(),
        }
    }
}

/// Recommendation list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationsConfig {
    /// Best sellers requested upstream as fallback.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Cap on the merged list. `None` shows everything.
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_count() -> usize {
    12
}

fn default_limit() -> Option<usize> {
    Some(12)
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            limit: default_limit(),
        }
    }
}

/// Featured-products swimlane settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedConfig {
    /// Tab used when the request has no `?tag=`.
    #[serde(default)]
    pub default_tag: FeaturedTag,

    /// Products shown per tab.
    #[serde(default = "default_featured_count")]
    pub count: usize,
}

fn default_featured_count() -> usize {
    8
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            default_tag: FeaturedTag::default(),
            count: default_featured_count(),
        }
    }
}

/// Default `storefront.toml` contents.
pub fn default_config_toml() -> String {
    r#"# Storefront configuration

[shipping]
# Cart total that unlocks free shipping, in the cart currency
free_shipping_minimum = 100.0

[recommendations]
# Best sellers requested as fallback recommendations
count = 12
# Maximum products shown in "You may also like"
limit = 12

[featured]
# Premium, Sport or Accessory
default_tag = "Sport"
# Products shown per tab
count = 8
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.shipping.free_shipping_minimum, 100.0);
        assert_eq!(config.recommendations.limit, Some(12));
        assert_eq!(config.featured.default_tag, FeaturedTag::Sport);
        assert_eq!(config.featured.count, 8);
    }

    #[test]
    fn test_default_file_round_trips() {
        let config = StorefrontConfig::from_toml_str(&default_config_toml()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [shipping]
            free_shipping_minimum = 75.5

            [featured]
            default_tag = "Premium"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.shipping.minimum_for(Currency::GBP),
            Money::new(7550, Currency::GBP)
        );
        assert_eq!(config.featured.default_tag, FeaturedTag::Premium);
        assert_eq!(config.recommendations.count, 12);
    }

    #[test]
    fn test_json() {
        let config =
            StorefrontConfig::from_json_str(r#"{"recommendations": {"count": 4, "limit": null}}"#)
                .unwrap();
        assert_eq!(config.recommendations.count, 4);
        assert_eq!(config.recommendations.limit, None);
    }

    #[test]
    fn test_rejects_zero_minimum() {
        let result = StorefrontConfig::from_toml_str("[shipping]\nfree_shipping_minimum = 0.0\n");
        assert!(matches!(result, Err(StorefrontError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_minimum_that_rounds_to_zero() {
        let result = StorefrontConfig::from_toml_str("[shipping]\nfree_shipping_minimum = 0.004\n");
        assert!(matches!(result, Err(StorefrontError::InvalidConfiguration(_))));

        // Fine in pence, but zero yen.
        let result = StorefrontConfig::from_toml_str("[shipping]\nfree_shipping_minimum = 0.4\n");
        match result {
            Err(StorefrontError::InvalidConfiguration(message)) => assert!(message.contains("JPY")),
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_smallest_valid_minimum_works_in_every_currency() {
        let config = StorefrontConfig::from_toml_str("[shipping]\nfree_shipping_minimum = 1.0\n").unwrap();
        for currency in Currency::ALL {
            assert!(config.shipping.minimum_for(currency).is_positive());
        }
    }

    #[test]
    fn test_rejects_zero_count() {
        let result = StorefrontConfig::from_toml_str("[recommendations]\ncount = 0\n");
        assert!(matches!(result, Err(StorefrontError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = StorefrontConfig::from_toml_str("[shipping\n");
        assert!(matches!(result, Err(StorefrontError::Serialization(_))));
    }
}
