//! Product summary types.

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;

/// Preview image for a product card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }

    /// Alt text, falling back to the product title.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt_text.as_deref().unwrap_or(fallback)
    }
}

/// Minimal product record used for list rendering.
///
/// On the wire this is the commerce platform's product card shape
/// (see [`ProductCard`]); prices arrive as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductCard", into = "ProductCard")]
pub struct ProductSummary {
    pub id: ProductId,
    /// URL handle (e.g. "snowboard-pro").
    pub handle: String,
    pub title: String,
    pub price: Money,
    pub image: Option<ProductImage>,
    pub vendor: Option<String>,
    pub tags: Vec<String>,
}

impl ProductSummary {
    pub fn new(
        id: impl Into<ProductId>,
        handle: impl Into<String>,
        title: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            title: title.into(),
            price,
            image: None,
            vendor: None,
            tags: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: ProductImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Storefront path for this product.
    pub fn url(&self) -> String {
        format!("/products/{}", self.handle)
    }

    /// Case-insensitive tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Upstream money representation: decimal string plus currency code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}

impl From<Money> for MoneyV2 {
    fn from(money: Money) -> Self {
        Self {
            amount: money.display_amount(),
            currency_code: money.currency.code().to_string(),
        }
    }
}

impl TryFrom<MoneyV2> for Money {
    type Error = StorefrontError;

    fn try_from(value: MoneyV2) -> Result<Self, Self::Error> {
        Money::parse(&value.amount, &value.currency_code)
    }
}

/// Wire shape of a product card from the commerce API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub price: MoneyV2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TryFrom<ProductCard> for ProductSummary {
    type Error = StorefrontError;

    fn try_from(card: ProductCard) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(card.id),
            handle: card.handle,
            title: card.title,
            price: Money::try_from(card.price)?,
            image: card.featured_image,
            vendor: card.vendor,
            tags: card.tags,
        })
    }
}

impl From<ProductSummary> for ProductCard {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id.into_inner(),
            handle: summary.handle,
            title: summary.title,
            price: summary.price.into(),
            featured_image: summary.image,
            vendor: summary.vendor,
            tags: summary.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_deserialize_product_card() {
        let json = r#"{
            "id": "gid://shop/Product/1",
            "handle": "snowboard",
            "title": "The Snowboard",
            "price": {"amount": "40.0", "currencyCode": "GBP"},
            "featuredImage": {"url": "https://cdn.example.com/s.png", "altText": "Board"},
            "vendor": "Hydro",
            "tags": ["Sport"]
        }"#;

        let product: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "gid://shop/Product/1");
        assert_eq!(product.price, Money::new(4000, Currency::GBP));
        assert_eq!(product.image.as_ref().unwrap().alt_or("x"), "Board");
        assert!(product.has_tag("sport"));
        assert_eq!(product.url(), "/products/snowboard");
    }

    #[test]
    fn test_deserialize_rejects_bad_price() {
        let json = r#"{
            "id": "1",
            "handle": "h",
            "title": "t",
            "price": {"amount": "abc", "currencyCode": "GBP"}
        }"#;

        assert!(serde_json::from_str::<ProductSummary>(json).is_err());
    }

    #[test]
    fn test_serializes_in_wire_shape() {
        let product = ProductSummary::new("A", "a", "Product A", Money::new(1250, Currency::USD));
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["price"]["amount"], "12.50");
        assert_eq!(value["price"]["currencyCode"], "USD");
        assert!(value.get("featuredImage").is_none());
    }
}
