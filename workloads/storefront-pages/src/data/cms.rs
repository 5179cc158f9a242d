//! CMS content models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::countdown::parse_promotion_expiry;
use storefront_core::StorefrontError;

/// Announcement bar content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementContent {
    pub message: String,
    /// Free text entered by editors, e.g. "2023-09-19T00:00:00Z".
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl Default for AnnouncementContent {
    fn default() -> Self {
        Self {
            message: "Buy three, get 30 percent off".to_string(),
            expires_at: None,
        }
    }
}

impl AnnouncementContent {
    pub fn new(message: impl Into<String>, expires_at: Option<&str>) -> Self {
        Self {
            message: message.into(),
            expires_at: expires_at.map(str::to_string),
        }
    }

    /// Parsed expiry. `Ok(None)` when the editors left it blank.
    pub fn expiry(&self) -> Result<Option<DateTime<Utc>>, StorefrontError> {
        match self.expires_at.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_promotion_expiry(text).map(Some),
        }
    }
}

/// Reference from one CMS document to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub target: String,
}

/// Product document in the CMS, mirroring a commerce product by slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CmsProduct {
    #[serde(rename = "_id")]
    pub id: String,
    /// Commerce product handle this document describes.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Products styled together with this one.
    #[serde(default)]
    pub complete_the_look: Vec<Reference>,
}

impl CmsProduct {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            image_url: None,
            complete_the_look: Vec::new(),
        }
    }

    pub fn with_look(mut self, ids: &[&str]) -> Self {
        self.complete_the_look = ids
            .iter()
            .map(|id| Reference {
                target: id.to_string(),
            })
            .collect();
        self
    }
}

/// All product documents from the CMS.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CmsCatalog {
    pub products: Vec<CmsProduct>,
}

impl CmsCatalog {
    pub fn new(products: Vec<CmsProduct>) -> Self {
        Self { products }
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&CmsProduct> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Products referenced by `product`'s complete-the-look list, in
    /// catalog order. Dangling references are skipped.
    pub fn complete_the_look(&self, product: &CmsProduct) -> Vec<&CmsProduct> {
        self.products
            .iter()
            .filter(|candidate| {
                product
                    .complete_the_look
                    .iter()
                    .any(|reference| reference.target == candidate.id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CmsCatalog {
        CmsCatalog::new(vec![
            CmsProduct::new("doc-1", "snowboard", "Snowboard").with_look(&["doc-3", "doc-2", "doc-9"]),
            CmsProduct::new("doc-2", "bindings", "Bindings"),
            CmsProduct::new("doc-3", "goggles", "Goggles"),
        ])
    }

    #[test]
    fn test_complete_the_look_in_catalog_order() {
        let catalog = catalog();
        let board = catalog.find_by_slug("snowboard").unwrap();

        let look: Vec<&str> = catalog
            .complete_the_look(board)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(look, vec!["bindings", "goggles"]);
    }

    #[test]
    fn test_find_missing_slug() {
        assert!(catalog().find_by_slug("helmet").is_none());
    }

    #[test]
    fn test_deserialize_cms_document() {
        let json = r#"{
            "_id": "doc-1",
            "slug": "snowboard",
            "title": "Snowboard",
            "completeTheLook": [{"_ref": "doc-2"}]
        }"#;
        let product: CmsProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.complete_the_look[0].target, "doc-2");
    }

    #[test]
    fn test_announcement_expiry() {
        let blank = AnnouncementContent::new("Sale", Some("  "));
        assert_eq!(blank.expiry().unwrap(), None);

        let set = AnnouncementContent::new("Sale", Some("2023-09-19"));
        assert!(set.expiry().unwrap().is_some());

        let bad = AnnouncementContent::new("Sale", Some("soon"));
        assert!(bad.expiry().is_err());
    }
}
