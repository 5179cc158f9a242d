//! Featured-products swimlane tabs.

use serde::{Deserialize, Serialize};

/// Tabs shown above the featured-products swimlane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeaturedTag {
    Premium,
    #[default]
    Sport,
    /// Labelled "New" but backed by the `Accessory` product tag.
    Accessory,
}

impl FeaturedTag {
    /// All tabs in display order.
    pub const ALL: [FeaturedTag; 3] = [FeaturedTag::Premium, FeaturedTag::Sport, FeaturedTag::Accessory];

    /// Product tag queried upstream.
    pub fn tag(&self) -> &'static str {
        match self {
            FeaturedTag::Premium => "Premium",
            FeaturedTag::Sport => "Sport",
            FeaturedTag::Accessory => "Accessory",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            FeaturedTag::Premium => "Premium",
            FeaturedTag::Sport => "Sport",
            FeaturedTag::Accessory => "New",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag.trim()))
    }
}

/// Build the upstream product query filter for a `?tag=` parameter.
///
/// Missing or blank parameters fall back to `default`. Unknown tags are
/// passed through as-is; the platform simply returns no products for them.
pub fn featured_filter(tag: Option<&str>, default: FeaturedTag) -> String {
    match tag.map(str::trim).filter(|t| !t.is_empty()) {
        Some(tag) => format!("tag:{}", tag),
        None => format!("tag:{}", default.tag()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_param() {
        assert_eq!(featured_filter(Some("Premium"), FeaturedTag::Sport), "tag:Premium");
    }

    #[test]
    fn test_filter_defaults() {
        assert_eq!(featured_filter(None, FeaturedTag::Sport), "tag:Sport");
        assert_eq!(featured_filter(Some("  "), FeaturedTag::Premium), "tag:Premium");
    }

    #[test]
    fn test_new_tab_maps_to_accessory() {
        assert_eq!(FeaturedTag::Accessory.label(), "New");
        assert_eq!(FeaturedTag::from_tag("accessory"), Some(FeaturedTag::Accessory));
        assert_eq!(FeaturedTag::from_tag("Other"), None);
    }
}
