//! Featured-products swimlane.

use storefront_core::catalog::{FeaturedTag, ProductSummary};

use super::{escape_html, render_product_card};

/// Render the tab strip and the products for the active tab.
pub fn render_swimlane(active: Option<FeaturedTag>, products: &[ProductSummary]) -> String {
    let tabs: String = FeaturedTag::ALL
        .iter()
        .map(|tag| {
            let class = if Some(*tag) == active {
                "swimlane-tab swimlane-tab--active"
            } else {
                "swimlane-tab"
            };
            format!(
                r#"<a href="/?tag={query}" class="{class}">{label}</a>"#,
                query = tag.tag(),
                class = class,
                label = escape_html(tag.label())
            )
        })
        .collect();

    let items = if products.is_empty() {
        r#"<p class="swimlane-empty">No products found.</p>"#.to_string()
    } else {
        products.iter().map(render_product_card).collect()
    };

    format!(
        r#"<section class="swimlane" data-section="featured">
    <nav class="swimlane-tabs">{tabs}</nav>
    <div class="swimlane-items">{items}</div>
</section>"#,
        tabs = tabs,
        items = items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_marked() {
        let html = render_swimlane(Some(FeaturedTag::Accessory), &[]);
        assert!(html.contains(r#"<a href="/?tag=Accessory" class="swimlane-tab swimlane-tab--active">New</a>"#));
        assert!(html.contains(r#"<a href="/?tag=Sport" class="swimlane-tab">Sport</a>"#));
        assert!(html.contains("No products found."));
    }
}
