//! "You may also like" section.

use storefront_core::catalog::ProductSummary;

use super::escape_html;

/// Render merged recommendations.
pub fn render_recommendations(products: &[ProductSummary]) -> String {
    if products.is_empty() {
        return render_recommendations_empty();
    }

    let items: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="product-recommendations" data-section="recommendations">
    <h2>You May Also Like</h2>
    <div class="recommendations-grid">
        {items}
    </div>
</section>"#,
        items = items
    )
}

/// Product card shared by the recommendations grid and the swimlane.
pub fn render_product_card(product: &ProductSummary) -> String {
    let image = product
        .image
        .as_ref()
        .map(|image| {
            format!(
                r#"<img src="{}" alt="{}" class="product-card-image">"#,
                escape_html(&image.url),
                escape_html(image.alt_or(&product.title))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="product-card">
        <a href="{url}" class="product-card-link">
            {image}
            <h3 class="product-card-title">{title}</h3>
            <p class="product-card-price">{price}</p>
        </a>
    </article>"#,
        url = escape_html(&product.url()),
        image = image,
        title = escape_html(&product.title),
        price = escape_html(&product.price.display())
    )
}

fn render_recommendations_empty() -> String {
    r#"<section class="product-recommendations product-recommendations--empty" data-section="recommendations">
    <h2>You May Also Like</h2>
    <p class="recommendations-empty">No recommendations available.</p>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Currency, Money};

    #[test]
    fn test_cards_in_order() {
        let products = vec![
            ProductSummary::new("A", "board-a", "Board A", Money::new(1000, Currency::USD)),
            ProductSummary::new("C", "board-c", "Board C", Money::new(2000, Currency::USD)),
        ];
        let html = render_recommendations(&products);

        let a = html.find("/products/board-a").unwrap();
        let c = html.find("/products/board-c").unwrap();
        assert!(a < c);
        assert!(html.contains("$20.00"));
    }

    #[test]
    fn test_empty_state() {
        assert!(render_recommendations(&[]).contains("No recommendations available."));
    }
}
