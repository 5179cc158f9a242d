//! Product header section.

use storefront_core::catalog::ProductSummary;

use super::escape_html;

/// Render the product header: image, title, vendor and price.
pub fn render_product_header(product: &ProductSummary) -> String {
    let image_html = match &product.image {
        Some(image) => format!(
            r#"<img src="{}" alt="{}" class="product-image-main">"#,
            escape_html(&image.url),
            escape_html(image.alt_or(&product.title))
        ),
        None => r#"<div class="product-image-placeholder">No image available</div>"#.to_string(),
    };

    let vendor_html = product
        .vendor
        .as_deref()
        .map(|vendor| format!(r#"<p class="product-vendor">{}</p>"#, escape_html(vendor)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-header" data-section="product">
    {image_html}
    <div class="product-info">
        {vendor_html}
        <h1 class="product-title">{title}</h1>
        <p class="product-price">{price}</p>
    </div>
</section>"#,
        image_html = image_html,
        vendor_html = vendor_html,
        title = escape_html(&product.title),
        price = escape_html(&product.price.display())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Currency, Money};

    #[test]
    fn test_header_without_image() {
        let product = ProductSummary::new("1", "snowboard", "Snowboard", Money::new(69995, Currency::GBP))
            .with_vendor("Hydrogen");
        let html = render_product_header(&product);

        assert!(html.contains("product-image-placeholder"));
        assert!(html.contains(r#"<p class="product-vendor">Hydrogen</p>"#));
        assert!(html.contains("\u{00a3}699.95"));
    }
}
