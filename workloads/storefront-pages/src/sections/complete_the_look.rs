//! Complete-the-look section.

use super::escape_html;
use crate::data::CmsProduct;

/// Render the products styled together with the current one.
///
/// Returns an empty string when there is nothing to show.
pub fn render_complete_the_look(products: &[CmsProduct]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let items: String = products.iter().map(render_look_item).collect();

    format!(
        r#"<section class="complete-the-look" data-section="complete-the-look">
    <h2>Complete the Look</h2>
    <ul class="look-items">{items}</ul>
</section>"#,
        items = items
    )
}

fn render_look_item(product: &CmsProduct) -> String {
    let image = product
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                escape_html(url),
                escape_html(&product.title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<li class="look-item"><a href="/products/{slug}">{image}<span>{title}</span></a></li>"#,
        slug = escape_html(&product.slug),
        image = image,
        title = escape_html(&product.title)
    )
}
