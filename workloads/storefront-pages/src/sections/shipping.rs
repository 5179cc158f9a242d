//! Free-shipping progress widget.

use storefront_core::shipping::ShippingProgress;

use super::escape_html;

/// Render the cart drawer's shipping message and progress bar.
pub fn render_shipping_progress(progress: &ShippingProgress) -> String {
    if progress.qualifies {
        return r#"<div class="shipping-progress shipping-progress--free" data-section="shipping">
    <p class="shipping-message">You qualify for Free Express Shipping</p>
</div>"#
            .to_string();
    }

    format!(
        r#"<div class="shipping-progress" data-section="shipping">
    <p class="shipping-message">You're {remaining} away from Free Express Shipping</p>
    <div class="shipping-bar"><div class="shipping-bar-fill" style="width: {width}"></div></div>
</div>"#,
        remaining = escape_html(&progress.amount_remaining.display()),
        width = progress.bar_width()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::shipping::compute_progress;
    use storefront_core::{Currency, Money};

    fn gbp(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::GBP)
    }

    #[test]
    fn test_partial_progress() {
        let progress = compute_progress(&gbp(40.0), &gbp(100.0)).unwrap();
        let html = render_shipping_progress(&progress);

        assert!(html.contains("You're \u{00a3}60.00 away"));
        assert!(html.contains(r#"style="width: 40%""#));
    }

    #[test]
    fn test_qualifying_has_no_bar() {
        let progress = compute_progress(&gbp(120.0), &gbp(100.0)).unwrap();
        let html = render_shipping_progress(&progress);

        assert!(html.contains("Free Express Shipping"));
        assert!(!html.contains("shipping-bar"));
    }
}
