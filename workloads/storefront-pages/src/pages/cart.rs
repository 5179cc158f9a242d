//! Cart drawer.

use storefront_core::cart::Cart;
use storefront_core::shipping::{compute_progress, ShippingProgress};
use storefront_core::StorefrontConfig;

use crate::error::PageError;
use crate::sections::{escape_html, render_shipping_progress};

/// Slide-out cart summary with the free-shipping widget.
pub struct CartDrawer;

impl CartDrawer {
    /// Shipping progress for `cart` against the configured minimum, in the
    /// cart's currency.
    pub fn progress(cart: &Cart, config: &StorefrontConfig) -> Result<ShippingProgress, PageError> {
        let subtotal = cart.subtotal()?;
        let minimum = config.shipping.minimum_for(cart.currency);
        Ok(compute_progress(&subtotal, &minimum)?)
    }

    /// Render the drawer.
    pub fn render(cart: &Cart, config: &StorefrontConfig) -> Result<String, PageError> {
        let progress = Self::progress(cart, config)?;
        let subtotal = cart.subtotal()?;

        let items = if cart.is_empty() {
            r#"<p class="cart-empty">Your cart is empty.</p>"#.to_string()
        } else {
            let lines: String = cart
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<li class="cart-line"><span class="cart-line-title">{title}</span> <span class="cart-line-quantity">x{quantity}</span> <span class="cart-line-total">{total}</span></li>"#,
                        title = escape_html(&item.title),
                        quantity = item.quantity,
                        total = escape_html(&item.total_price.display())
                    )
                })
                .collect();
            format!(r#"<ul class="cart-lines">{}</ul>"#, lines)
        };

        Ok(format!(
            r#"<aside class="cart-drawer" data-section="cart">
    <h2 class="cart-title">Cart ({count})</h2>
    {shipping}
    {items}
    <p class="cart-subtotal">Subtotal: {subtotal}</p>
</aside>"#,
            count = cart.item_count(),
            shipping = render_shipping_progress(&progress),
            items = items,
            subtotal = escape_html(&subtotal.display())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ids::{ProductId, VariantId};
    use storefront_core::{Currency, Money};

    fn cart_with(amount_cents: i64) -> Cart {
        let mut cart = Cart::new(Currency::GBP);
        cart.add_item(
            VariantId::new("v1"),
            ProductId::new("p1"),
            "Snowboard",
            1,
            Money::new(amount_cents, Currency::GBP),
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_progress_uses_cart_currency() {
        let progress = CartDrawer::progress(&cart_with(4000), &StorefrontConfig::default()).unwrap();
        assert_eq!(progress.amount_remaining, Money::new(6000, Currency::GBP));
        assert!(!progress.qualifies);
    }

    #[test]
    fn test_title_counts_quantities() {
        let mut cart = cart_with(1000);
        cart.add_item(
            VariantId::new("v1"),
            ProductId::new("p1"),
            "Snowboard",
            2,
            Money::new(1000, Currency::GBP),
        )
        .unwrap();

        let html = CartDrawer::render(&cart, &StorefrontConfig::default()).unwrap();
        assert!(html.contains("Cart (3)"));
        assert!(html.contains("x3"));
    }

    #[test]
    fn test_empty_cart() {
        let html = CartDrawer::render(&Cart::new(Currency::USD), &StorefrontConfig::default()).unwrap();
        assert!(html.contains("Your cart is empty."));
        assert!(html.contains("You're $100.00 away"));
        assert!(html.contains(r#"style="width: 0%""#));
    }

    #[test]
    fn test_qualifying_cart() {
        let html = CartDrawer::render(&cart_with(12000), &StorefrontConfig::default()).unwrap();
        assert!(html.contains("You qualify for Free Express Shipping"));
        assert!(html.contains("Subtotal: \u{00a3}120.00"));
        assert!(html.contains(r#"<h2 class="cart-title">Cart (1)</h2>"#));
    }
}
