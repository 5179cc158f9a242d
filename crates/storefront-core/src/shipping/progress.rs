//! Progress toward the free-shipping minimum.

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::money::Money;

/// Derived shipping widget state for one cart total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShippingProgress {
    /// How much more the customer must spend, never negative.
    pub amount_remaining: Money,
    /// Share of the minimum already reached, clamped to [0, 100].
    pub percent: f64,
    /// Whether the cart already ships free.
    pub qualifies: bool,
}

impl ShippingProgress {
    /// Width of the progress bar as a CSS percentage (e.g. "40%").
    pub fn bar_width(&self) -> String {
        let formatted = format!("{:.2}", self.percent);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        format!("{}%", trimmed)
    }
}

/// Compute shipping progress for `current_total` against `minimum`.
///
/// `minimum` must be positive and in the same currency as the cart total.
/// Negative totals (e.g. after a refund adjustment) count as zero progress.
pub fn compute_progress(
    current_total: &Money,
    minimum: &Money,
) -> Result<ShippingProgress, StorefrontError> {
    if !minimum.is_positive() {
        return Err(StorefrontError::InvalidConfiguration(format!(
            "free shipping minimum must be positive, got {}",
            minimum.display()
        )));
    }
    if current_total.currency != minimum.currency {
        return Err(StorefrontError::CurrencyMismatch {
            expected: minimum.currency.code().to_string(),
            got: current_total.currency.code().to_string(),
        });
    }

    let remaining_cents = minimum
        .amount_cents
        .saturating_sub(current_total.amount_cents)
        .max(0);
    let qualifies = current_total.amount_cents >= minimum.amount_cents;
    let percent = (current_total.amount_cents as f64 / minimum.amount_cents as f64 * 100.0)
        .clamp(0.0, 100.0);

    tracing::trace!(
        total = current_total.amount_cents,
        minimum = minimum.amount_cents,
        percent,
        qualifies,
        "shipping progress computed"
    );

    Ok(ShippingProgress {
        amount_remaining: Money::new(remaining_cents, current_total.currency),
        percent,
        qualifies,
    })
}
