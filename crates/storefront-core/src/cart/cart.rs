//! Cart and line item types.

use crate::error::StorefrontError;
use crate::ids::{CartId, LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<LineItem>,
    /// Every line is priced in this currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency,
        }
    }

    /// Add an item to the cart.
    ///
    /// Adding a variant already in the cart increases its quantity.
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The resulting quantity exceeds MAX_QUANTITY_PER_ITEM
    /// - The price is in a different currency than the cart
    pub fn add_item(
        &mut self,
        variant_id: VariantId,
        product_id: ProductId,
        title: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<LineItemId, StorefrontError> {
        if quantity <= 0 {
            return Err(StorefrontError::InvalidQuantity(quantity));
        }
        if unit_price.currency != self.currency {
            return Err(StorefrontError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.variant_id == variant_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StorefrontError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(StorefrontError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            existing.update_total()?;
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StorefrontError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(variant_id, product_id, title, quantity, unit_price)?;
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Result<Money, StorefrontError> {
        Money::try_sum(self.items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(StorefrontError::Overflow)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    pub variant_id: VariantId,
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// unit_price * quantity
    pub total_price: Money,
}

impl LineItem {
    pub fn new(
        variant_id: VariantId,
        product_id: ProductId,
        title: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, StorefrontError> {
        let total_price = unit_price
            .try_multiply(quantity)
            .ok_or(StorefrontError::Overflow)?;
        Ok(Self {
            id: LineItemId::generate(),
            variant_id,
            product_id,
            title: title.into(),
            quantity,
            unit_price,
            total_price,
        })
    }

    fn update_total(&mut self) -> Result<(), StorefrontError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(StorefrontError::Overflow)?;
        Ok(())
    }
}
