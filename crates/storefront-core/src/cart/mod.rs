//! Shopping cart module.
//!
//! The cart's subtotal is the running total fed to the shipping progress
//! widget.

mod cart;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
