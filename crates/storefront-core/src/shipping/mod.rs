//! Free-shipping threshold progress.

mod progress;

pub use progress::{compute_progress, ShippingProgress};
