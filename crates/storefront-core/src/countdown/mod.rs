//! Promotion countdown.
//!
//! [`compute_remaining`] is the pure decomposition of the time left until a
//! promotion expires. [`CountdownTimer`] re-runs it once per second for as
//! long as the view that owns the timer is alive.

mod expiry;
mod remaining;
mod timer;

pub use expiry::parse_promotion_expiry;
pub use remaining::{compute_remaining, remaining_for, DigitVisibility, Remaining};
pub use timer::{Clock, CountdownTick, CountdownTimer, SystemClock, TICK_INTERVAL};
