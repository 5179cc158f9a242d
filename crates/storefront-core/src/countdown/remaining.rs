//! Time-left decomposition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Time left until a target, split into display fields.
///
/// Every field is non-negative. Once the target has passed all fields are
/// zero and [`Remaining::is_expired`] returns true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_expired(&self) -> bool {
        *self == Self::ZERO
    }

    /// Milliseconds represented by the four fields.
    pub fn total_millis(&self) -> i64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    /// Blink state of the seconds digit for this value.
    pub fn visibility(&self) -> DigitVisibility {
        DigitVisibility::for_seconds(self.seconds)
    }
}

/// Decompose `target - now` into days, hours, minutes and seconds.
///
/// Sub-second remainders are truncated. A target at or before `now` clamps
/// to [`Remaining::ZERO`] instead of producing negative fields.
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let delta = (target - now).num_milliseconds();
    if delta <= 0 {
        return Remaining::ZERO;
    }

    Remaining {
        days: delta / MILLIS_PER_DAY,
        hours: (delta % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
        minutes: (delta % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        seconds: (delta % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
    }
}

/// Like [`compute_remaining`], but an unset target reads as zero.
pub fn remaining_for(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Remaining {
    target
        .map(|target| compute_remaining(target, now))
        .unwrap_or_default()
}

/// Display state of the blinking seconds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitVisibility {
    #[default]
    Visible,
    Transparent,
}

impl DigitVisibility {
    /// Even seconds show the digit, odd seconds hide it, so the digit
    /// blinks at 1Hz in step with the seconds changing.
    pub fn for_seconds(seconds: i64) -> Self {
        if seconds % 2 == 0 {
            DigitVisibility::Visible
        } else {
            DigitVisibility::Transparent
        }
    }

    /// CSS color value for the digit.
    pub fn css_color(&self) -> &'static str {
        match self {
            DigitVisibility::Visible => "inherit",
            DigitVisibility::Transparent => "transparent",
        }
    }
}
