//! Temperature colour bands derived from the dial value.

use crate::error::DialError;
use crate::range::DialRange;

/// First value of the warm band.
pub const WARM_FROM: i32 = 80;
/// First value of the hot band.
pub const HOT_FROM: i32 = 100;

/// Visual category of a dial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    /// `[min, warm_from)`
    Cool,
    /// `[warm_from, hot_from)`
    Warm,
    /// `[hot_from, max]`
    Hot,
}

impl TemperatureBand {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::Cool => "Cool",
            TemperatureBand::Warm => "Warm",
            TemperatureBand::Hot => "Hot",
        }
    }
}

/// Thresholds splitting the dial range into three half-open bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBands {
    /// First value of the warm band.
    pub warm_from: i32,
    /// First value of the hot band.
    pub hot_from: i32,
}

impl ColorBands {
    /// Check that every band is non-empty inside `range`.
    ///
    /// # Errors
    /// Returns [`DialError::InvalidBands`] unless
    /// `min < warm_from < hot_from <= max`.
    pub fn validate(&self, range: &DialRange) -> Result<(), DialError> {
        if range.min() < self.warm_from
            && self.warm_from < self.hot_from
            && self.hot_from <= range.max()
        {
            Ok(())
        } else {
            Err(DialError::InvalidBands {
                warm_from: self.warm_from,
                hot_from: self.hot_from,
            })
        }
    }

    /// Band containing `value`.
    pub fn band_for_value(&self, value: i32) -> TemperatureBand {
        if value < self.warm_from {
            TemperatureBand::Cool
        } else if value < self.hot_from {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            warm_from: WARM_FROM,
            hot_from: HOT_FROM,
        }
    }
}
