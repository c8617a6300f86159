//! Dial session configuration.

use std::time::Duration;

use crate::band::ColorBands;
use crate::error::DialError;
use crate::preset::PresetCatalog;
use crate::range::DialRange;

/// Value the dial returns to on power toggle and at mount.
pub const DEFAULT_VALUE: i32 = 65;
/// Seconds added by each press of the add-time button.
pub const TIMER_INCREMENT_SECS: u32 = 60;

/// Everything a [`DialSession`](crate::DialSession) needs besides its state.
#[derive(Debug, Clone, Copy)]
pub struct DialConfig {
    /// Value bounds and gesture arc.
    pub range: DialRange,
    /// Reset value.
    pub default_value: i32,
    /// Amount the ± buttons move the value.
    pub step: i32,
    /// Colour band thresholds.
    pub bands: ColorBands,
    /// Seconds added per add-time press.
    pub timer_increment_secs: u32,
    /// Interval between timer ticks.
    pub tick_period: Duration,
    /// Preset table.
    pub catalog: PresetCatalog,
}

impl DialConfig {
    /// Check that all parts agree with each other.
    ///
    /// # Errors
    /// - [`DialError::DefaultOutOfRange`] if the default is off the dial
    /// - [`DialError::InvalidStep`] if the step is not positive
    /// - [`DialError::InvalidBands`] if the bands do not partition the range
    /// - [`DialError::PresetOutOfRange`] if a preset is unreachable
    pub fn validate(&self) -> Result<(), DialError> {
        if !self.range.contains(self.default_value) {
            return Err(DialError::DefaultOutOfRange {
                value: self.default_value,
                min: self.range.min(),
                max: self.range.max(),
            });
        }
        if self.step <= 0 {
            return Err(DialError::InvalidStep(self.step));
        }
        self.bands.validate(&self.range)?;
        self.catalog.validate(&self.range)
    }

    /// Same configuration with a different tick interval.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            range: DialRange::default(),
            default_value: DEFAULT_VALUE,
            step: 1,
            bands: ColorBands::default(),
            timer_increment_secs: TIMER_INCREMENT_SECS,
            tick_period: Duration::from_secs(1),
            catalog: PresetCatalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DialConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_default_off_dial() {
        let config = DialConfig {
            default_value: 20,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(DialError::DefaultOutOfRange {
                value: 20,
                min: 50,
                max: 120
            })
        );
    }

    #[test]
    fn test_rejects_zero_step() {
        let config = DialConfig {
            step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(DialError::InvalidStep(0)));
    }
}
