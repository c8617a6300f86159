//! Dial value bounds and gesture arc.

use crate::error::DialError;

/// Lowest water temperature the dial can select.
pub const MIN_VALUE: i32 = 50;
/// Highest water temperature the dial can select.
pub const MAX_VALUE: i32 = 120;
/// Arc start in degrees, clockwise from straight up.
pub const START_ANGLE: f32 = -135.0;
/// Arc end in degrees, clockwise from straight up.
pub const END_ANGLE: f32 = 135.0;

/// The numeric bounds of the dial and the arc a gesture sweeps over.
///
/// Angles are bearings in degrees measured clockwise from vertical-up.
/// The arc may start below zero so that it can straddle the 0°/360° seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialRange {
    min: i32,
    max: i32,
    start_angle: f32,
    end_angle: f32,
}

impl DialRange {
    /// Create a range, rejecting empty bounds or a malformed arc.
    ///
    /// # Errors
    /// - [`DialError::InvalidRange`] if `min >= max`
    /// - [`DialError::InvalidArc`] if `start >= end` or the span exceeds 360°
    pub fn new(min: i32, max: i32, start_angle: f32, end_angle: f32) -> Result<Self, DialError> {
        if min >= max {
            return Err(DialError::InvalidRange { min, max });
        }
        let span = end_angle - start_angle;
        if !span.is_finite() || span <= 0.0 || span > 360.0 {
            return Err(DialError::InvalidArc {
                start: start_angle,
                end: end_angle,
            });
        }
        Ok(Self {
            min,
            max,
            start_angle,
            end_angle,
        })
    }

    /// Lower value bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper value bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Angle that maps to [`min`](Self::min).
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Angle that maps to [`max`](Self::max).
    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    /// Angular width of the arc in degrees.
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp `value` into the bounds.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for DialRange {
    fn default() -> Self {
        Self {
            min: MIN_VALUE,
            max: MAX_VALUE,
            start_angle: START_ANGLE,
            end_angle: END_ANGLE,
        }
    }
}
