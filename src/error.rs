//! Error types for the faucet dial.

/// Errors raised while building a dial configuration or session.
///
/// The session transitions themselves never fail; these only surface when a
/// [`DialConfig`](crate::DialConfig) or catalog lookup is invalid.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DialError {
    /// The value bounds are empty or inverted.
    #[error("Invalid dial range {min}-{max} (min must be below max)")]
    InvalidRange {
        /// Lower bound provided.
        min: i32,
        /// Upper bound provided.
        max: i32,
    },

    /// The gesture arc is empty, inverted or wider than a full turn.
    #[error("Invalid dial arc {start}°..{end}° (expected start < end, span <= 360°)")]
    InvalidArc {
        /// Start angle in degrees.
        start: f32,
        /// End angle in degrees.
        end: f32,
    },

    /// The reset value lies outside the dial range.
    #[error("Default value {value} outside dial range {min}-{max}")]
    DefaultOutOfRange {
        /// The configured default.
        value: i32,
        /// Range minimum.
        min: i32,
        /// Range maximum.
        max: i32,
    },

    /// The colour band thresholds do not partition the range.
    #[error("Invalid colour bands (warm from {warm_from}, hot from {hot_from})")]
    InvalidBands {
        /// First value of the warm band.
        warm_from: i32,
        /// First value of the hot band.
        hot_from: i32,
    },

    /// A catalog preset cannot be reached by the dial.
    #[error("Preset {id} has value {value} outside the dial range")]
    PresetOutOfRange {
        /// The preset id.
        id: &'static str,
        /// The preset value.
        value: i32,
    },

    /// The ± button step must be positive.
    #[error("Invalid step {0} (must be positive)")]
    InvalidStep(i32),

    /// No preset with this id exists in the catalog.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}
