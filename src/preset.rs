//! Preset catalog.

use std::fmt;

use crate::error::DialError;
use crate::range::DialRange;

/// Identifier of a catalog preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetId(&'static str);

impl PresetId {
    /// Wrap a static id string.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The raw id string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Icon/category tag shown next to a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Cold water.
    Snow,
    /// Hot water.
    Flame,
    /// Taking medication.
    Medical,
    /// Shaving and grooming.
    Cut,
    /// Cleaning the basin.
    Water,
    /// Brushing teeth.
    Brush,
}

impl DisplayMode {
    /// Symbolic icon name understood by the renderer.
    pub fn icon_name(self) -> &'static str {
        match self {
            DisplayMode::Snow => "snow-outline",
            DisplayMode::Flame => "flame-outline",
            DisplayMode::Medical => "medical-outline",
            DisplayMode::Cut => "cut-outline",
            DisplayMode::Water => "water-outline",
            DisplayMode::Brush => "brush-outline",
        }
    }
}

/// A named shortcut that powers the faucet on at a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Catalog id.
    pub id: PresetId,
    /// Human readable name.
    pub label: &'static str,
    /// Dial value the preset applies.
    pub value: i32,
    /// Icon/category tag.
    pub display_mode: DisplayMode,
}

const PRESETS: [Preset; 6] = [
    Preset {
        id: PresetId::new("cold-60"),
        label: "Cold",
        value: 60,
        display_mode: DisplayMode::Snow,
    },
    Preset {
        id: PresetId::new("hot-105"),
        label: "Hot",
        value: 105,
        display_mode: DisplayMode::Flame,
    },
    Preset {
        id: PresetId::new("medication-85"),
        label: "Medication",
        value: 85,
        display_mode: DisplayMode::Medical,
    },
    Preset {
        id: PresetId::new("grooming-90"),
        label: "Grooming",
        value: 90,
        display_mode: DisplayMode::Cut,
    },
    Preset {
        id: PresetId::new("cleaning-115"),
        label: "Cleaning",
        value: 115,
        display_mode: DisplayMode::Water,
    },
    Preset {
        id: PresetId::new("brushing-teeth-75"),
        label: "Brushing teeth",
        value: 75,
        display_mode: DisplayMode::Brush,
    },
];

/// The fixed, read-only preset table.
#[derive(Debug, Clone, Copy)]
pub struct PresetCatalog {
    presets: &'static [Preset],
}

impl PresetCatalog {
    /// The built-in faucet presets.
    pub const fn builtin() -> Self {
        Self { presets: &PRESETS }
    }

    /// All presets in display order.
    pub fn all(&self) -> &'static [Preset] {
        self.presets
    }

    /// Look up a preset by id.
    ///
    /// # Errors
    /// Returns [`DialError::UnknownPreset`] if no preset has this id.
    pub fn get(&self, id: &str) -> Result<&'static Preset, DialError> {
        self.presets
            .iter()
            .find(|preset| preset.id.as_str() == id)
            .ok_or_else(|| DialError::UnknownPreset(id.to_string()))
    }

    /// Check that every preset value is reachable on `range`.
    ///
    /// # Errors
    /// Returns [`DialError::PresetOutOfRange`] for the first offending preset.
    pub fn validate(&self, range: &DialRange) -> Result<(), DialError> {
        match self.presets.iter().find(|p| !range.contains(p.value)) {
            Some(preset) => Err(DialError::PresetOutOfRange {
                id: preset.id.as_str(),
                value: preset.value,
            }),
            None => Ok(()),
        }
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
