//! Thematic preset configurations.
//!
//! Each preset fixes a palette, scale, octave count and persistence tuned
//! for one visual mood; only the seed varies. Presets are pure lookups and
//! are total over every `u32` seed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::ArtConfig;
use crate::error::PresetError;

pub const PRESET_COUNT: usize = 8;

/// Named preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Aurora,
    Sunset,
    Ocean,
    Ember,
    Forest,
    Neon,
    Dusk,
    Citrus,
}

/// Stable parameters of one preset.
struct PresetParams {
    palette: &'static [u32],
    scale: f64,
    octaves: u8,
    persistence: f64,
}

const AURORA: PresetParams = PresetParams {
    palette: &[0x0B1D3A, 0x1B5E6B, 0x2FD4A3, 0x9B7BFF],
    scale: 0.008,
    octaves: 4,
    persistence: 0.55,
};

const SUNSET: PresetParams = PresetParams {
    palette: &[0x2D1B4E, 0xB83B5E, 0xF08A4B, 0xFFD36E],
    scale: 0.006,
    octaves: 3,
    persistence: 0.5,
};

const OCEAN: PresetParams = PresetParams {
    palette: &[0x03254C, 0x1167B1, 0x2A9DF4, 0xD0EFFF],
    scale: 0.01,
    octaves: 4,
    persistence: 0.45,
};

const EMBER: PresetParams = PresetParams {
    palette: &[0x1A0A05, 0x7A1F0A, 0xE2531B, 0xFFB347],
    scale: 0.012,
    octaves: 5,
    persistence: 0.5,
};

const FOREST: PresetParams = PresetParams {
    palette: &[0x0F2419, 0x2E5E3A, 0x6FA35B, 0xD9E8A6],
    scale: 0.009,
    octaves: 4,
    persistence: 0.6,
};

const NEON: PresetParams = PresetParams {
    palette: &[0x120458, 0xFF00A0, 0x00F0FF, 0xFAFF00],
    scale: 0.015,
    octaves: 2,
    persistence: 0.4,
};

const DUSK: PresetParams = PresetParams {
    palette: &[0x1C1A33, 0x4B3F72, 0xA06CB8, 0xF2C1D1],
    scale: 0.007,
    octaves: 3,
    persistence: 0.5,
};

const CITRUS: PresetParams = PresetParams {
    palette: &[0xFF7A00, 0xFFC300, 0xC7E84A, 0x3BB273],
    scale: 0.011,
    octaves: 3,
    persistence: 0.35,
};

impl Preset {
    /// All presets, in `for_seed` order.
    pub const ALL: [Preset; PRESET_COUNT] = [
        Preset::Aurora,
        Preset::Sunset,
        Preset::Ocean,
        Preset::Ember,
        Preset::Forest,
        Preset::Neon,
        Preset::Dusk,
        Preset::Citrus,
    ];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Aurora => "aurora",
            Preset::Sunset => "sunset",
            Preset::Ocean => "ocean",
            Preset::Ember => "ember",
            Preset::Forest => "forest",
            Preset::Neon => "neon",
            Preset::Dusk => "dusk",
            Preset::Citrus => "citrus",
        }
    }

    /// Look a preset up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| PresetError::Unknown(name.to_string()))
    }

    /// Preset chosen deterministically from a seed (`seed mod PRESET_COUNT`).
    pub fn for_seed(seed: u32) -> Self {
        Self::ALL[seed as usize % PRESET_COUNT]
    }

    fn params(&self) -> &'static PresetParams {
        match self {
            Preset::Aurora => &AURORA,
            Preset::Sunset => &SUNSET,
            Preset::Ocean => &OCEAN,
            Preset::Ember => &EMBER,
            Preset::Forest => &FOREST,
            Preset::Neon => &NEON,
            Preset::Dusk => &DUSK,
            Preset::Citrus => &CITRUS,
        }
    }

    /// Build this preset's configuration for `seed`.
    pub fn config(&self, seed: u32) -> ArtConfig {
        let params = self.params();
        let palette = params.palette.iter().map(|&rgb| Color::from_hex(rgb)).collect();
        ArtConfig::from_valid_parts(
            palette,
            seed,
            params.scale,
            params.octaves,
            params.persistence,
        )
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Deep navy into teal, mint and violet.
pub fn aurora(seed: u32) -> ArtConfig {
    Preset::Aurora.config(seed)
}

/// Plum through rose and orange to warm gold.
pub fn sunset(seed: u32) -> ArtConfig {
    Preset::Sunset.config(seed)
}

/// Abyssal blue to pale surf.
pub fn ocean(seed: u32) -> ArtConfig {
    Preset::Ocean.config(seed)
}

/// Charcoal, glowing red and amber.
pub fn ember(seed: u32) -> ArtConfig {
    Preset::Ember.config(seed)
}

/// Dark pine through moss to pale lichen.
pub fn forest(seed: u32) -> ArtConfig {
    Preset::Forest.config(seed)
}

/// High-contrast magenta, cyan and yellow on indigo.
pub fn neon(seed: u32) -> ArtConfig {
    Preset::Neon.config(seed)
}

/// Muted twilight purples.
pub fn dusk(seed: u32) -> ArtConfig {
    Preset::Dusk.config(seed)
}

/// Orange, lemon and lime.
pub fn citrus(seed: u32) -> ArtConfig {
    Preset::Citrus.config(seed)
}

/// Configuration of the preset selected by `seed`, using the same seed.
pub fn for_seed(seed: u32) -> ArtConfig {
    Preset::for_seed(seed).config(seed)
}
