//! Palette mapping: scalar in [0, 1] to an interpolated color.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;

/// Map `t` onto an ordered list of equally spaced color stops.
///
/// `t` is clamped to [0, 1] and NaN maps to 0. The two stops surrounding `t`
/// are blended channel by channel. `t == 0` returns the first stop and
/// `t == 1` the last stop exactly. A single stop is returned unconditionally.
/// An empty slice yields [`Color::TRANSPARENT`]; [`Palette`] rules that out.
pub fn color_at(t: f64, stops: &[Color]) -> Color {
    match stops {
        [] => Color::TRANSPARENT,
        [only] => *only,
        _ => {
            let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
            let last_segment = stops.len() - 2;
            let scaled = t * (stops.len() - 1) as f64;
            let k = (scaled.floor() as usize).min(last_segment);
            let u = scaled - k as f64;
            stops[k].lerp(&stops[k + 1], u)
        }
    }
}

/// A non-empty ordered list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    stops: Vec<Color>,
}

impl Palette {
    /// Create a palette, rejecting an empty list.
    pub fn new(stops: Vec<Color>) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { stops })
    }

    /// Wrap stops already known to be non-empty.
    pub(crate) fn from_valid(stops: Vec<Color>) -> Self {
        debug_assert!(!stops.is_empty());
        Self { stops }
    }

    /// The color stops in traversal order.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Number of stops (always >= 1).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop, the color at `t == 0`.
    pub fn first(&self) -> Color {
        self.stops[0]
    }

    /// Last stop, the color at `t == 1`.
    pub fn last(&self) -> Color {
        self.stops[self.stops.len() - 1]
    }

    /// Color at `t`, see [`color_at`].
    #[inline]
    pub fn color_at(&self, t: f64) -> Color {
        color_at(t, &self.stops)
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ConfigError;

    fn try_from(stops: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.stops
    }
}
