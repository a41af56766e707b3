use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Degree of the easing polynomial applied to lattice offsets.
///
/// See <https://en.wikipedia.org/wiki/Smoothstep>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothstepOrder {
    /// `x`, C0 continuous.
    Linear,
    /// `3x² - 2x³`, C1 continuous.
    Cubic,
    /// `6x⁵ - 15x⁴ + 10x³`, C2 continuous (Perlin 2002).
    #[default]
    Quintic,
}

impl SmoothstepOrder {
    pub const ALL: [SmoothstepOrder; 3] = [Self::Linear, Self::Cubic, Self::Quintic];

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Quintic => "quintic",
        }
    }
}

impl fmt::Display for SmoothstepOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric tags 0, 1, 2 as used by existing saved settings.
impl TryFrom<u8> for SmoothstepOrder {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Linear),
            1 => Ok(Self::Cubic),
            2 => Ok(Self::Quintic),
            other => Err(NoiseError::UnsupportedOrder(other.to_string())),
        }
    }
}

impl FromStr for SmoothstepOrder {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NoiseError::UnsupportedOrder(s.to_string()))
    }
}

/// Eased weight for `x`, clamped to 0 below the cell and 1 above it.
#[inline]
pub fn smoothstep(x: f64, order: SmoothstepOrder) -> f64 {
    if x >= 1.0 {
        return 1.0;
    }
    if x <= 0.0 {
        return 0.0;
    }
    match order {
        SmoothstepOrder::Linear => x,
        SmoothstepOrder::Cubic => x * x * (3.0 - 2.0 * x),
        SmoothstepOrder::Quintic => x * x * x * (x * (x * 6.0 - 15.0) + 10.0),
    }
}

#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}
