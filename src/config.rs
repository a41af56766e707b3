use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};
use crate::fractal::FractalOptions;
use crate::noise::DEFAULT_SEED;
use crate::smooth::SmoothstepOrder;

/// Generator settings as loaded from JSON. Missing fields take the defaults
/// below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: i64,
    pub smoothstep: SmoothstepOrder,
    pub fractal: FractalParams,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            smoothstep: SmoothstepOrder::Quintic,
            fractal: FractalParams::default(),
        }
    }
}

impl NoiseConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One value for every axis, or one per axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Uniform(f64),
    PerAxis(Vec<f64>),
}

impl AxisValue {
    fn expand<const D: usize>(&self, field: &'static str) -> Result<[f64; D]> {
        match self {
            Self::Uniform(v) => Ok([*v; D]),
            Self::PerAxis(values) => {
                <[f64; D]>::try_from(values.as_slice()).map_err(|_| NoiseError::AxisCount {
                    field,
                    expected: D,
                    found: values.len(),
                })
            }
        }
    }
}

/// Dimension-agnostic FBM parameters, resolved per dimension with
/// [`FractalParams::options`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    pub octaves: u32,
    pub amplitude: f64,
    pub persistence: f64,
    pub frequency: AxisValue,
    pub lacunarity: AxisValue,
    pub offset: AxisValue,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            amplitude: 1.0,
            persistence: 1.0,
            frequency: AxisValue::Uniform(1.0),
            lacunarity: AxisValue::Uniform(1.0),
            offset: AxisValue::Uniform(0.0),
        }
    }
}

impl FractalParams {
    pub fn options<const D: usize>(&self) -> Result<FractalOptions<D>> {
        let options = FractalOptions {
            octaves: self.octaves,
            amplitude: self.amplitude,
            persistence: self.persistence,
            frequency: self.frequency.expand("frequency")?,
            lacunarity: self.lacunarity.expand("lacunarity")?,
            offset: self.offset.expand("offset")?,
        };
        if let Err(err) = options.validate() {
            tracing::debug!(%err, "rejected fractal params");
            return Err(err);
        }
        Ok(options)
    }
}
