//! Fractal Brownian motion: octaves of base noise at growing frequency and
//! decaying amplitude, normalized by the summed amplitude.
//!
//! Rough recipes:
//! - terrain: many octaves, low persistence
//! - cloud layers: few octaves, high lacunarity
//! - organic tissue: moderate persistence plus a per-octave offset

use crate::error::{NoiseError, Result};
use crate::noise::Perlin;

/// FBM configuration for a D-axis field. Frequency, lacunarity and offset
/// are per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalOptions<const D: usize> {
    /// Number of noise layers, at least 1.
    pub octaves: u32,
    /// Amplitude of the first octave.
    pub amplitude: f64,
    /// Amplitude multiplier per octave.
    pub persistence: f64,
    /// Frequency of the first octave.
    pub frequency: [f64; D],
    /// Frequency multiplier per octave.
    pub lacunarity: [f64; D],
    /// Coordinate shift added per octave index.
    pub offset: [f64; D],
}

pub type FractalOptions1D = FractalOptions<1>;
pub type FractalOptions2D = FractalOptions<2>;
pub type FractalOptions3D = FractalOptions<3>;
pub type FractalOptions4D = FractalOptions<4>;

/// A single unscaled octave, identical to the base noise.
impl<const D: usize> Default for FractalOptions<D> {
    fn default() -> Self {
        Self {
            octaves: 1,
            amplitude: 1.0,
            persistence: 1.0,
            frequency: [1.0; D],
            lacunarity: [1.0; D],
            offset: [0.0; D],
        }
    }
}

impl<const D: usize> FractalOptions<D> {
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_frequency(mut self, frequency: [f64; D]) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: [f64; D]) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn with_offset(mut self, offset: [f64; D]) -> Self {
        self.offset = offset;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(NoiseError::InvalidOctaves {
                octaves: self.octaves,
            });
        }
        Ok(())
    }
}

impl Perlin {
    pub fn fractal_noise1d(&self, x: f64, options: &FractalOptions1D) -> Result<f64> {
        self.fractal([x], options)
    }

    pub fn fractal_noise2d(&self, x: f64, y: f64, options: &FractalOptions2D) -> Result<f64> {
        self.fractal([x, y], options)
    }

    pub fn fractal_noise3d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        options: &FractalOptions3D,
    ) -> Result<f64> {
        self.fractal([x, y, z], options)
    }

    pub fn fractal_noise4d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        w: f64,
        options: &FractalOptions4D,
    ) -> Result<f64> {
        self.fractal([x, y, z, w], options)
    }

    fn fractal<const D: usize>(&self, coords: [f64; D], options: &FractalOptions<D>) -> Result<f64> {
        options.validate()?;

        let mut total = 0.0;
        let mut amplitude = options.amplitude;
        let mut frequency = options.frequency;
        let mut max_value = 0.0;

        for octave in 0..options.octaves {
            let shift = octave as f64;
            let mut sample = [0.0; D];
            for k in 0..D {
                sample[k] = (coords[k] + shift * options.offset[k]) * frequency[k];
            }

            total += self.sample(sample) * amplitude;
            max_value += amplitude;

            for k in 0..D {
                frequency[k] *= options.lacunarity[k];
            }
            amplitude *= options.persistence;
        }

        Ok(total / max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_reproduce_base_noise() {
        let perlin = Perlin::default();
        for i in 0..50 {
            let t = i as f64 * 0.37 - 5.0;
            assert_eq!(perlin.fractal_noise1d(t, &Default::default()).unwrap(), perlin.noise1d(t));
            assert_eq!(
                perlin.fractal_noise2d(t, t * 0.5, &Default::default()).unwrap(),
                perlin.noise2d(t, t * 0.5)
            );
            assert_eq!(
                perlin.fractal_noise3d(t, 1.5, -t, &Default::default()).unwrap(),
                perlin.noise3d(t, 1.5, -t)
            );
            assert_eq!(
                perlin.fractal_noise4d(t, 0.1, 2.0 * t, 9.9, &Default::default()).unwrap(),
                perlin.noise4d(t, 0.1, 2.0 * t, 9.9)
            );
        }
    }

    #[test]
    fn zero_octaves_rejected() {
        let perlin = Perlin::default();
        let options = FractalOptions3D::default().with_octaves(0);
        let err = perlin.fractal_noise3d(0.5, 0.5, 0.5, &options).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidOctaves { octaves: 0 }));
    }

    #[test]
    fn reference_fbm() {
        let perlin = Perlin::default();
        let options = FractalOptions2D::default()
            .with_octaves(4)
            .with_persistence(0.5)
            .with_frequency([0.05, 0.05])
            .with_lacunarity([2.0, 2.0])
            .with_offset([21.0, 22.0]);
        let v = perlin.fractal_noise2d(10.5, 11.25, &options).unwrap();
        assert!((v - 0.23843635225446222).abs() < 1e-12, "got {}", v);
    }

    #[test]
    fn amplitude_cancels_out_for_single_octave() {
        let perlin = Perlin::new(3, Default::default());
        let options = FractalOptions1D::default().with_amplitude(7.5);
        let v = perlin.fractal_noise1d(2.3, &options).unwrap();
        assert!((v - perlin.noise1d(2.3)).abs() < 1e-12);
    }

    #[test]
    fn octaves_stay_normalized() {
        let perlin = Perlin::new(12345, Default::default());
        let options = FractalOptions4D::default()
            .with_octaves(6)
            .with_persistence(0.5)
            .with_lacunarity([2.0; 4]);
        for i in 0..200 {
            let t = i as f64 * 0.173;
            let v = perlin.fractal_noise4d(t, t * 1.3, t * 0.7, -t, &options).unwrap();
            assert!(v.abs() <= 1.0 + 1e-9, "fbm out of range: {}", v);
        }
    }

    #[test]
    fn offset_shifts_later_octaves() {
        let perlin = Perlin::default();
        let base = FractalOptions1D::default().with_octaves(2);
        let shifted = base.with_offset([13.3]);
        let a = perlin.fractal_noise1d(0.4, &base).unwrap();
        let b = perlin.fractal_noise1d(0.4, &shifted).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, perlin.noise1d(0.4));
    }
}
