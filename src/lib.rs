//! Seedable classic gradient noise in 1 to 4 dimensions, with fractal
//! (FBM) layering.
//!
//! ```
//! use perlin::{FractalOptions2D, Perlin, SmoothstepOrder};
//!
//! let mut perlin = Perlin::new(12345, SmoothstepOrder::Quintic);
//! assert_eq!(perlin.noise2d(3.0, 4.0), 0.0);
//!
//! let options = FractalOptions2D::default()
//!     .with_octaves(5)
//!     .with_persistence(0.5)
//!     .with_lacunarity([2.0, 2.0]);
//! let v = perlin.fractal_noise2d(10.5, 11.5, &options).unwrap();
//! assert!(v.abs() <= 1.0);
//!
//! perlin.set_smoothstep_order(SmoothstepOrder::Cubic);
//! perlin.set_seed(54321);
//! ```

pub mod config;
pub mod error;
pub mod fractal;
pub mod gradient;
pub mod noise;
pub mod perm;
pub mod rng;
pub mod smooth;

pub use config::NoiseConfig;
pub use error::{NoiseError, Result};
pub use fractal::{FractalOptions, FractalOptions1D, FractalOptions2D, FractalOptions3D, FractalOptions4D};
pub use noise::{DEFAULT_SEED, Perlin};
pub use smooth::SmoothstepOrder;
