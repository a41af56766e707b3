use crate::config::NoiseConfig;
use crate::gradient;
use crate::perm::PermutationTable;
use crate::rng::LcgRandom;
use crate::smooth::{SmoothstepOrder, lerp, smoothstep};

pub const DEFAULT_SEED: i64 = 1335;

/// Seeded classic gradient noise in 1 to 4 dimensions.
///
/// Sampling only reads the permutation table, so a generator can be shared
/// across threads by reference. Reseeding and reshuffling take `&mut self`;
/// callers that share a generator must serialize those themselves.
///
/// Lattice hashing chains x first (`perm[perm[perm[x] + y] + z]`), and
/// interpolation folds x first with the last axis outermost.
#[derive(Clone, Debug)]
pub struct Perlin {
    seed: i64,
    random: LcgRandom,
    perm: PermutationTable,
    smoothstep_order: SmoothstepOrder,
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, SmoothstepOrder::default())
    }
}

impl Perlin {
    pub fn new(seed: i64, smoothstep_order: SmoothstepOrder) -> Self {
        let mut random = LcgRandom::new(seed);
        let perm = PermutationTable::shuffled(&mut random);
        Self {
            seed,
            random,
            perm,
            smoothstep_order,
        }
    }

    pub fn from_config(config: &NoiseConfig) -> Self {
        Self::new(config.seed, config.smoothstep)
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Restart the random stream from `seed` and reshuffle. No-op if the seed
    /// is unchanged, so the table survives redundant updates.
    pub fn set_seed(&mut self, seed: i64) {
        if seed == self.seed {
            return;
        }
        tracing::debug!(old = self.seed, new = seed, "reseeding permutation table");
        self.seed = seed;
        self.random = LcgRandom::new(seed);
        self.shuffle_perm();
    }

    /// Reshuffle from the base permutation, continuing the current random
    /// stream. Two shuffles after construction differ from one.
    pub fn shuffle_perm(&mut self) {
        self.perm = PermutationTable::shuffled(&mut self.random);
        tracing::trace!(seed = self.seed, state = self.random.state(), "shuffled permutation table");
    }

    pub fn smoothstep_order(&self) -> SmoothstepOrder {
        self.smoothstep_order
    }

    pub fn set_smoothstep_order(&mut self, order: SmoothstepOrder) {
        self.smoothstep_order = order;
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    pub fn noise1d(&self, x: f64) -> f64 {
        self.sample([x])
    }

    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        self.sample([x, y])
    }

    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample([x, y, z])
    }

    pub fn noise4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample([x, y, z, w])
    }

    /// Multilinear gradient noise over the 2^D corners of the unit cell
    /// containing `coords`. Corner `c` takes the +1 branch on axis `k` when
    /// bit `k` of `c` is set. In 1D this is the plain `perm[x]`, `perm[x + 1]`
    /// pair with no chaining.
    pub(crate) fn sample<const D: usize>(&self, coords: [f64; D]) -> f64 {
        let mut cell = [0usize; D];
        let mut frac = [0.0f64; D];
        let mut weight = [0.0f64; D];
        for k in 0..D {
            let floor = coords[k].floor();
            frac[k] = coords[k] - floor;
            weight[k] = smoothstep(frac[k], self.smoothstep_order);
            cell[k] = lattice_index(floor);
        }

        let corners = 1usize << D;
        let mut values = [0.0f64; 16];
        for (corner, value) in values[..corners].iter_mut().enumerate() {
            // perm[perm[x] + y] ..., starting from a zero hash for x.
            let mut hash = 0;
            let mut offset = frac;
            for k in 0..D {
                let step = (corner >> k) & 1;
                hash = self.perm.get(hash + cell[k] + step);
                offset[k] -= step as f64;
            }
            *value = gradient::contribution::<D>(hash, &offset);
        }

        // Each pass halves the corner set along one axis, x first.
        let mut len = corners;
        for &u in &weight {
            len /= 2;
            for j in 0..len {
                values[j] = lerp(u, values[2 * j], values[2 * j + 1]);
            }
        }
        values[0]
    }
}

/// Cell coordinate reduced into 0..256. The doubled table absorbs the +1.
#[inline]
fn lattice_index(floor: f64) -> usize {
    (floor as i64).rem_euclid(256) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn default_generator_is_zero_at_origin() {
        let perlin = Perlin::default();
        assert_eq!(perlin.seed(), 1335);
        assert_eq!(perlin.smoothstep_order(), SmoothstepOrder::Quintic);
        assert_eq!(perlin.noise1d(0.0), 0.0);
        assert_eq!(perlin.noise2d(0.0, 0.0), 0.0);
        assert_eq!(perlin.noise3d(0.0, 0.0, 0.0), 0.0);
        assert_eq!(perlin.noise4d(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn reference_samples() {
        let perlin = Perlin::default();
        assert_close(perlin.noise1d(10.3), -0.12553800000000015);
        assert_close(perlin.noise2d(0.5, 0.5), 0.625);
        assert_close(perlin.noise2d(-3.7, 12.2), -0.1238680844800008);
        assert_close(perlin.noise3d(1.25, 2.5, 3.75), -0.5009632110595703);
        assert_close(perlin.noise4d(0.1, 0.2, 0.3, 0.4), -0.14051513924454945);
    }

    #[test]
    fn set_seed_same_value_keeps_table() {
        let mut perlin = Perlin::new(5, SmoothstepOrder::Cubic);
        perlin.shuffle_perm();
        let before = perlin.permutation().clone();
        perlin.set_seed(5);
        assert_eq!(perlin.permutation(), &before);
    }

    #[test]
    fn set_seed_new_value_matches_fresh_generator() {
        let mut perlin = Perlin::new(5, SmoothstepOrder::Cubic);
        perlin.set_seed(6);
        assert_eq!(perlin.seed(), 6);
        assert_eq!(perlin.smoothstep_order(), SmoothstepOrder::Cubic);
        assert_eq!(perlin.permutation(), Perlin::new(6, SmoothstepOrder::Linear).permutation());
    }

    #[test]
    fn shuffle_continues_stream() {
        let mut perlin = Perlin::default();
        let first = perlin.permutation().clone();
        perlin.shuffle_perm();
        assert_ne!(perlin.permutation(), &first);
        assert_eq!(
            &perlin.permutation().as_slice()[..8],
            &[144, 208, 95, 16, 64, 52, 48, 50]
        );
    }

    #[test]
    fn negative_cells_wrap() {
        let perlin = Perlin::default();
        assert_eq!(perlin.noise1d(-255.75), perlin.noise1d(0.25));
        assert_eq!(perlin.noise2d(-255.5, 0.25), perlin.noise2d(0.5, 0.25));
        assert_eq!(lattice_index(-1.0), 255);
        assert_eq!(lattice_index(256.0), 0);
    }

    #[test]
    fn smoothstep_order_changes_field() {
        let mut perlin = Perlin::default();
        let quintic = perlin.noise2d(0.3, 0.7);
        perlin.set_smoothstep_order(SmoothstepOrder::Linear);
        assert_ne!(perlin.noise2d(0.3, 0.7), quintic);
    }

    #[test]
    fn sample_matches_named_kernels() {
        let perlin = Perlin::new(99, SmoothstepOrder::Quintic);
        assert_eq!(perlin.sample([0.37]), perlin.noise1d(0.37));
        assert_eq!(perlin.sample([0.37, 1.9]), perlin.noise2d(0.37, 1.9));
        assert_eq!(perlin.sample([0.37, 1.9, 4.2, 8.8]), perlin.noise4d(0.37, 1.9, 4.2, 8.8));
    }
}
