//! Deterministic LCG driving permutation shuffles. Never touched during sampling.

const LCG_A: u32 = 1664525;
const LCG_C: u32 = 1013904223;
const LCG_M: f64 = 4294967296.0;

/// Linear congruential generator with the Numerical Recipes constants
/// (a = 1664525, c = 1013904223, m = 2^32).
///
/// The state is the seed reduced modulo 2^32, so non-negative seeds below
/// 2^32 produce exactly the stream existing content was generated with.
#[derive(Clone, Debug)]
pub struct LcgRandom {
    state: u32,
}

impl LcgRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(1 << 32) as u32,
        }
    }

    /// Advance the state and return it as a fraction in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // Wrapping u32 arithmetic is the mod 2^32 of the recurrence.
        self.state = LCG_A.wrapping_mul(self.state).wrapping_add(LCG_C);
        self.state as f64 / LCG_M
    }

    /// Uniform index in 0..=max.
    #[inline]
    pub fn index(&mut self, max: usize) -> usize {
        (self.next_f64() * (max + 1) as f64).floor() as usize
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw_follows_recurrence() {
        let mut rng = LcgRandom::new(0);
        let v = rng.next_f64();
        assert_eq!(rng.state(), 1013904223);
        assert_eq!(v, 1013904223.0 / 4294967296.0);

        let mut rng = LcgRandom::new(1335);
        rng.next_f64();
        let expected = (1664525u64 * 1335 + 1013904223) % (1u64 << 32);
        assert_eq!(rng.state() as u64, expected);
    }

    #[test]
    fn stream_is_reproducible() {
        let mut a = LcgRandom::new(987654);
        let mut b = LcgRandom::new(987654);
        for _ in 0..1000 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = LcgRandom::new(-42);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn negative_seed_wraps_modulo_2_32() {
        let mut a = LcgRandom::new(-1);
        let mut b = LcgRandom::new(u32::MAX as i64);
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn index_is_bounded() {
        let mut rng = LcgRandom::new(7);
        for max in 1..256 {
            assert!(rng.index(max) <= max);
        }
    }
}
