use crate::rng::LcgRandom;

/// Ken Perlin's reference permutation of 0..=255.
#[rustfmt::skip]
pub const BASE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Doubled permutation used to hash lattice corners. Entries 256..512 mirror
/// 0..256 so `perm[i + 1]` never needs a second wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Fisher-Yates shuffle of the base permutation, descending from 255.
    /// Draws exactly 255 values from `rng`.
    pub fn shuffled(rng: &mut LcgRandom) -> Self {
        let mut permutation = BASE_PERMUTATION;
        for i in (1..permutation.len()).rev() {
            let n = rng.index(i);
            permutation.swap(i, n);
        }
        Self::doubled(&permutation)
    }

    fn doubled(permutation: &[u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(permutation);
        perm[256..].copy_from_slice(permutation);
        Self { perm }
    }

    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl Default for PermutationTable {
    /// The unshuffled base permutation.
    fn default() -> Self {
        Self::doubled(&BASE_PERMUTATION)
    }
}
