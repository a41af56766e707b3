//! Fixed gradient sets. Values are part of the noise field's identity; changing
//! any entry changes every seed's output.

/// 1D slopes: ±k/4 for k in 1..=8, plus a flat zero.
pub static GRAD1: [f64; 17] = [
    0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0,
    0.0,
    -0.25, -0.5, -0.75, -1.0, -1.25, -1.5, -1.75, -2.0,
];

pub static GRAD2: [[f64; 2]; 8] = [
    [-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0],
    [0.0, -1.0], [-1.0, 0.0], [0.0, 1.0], [1.0, 0.0],
];

/// Cube edge midpoints: two ±1 components per vector, grouped by axis pair.
pub static GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0], [0.0, -1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, -1.0],
];

/// Axis pairs (0,1) (0,2) (0,3) (1,2) (1,3) (2,3), four sign combinations each.
#[rustfmt::skip]
pub static GRAD4: [[f64; 4]; 24] = [
    [1.0, 1.0, 0.0, 0.0], [1.0, -1.0, 0.0, 0.0], [-1.0, 1.0, 0.0, 0.0], [-1.0, -1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0, 0.0], [1.0, 0.0, -1.0, 0.0], [-1.0, 0.0, 1.0, 0.0], [-1.0, 0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, -1.0], [-1.0, 0.0, 0.0, 1.0], [-1.0, 0.0, 0.0, -1.0],
    [0.0, 1.0, 1.0, 0.0], [0.0, 1.0, -1.0, 0.0], [0.0, -1.0, 1.0, 0.0], [0.0, -1.0, -1.0, 0.0],
    [0.0, 1.0, 0.0, 1.0], [0.0, 1.0, 0.0, -1.0], [0.0, -1.0, 0.0, 1.0], [0.0, -1.0, 0.0, -1.0],
    [0.0, 0.0, 1.0, 1.0], [0.0, 0.0, 1.0, -1.0], [0.0, 0.0, -1.0, 1.0], [0.0, 0.0, -1.0, -1.0],
];

/// Gradient vector picked by `hash mod count` for a D-axis lattice.
#[inline]
pub fn select<const D: usize>(hash: usize) -> &'static [f64] {
    match D {
        1 => std::slice::from_ref(&GRAD1[hash % GRAD1.len()]),
        2 => &GRAD2[hash % GRAD2.len()],
        3 => &GRAD3[hash % GRAD3.len()],
        4 => &GRAD4[hash % GRAD4.len()],
        _ => unreachable!("gradient sets exist for 1 to 4 axes"),
    }
}

/// Dot product of the hashed gradient with the corner-to-point offset.
#[inline]
pub fn contribution<const D: usize>(hash: usize, offset: &[f64; D]) -> f64 {
    select::<D>(hash)
        .iter()
        .zip(offset)
        .fold(0.0, |acc, (g, d)| acc + g * d)
}
