//! Seeded point clouds for tests, benches, and demos.
//!
//! Purpose
//! - Reproducible inputs for oracle comparisons: a replay token `(seed, index)`
//!   selects one draw, so a failing case can be regenerated from two integers.
//!
//! Families
//! - `uniform_points`: i.i.d. uniform in an axis-aligned box.
//! - `boundary_dense_points`: packed into a thin vertical band, which keeps
//!   most points inside the merge strip and stresses the 6-neighbor window.
//! - `lattice_points`: integer grid (duplicate x-coordinates, many ties).

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: -100.0,
            x_max: 100.0,
            y_min: -100.0,
            y_max: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points uniformly from `bounds`.
///
/// Degenerate bounds (`min >= max` on an axis) collapse that axis to `min`.
pub fn uniform_points(n: usize, bounds: Bounds, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .filter_map(|_| {
            let x = sample_axis(&mut rng, bounds.x_min, bounds.x_max);
            let y = sample_axis(&mut rng, bounds.y_min, bounds.y_max);
            Point::new(x, y).ok()
        })
        .collect()
}

/// Draw `n` points with `|x| <= half_width` and `y` spread over `[0, n)`.
///
/// With `half_width` small against the typical y-gap, nearly every point lands
/// in the top-level strip and closest pairs straddle the split line.
pub fn boundary_dense_points(n: usize, half_width: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let hw = half_width.abs();
    let height = n.max(1) as f64;
    (0..n)
        .filter_map(|_| {
            let x = sample_axis(&mut rng, -hw, hw);
            let y = sample_axis(&mut rng, 0.0, height);
            Point::new(x, y).ok()
        })
        .collect()
}

/// Row-major `cols × rows` grid with the given spacing, anchored at the origin.
pub fn lattice_points(cols: usize, rows: usize, spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            if let Ok(p) = Point::new(c as f64 * spacing, r as f64 * spacing) {
                out.push(p);
            }
        }
    }
    out
}

#[inline]
fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
