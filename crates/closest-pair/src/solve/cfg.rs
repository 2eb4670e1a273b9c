//! Solver configuration and fixed algorithm constants.
//!
//! Policy
//! - The base-case size and strip window are part of the algorithm's output
//!   contract (tie-breaks, the packing bound), so they are constants.
//! - `SolveCfg` only carries knobs that cannot change the result.

/// Subsets of at most this many points go straight to the brute-force scan.
pub(crate) const BASE_CASE_MAX: usize = 3;
/// Each strip point is compared against at most this many y-successors.
pub(crate) const STRIP_WINDOW: usize = 6;

/// Divide-and-conquer configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Subproblems with at least this many points solve their halves with
    /// `rayon::join`. Only read when the `parallel` feature is enabled.
    pub parallel_min_len: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            parallel_min_len: 4096,
        }
    }
}
