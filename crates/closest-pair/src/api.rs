//! Curated surface for callers holding raw coordinates.
//!
//! Loaders and visualizers live outside this crate; they hand over `(x, y)`
//! pairs and read back a `ClosestPair` and, if asked, a `Trace`.

pub use crate::error::ClosestPairError;
pub use crate::geom2::{points_from_xy, ClosestPair, Point, SortViews};
pub use crate::solve::{
    brute_force, divide_and_conquer, divide_and_conquer_traced, divide_and_conquer_with, FnSink,
    NoTrace, SolveCfg, Trace, TraceEvent, TraceSink,
};

/// Validate raw pairs and run the divide-and-conquer solver.
pub fn closest_pair_xy(raw: &[(f64, f64)]) -> Result<ClosestPair, ClosestPairError> {
    let points = points_from_xy(raw)?;
    divide_and_conquer(&points)
}

/// Validate raw pairs, solve, and return the trace alongside the result.
pub fn closest_pair_xy_traced(
    raw: &[(f64, f64)],
) -> Result<(ClosestPair, Trace), ClosestPairError> {
    let points = points_from_xy(raw)?;
    divide_and_conquer_traced(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pairs_end_to_end() {
        let best = closest_pair_xy(&[(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)]).unwrap();
        assert_eq!(best.distance(), 1.0);
        assert_eq!(best.coords(), ((0.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn invalid_point_wins_over_short_input() {
        // Validation runs before the length check.
        let err = closest_pair_xy(&[(f64::INFINITY, 0.0)]).unwrap_err();
        assert!(matches!(err, ClosestPairError::InvalidPoint { .. }));
        let err = closest_pair_xy(&[(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, ClosestPairError::InsufficientInput { len: 1 });
    }

    #[test]
    fn traced_variant_returns_events() {
        let raw: Vec<(f64, f64)> = (0..12).map(|i| (i as f64, (i * i % 7) as f64)).collect();
        let (best, trace) = closest_pair_xy_traced(&raw).unwrap();
        assert!(best.distance() > 0.0);
        assert!(trace.splits().count() >= 1);
    }
}
