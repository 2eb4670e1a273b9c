//! Exhaustive O(n²) scan; the reference oracle and the recursion's base case.

use crate::error::ClosestPairError;
use crate::geom2::{ClosestPair, Point};

/// Closest pair by checking all `n(n-1)/2` pairs.
///
/// Tie-break: pairs are visited as `(i, j)`, `i < j`, `i` then `j` ascending,
/// and a candidate replaces the best only when strictly closer. The earliest
/// minimal pair wins and is returned as `(points[i], points[j])`.
pub fn brute_force(points: &[Point]) -> Result<ClosestPair, ClosestPairError> {
    ClosestPairError::check_len(points.len())?;
    Ok(scan(points))
}

/// Caller guarantees `points.len() >= 2`.
pub(crate) fn scan(points: &[Point]) -> ClosestPair {
    debug_assert!(points.len() >= 2, "scan needs a pair");
    let mut best = ClosestPair::new(points[0], points[1]);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance(b);
            if d < best.distance() {
                best = ClosestPair::with_distance(*a, *b, d);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::points_from_xy;

    #[test]
    fn rejects_fewer_than_two() {
        assert_eq!(
            brute_force(&[]).unwrap_err(),
            ClosestPairError::InsufficientInput { len: 0 }
        );
        let one = points_from_xy(&[(1.0, 1.0)]).unwrap();
        assert_eq!(
            brute_force(&one).unwrap_err(),
            ClosestPairError::InsufficientInput { len: 1 }
        );
    }

    #[test]
    fn two_points_are_the_pair() {
        let pts = points_from_xy(&[(1.0, 2.0), (4.0, 6.0)]).unwrap();
        let best = brute_force(&pts).unwrap();
        assert_eq!(best.coords(), ((1.0, 2.0), (4.0, 6.0)));
        assert_eq!(best.distance(), 5.0);
    }

    #[test]
    fn known_small_case() {
        let pts = points_from_xy(&[(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)]).unwrap();
        let best = brute_force(&pts).unwrap();
        assert_eq!(best.distance(), 1.0);
        assert_eq!(best.coords(), ((0.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn earliest_minimal_pair_wins_ties() {
        // (0,1) and (2,3) are both at distance 1; (0,1) is visited first.
        let pts = points_from_xy(&[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (6.0, 0.0)]).unwrap();
        let best = brute_force(&pts).unwrap();
        assert_eq!(best.coords(), ((0.0, 0.0), (1.0, 0.0)));

        // Same pairs, input reordered: now (5,6) comes first.
        let pts = points_from_xy(&[(5.0, 0.0), (6.0, 0.0), (0.0, 0.0), (1.0, 0.0)]).unwrap();
        let best = brute_force(&pts).unwrap();
        assert_eq!(best.coords(), ((5.0, 0.0), (6.0, 0.0)));
    }

    #[test]
    fn duplicates_give_zero() {
        let pts = points_from_xy(&[(3.0, 3.0), (0.0, 0.0), (3.0, 3.0)]).unwrap();
        let best = brute_force(&pts).unwrap();
        assert_eq!(best.distance(), 0.0);
        assert_eq!(best.coords(), ((3.0, 3.0), (3.0, 3.0)));
    }
}
