//! Point model and the closest-pair result.
//!
//! - `Point`: immutable planar point with finite coordinates.
//! - `ClosestPair`: a distance plus the two points achieving it.
//!
//! Neither type implements `PartialEq` or `Ord`. Orderings are explicit sort
//! keys (see `views::SortViews`) and comparisons go through `coords()`.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ClosestPairError;

/// Planar point with finite coordinates.
///
/// Invariants:
/// - Both coordinates are finite (checked in `Point::new`).
/// - Immutable after construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct Point {
    v: Vector2<f64>,
}

/// Wire shape of a point; deserialization re-validates through `Point::new`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = ClosestPairError;
    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::new(raw.x, raw.y)
    }
}

impl From<Point> for RawPoint {
    fn from(p: Point) -> Self {
        RawPoint { x: p.x(), y: p.y() }
    }
}

impl Point {
    /// Rejects NaN and infinite coordinates with `InvalidPoint`.
    pub fn new(x: f64, y: f64) -> Result<Self, ClosestPairError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(ClosestPairError::InvalidPoint { x, y });
        }
        Ok(Self {
            v: Vector2::new(x, y),
        })
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.v.x, self.v.y)
    }
    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        self.v
    }
    /// Euclidean distance `sqrt(dx² + dy²)`; never squared, never cached.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.v - other.v).norm()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v.x, self.v.y)
    }
}

/// Validate raw `(x, y)` pairs into points, keeping their order.
///
/// This is the hand-off from an external loader; it does no parsing.
pub fn points_from_xy(raw: &[(f64, f64)]) -> Result<Vec<Point>, ClosestPairError> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Minimum distance and the pair achieving it.
///
/// Invariant: `distance == pair.0.distance(&pair.1)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClosestPair {
    distance: f64,
    pair: (Point, Point),
}

impl ClosestPair {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(&b),
            pair: (a, b),
        }
    }
    /// Caller guarantees `distance == a.distance(&b)`.
    #[inline]
    pub(crate) fn with_distance(a: Point, b: Point, distance: f64) -> Self {
        debug_assert!(distance == a.distance(&b));
        Self {
            distance,
            pair: (a, b),
        }
    }
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }
    #[inline]
    pub fn pair(&self) -> (Point, Point) {
        self.pair
    }
    /// Pair coordinates, convenient for comparisons in callers and tests.
    pub fn coords(&self) -> ((f64, f64), (f64, f64)) {
        (self.pair.0.coords(), self.pair.1.coords())
    }
}

impl fmt::Display for ClosestPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {} at {}", self.pair.0, self.pair.1, self.distance)
    }
}
