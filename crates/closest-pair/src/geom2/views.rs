//! Ascending-by-x and ascending-by-y orderings of a point set.
//!
//! Both views come from stable sorts, so points with equal keys keep their
//! input order. They are built once per top-level solve and then only sliced
//! and filtered, never re-sorted.

use std::cmp::Ordering;

use super::types::Point;

/// Two parallel, read-only orderings of the same points.
#[derive(Clone, Debug)]
pub struct SortViews {
    by_x: Vec<Point>,
    by_y: Vec<Point>,
}

impl SortViews {
    pub fn new(points: &[Point]) -> Self {
        let mut by_x = points.to_vec();
        // partial_cmp, not total_cmp: -0.0 and 0.0 are a tie and keep input order.
        by_x.sort_by(|a, b| a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal));
        let mut by_y = points.to_vec();
        by_y.sort_by(|a, b| a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal));
        Self { by_x, by_y }
    }
    #[inline]
    pub fn by_x(&self) -> &[Point] {
        &self.by_x
    }
    #[inline]
    pub fn by_y(&self) -> &[Point] {
        &self.by_y
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.by_x.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::points_from_xy;

    fn coords(ps: &[Point]) -> Vec<(f64, f64)> {
        ps.iter().map(Point::coords).collect()
    }

    #[test]
    fn sorts_ascending_on_each_axis() {
        let pts = points_from_xy(&[(3.0, 1.0), (-1.0, 4.0), (2.0, -5.0)]).unwrap();
        let views = SortViews::new(&pts);
        assert_eq!(
            coords(views.by_x()),
            vec![(-1.0, 4.0), (2.0, -5.0), (3.0, 1.0)]
        );
        assert_eq!(
            coords(views.by_y()),
            vec![(2.0, -5.0), (3.0, 1.0), (-1.0, 4.0)]
        );
        assert_eq!(views.len(), 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let pts = points_from_xy(&[(1.0, 9.0), (0.0, 2.0), (1.0, 2.0), (1.0, -3.0)]).unwrap();
        let views = SortViews::new(&pts);
        assert_eq!(
            coords(views.by_x()),
            vec![(0.0, 2.0), (1.0, 9.0), (1.0, 2.0), (1.0, -3.0)]
        );
        assert_eq!(
            coords(views.by_y()),
            vec![(1.0, -3.0), (0.0, 2.0), (1.0, 2.0), (1.0, 9.0)]
        );
    }

    #[test]
    fn empty_input_gives_empty_views() {
        let views = SortViews::new(&[]);
        assert!(views.is_empty());
        assert!(views.by_y().is_empty());
    }
}
