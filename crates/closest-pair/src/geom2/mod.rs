//! Planar point model.
//!
//! Purpose
//! - `Point` with finite coordinates and Euclidean distance.
//! - `ClosestPair`: the (distance, pair) result shared by both solvers.
//! - `SortViews`: stable x- and y-orderings, computed once per solve.
//!
//! Conventions
//! - Distances are true Euclidean distances, never squared, so trace values and
//!   oracle comparisons live on the same scale.
//! - No implicit equality or ordering on points; sort keys are explicit.
//!
//! Code cross-refs: `crate::solve::{brute_force, divide_and_conquer}`

pub mod rand;
mod types;
mod views;

pub use types::{points_from_xy, ClosestPair, Point};
pub use views::SortViews;
