//! Closest pair of points in the plane.
//!
//! Two solvers over the same point model:
//! - `brute_force`: exhaustive O(n²) scan, the reference oracle.
//! - `divide_and_conquer`: O(n log n) median-split recursion with a bounded
//!   strip merge; optionally records a `Trace` of its internal steps for an
//!   external visualizer.
//!
//! The crate is pure computation. Reading points from files, rendering the
//! trace, and process entry points live with the callers.
//!
//! Layout
//! - `geom2`: `Point`, `ClosestPair`, `SortViews`, seeded point clouds.
//! - `solve`: both solvers, `SolveCfg`, and the trace stream.
//! - `error`: `ClosestPairError`.

pub mod api;
pub mod error;
pub mod geom2;
pub mod solve;

pub use error::ClosestPairError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ClosestPairError;
    pub use crate::geom2::rand::{Bounds, ReplayToken};
    pub use crate::geom2::{points_from_xy, ClosestPair, Point, SortViews};
    pub use crate::solve::{
        brute_force, divide_and_conquer, divide_and_conquer_traced, divide_and_conquer_with,
        FnSink, NoTrace, SolveCfg, Trace, TraceEvent, TraceSink,
    };
}
