//! Closest-pair solvers and their step trace.
//!
//! Purpose
//! - `brute_force`: exhaustive scan, used standalone as the oracle and as the
//!   base case of the recursion.
//! - `divide_and_conquer*`: median-split recursion with the strip merge;
//!   optionally streams `TraceEvent`s into a caller-owned `TraceSink`.
//!
//! Determinism
//! - For a fixed input order the returned pair and the trace are fully
//!   determined. All comparisons are strict (`<`), all distances true
//!   Euclidean.
//!
//! Concurrency
//! - Sequential by default. With the `parallel` feature, halves of large
//!   subproblems run under `rayon::join`; results and buffered events are
//!   combined after the join, so output matches the sequential run.
//!
//! Code cross-refs: `geom2::{Point, ClosestPair, SortViews}`, `error::ClosestPairError`

mod brute;
mod cfg;
mod dac;
mod trace;

pub use brute::brute_force;
pub use cfg::SolveCfg;
pub use dac::{divide_and_conquer, divide_and_conquer_traced, divide_and_conquer_with};
pub use trace::{FnSink, NoTrace, Trace, TraceEvent, TraceSink};
