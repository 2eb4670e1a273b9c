//! Divide-and-conquer closest pair in O(n log n).
//!
//! Recursion over a node `(by_x, by_y)`:
//! - base: at most `BASE_CASE_MAX` points in `by_x` → brute-force scan of `by_x`;
//! - divide: `mid = n / 2`, `mid_x = by_x[mid].x` (the point at `mid` goes right);
//! - partition `by_y` by `x <= mid_x` (left) / `x > mid_x` (right), which keeps
//!   y-order without re-sorting;
//! - combine: `left` only if strictly closer, so equal halves favor `right`;
//! - merge: scan the strip `|x - mid_x| < d` in y-order, each point against at
//!   most `STRIP_WINDOW` successors, replacing the best only when strictly closer.
//!
//! Points with `x == mid_x` that sit right of `mid` in `by_x` still land in the
//! left y-view. This unbalances inputs with many duplicate x-coordinates at the
//! divider but is kept as-is: it fixes which pair wins among equal distances.

use crate::error::ClosestPairError;
use crate::geom2::{ClosestPair, Point, SortViews};

use super::brute::scan;
use super::cfg::{SolveCfg, BASE_CASE_MAX, STRIP_WINDOW};
use super::trace::{NoTrace, Trace, TraceEvent, TraceSink};

/// Closest pair without a trace.
pub fn divide_and_conquer(points: &[Point]) -> Result<ClosestPair, ClosestPairError> {
    divide_and_conquer_with(points, SolveCfg::default(), &mut NoTrace)
}

/// Closest pair plus a fresh buffered trace of this call.
pub fn divide_and_conquer_traced(
    points: &[Point],
) -> Result<(ClosestPair, Trace), ClosestPairError> {
    let mut trace = Trace::new();
    let best = divide_and_conquer_with(points, SolveCfg::default(), &mut trace)?;
    Ok((best, trace))
}

/// Closest pair, streaming trace events into `sink`.
///
/// Sorts once into `SortViews`, then recurses on slices of those views.
/// Emitted order is the sequential post-order described in `solve::trace`,
/// also when halves run in parallel.
pub fn divide_and_conquer_with<S: TraceSink + ?Sized>(
    points: &[Point],
    cfg: SolveCfg,
    sink: &mut S,
) -> Result<ClosestPair, ClosestPairError> {
    ClosestPairError::check_len(points.len())?;
    let span = tracing::debug_span!("divide_and_conquer", n = points.len());
    let _enter = span.enter();
    let views = SortViews::new(points);
    let best = recurse(views.by_x(), views.by_y(), 0, cfg, sink);
    tracing::debug!(distance = best.distance(), "closest pair found");
    Ok(best)
}

fn recurse<S: TraceSink + ?Sized>(
    by_x: &[Point],
    by_y: &[Point],
    depth: usize,
    cfg: SolveCfg,
    sink: &mut S,
) -> ClosestPair {
    let n = by_x.len();
    if n <= BASE_CASE_MAX {
        return scan(by_x);
    }

    let mid = n / 2;
    let (left, right) = by_x.split_at(mid);
    let mid_x = right[0].x();
    tracing::trace!(depth, len = n, mid_x, "split");
    let traced = sink.enabled();
    if traced {
        sink.record(TraceEvent::Split { mid_x });
    }

    let (left_y, right_y): (Vec<Point>, Vec<Point>) =
        by_y.iter().copied().partition(|p| p.x() <= mid_x);

    let (best_left, best_right) = solve_halves(
        Half {
            by_x: left,
            by_y: &left_y,
        },
        Half {
            by_x: right,
            by_y: &right_y,
        },
        depth + 1,
        cfg,
        sink,
    );
    let mut best = if best_left.distance() < best_right.distance() {
        best_left
    } else {
        best_right
    };

    let d = best.distance();
    let strip: Vec<Point> = by_y
        .iter()
        .copied()
        .filter(|p| (p.x() - mid_x).abs() < d)
        .collect();
    if traced {
        sink.record(TraceEvent::StripFormed {
            mid_x,
            strip: strip.clone(),
            best: d,
        });
    }

    for (i, a) in strip.iter().enumerate() {
        for b in strip[i + 1..].iter().take(STRIP_WINDOW) {
            let dist = a.distance(b);
            if dist < best.distance() {
                best = ClosestPair::with_distance(*a, *b, dist);
            }
        }
    }

    if traced {
        sink.record(TraceEvent::best_updated(&best));
    }
    best
}

/// One side of a split: the x-slice and its y-ordered counterpart.
#[derive(Clone, Copy)]
struct Half<'a> {
    by_x: &'a [Point],
    by_y: &'a [Point],
}

#[cfg(not(feature = "parallel"))]
fn solve_halves<S: TraceSink + ?Sized>(
    left: Half<'_>,
    right: Half<'_>,
    depth: usize,
    cfg: SolveCfg,
    sink: &mut S,
) -> (ClosestPair, ClosestPair) {
    let l = recurse(left.by_x, left.by_y, depth, cfg, sink);
    let r = recurse(right.by_x, right.by_y, depth, cfg, sink);
    (l, r)
}

#[cfg(feature = "parallel")]
fn solve_halves<S: TraceSink + ?Sized>(
    left: Half<'_>,
    right: Half<'_>,
    depth: usize,
    cfg: SolveCfg,
    sink: &mut S,
) -> (ClosestPair, ClosestPair) {
    if left.by_x.len() + right.by_x.len() < cfg.parallel_min_len {
        let l = recurse(left.by_x, left.by_y, depth, cfg, sink);
        let r = recurse(right.by_x, right.by_y, depth, cfg, sink);
        return (l, r);
    }
    // Each branch buffers its own events; replaying left then right after the
    // join reproduces the sequential order.
    let traced = sink.enabled();
    let ((l, l_trace), (r, r_trace)) = rayon::join(
        || solve_branch(left, depth, cfg, traced),
        || solve_branch(right, depth, cfg, traced),
    );
    l_trace.replay_into(sink);
    r_trace.replay_into(sink);
    (l, r)
}

#[cfg(feature = "parallel")]
fn solve_branch(half: Half<'_>, depth: usize, cfg: SolveCfg, traced: bool) -> (ClosestPair, Trace) {
    let mut branch = BranchSink {
        trace: Trace::new(),
        enabled: traced,
    };
    let best = recurse(half.by_x, half.by_y, depth, cfg, &mut branch);
    (best, branch.trace)
}

/// Per-branch buffer that mirrors the caller sink's `enabled` flag.
#[cfg(feature = "parallel")]
struct BranchSink {
    trace: Trace,
    enabled: bool,
}

#[cfg(feature = "parallel")]
impl TraceSink for BranchSink {
    fn record(&mut self, event: TraceEvent) {
        self.trace.record(event);
    }
    fn enabled(&self) -> bool {
        self.enabled
    }
}
