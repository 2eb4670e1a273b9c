//! Step trace of the divide-and-conquer solver.
//!
//! The solver reports milestones to a `TraceSink` passed in by the caller.
//! Every top-level call gets its own sink; nothing is carried between calls.
//!
//! Event order per internal recursion node (subsets larger than the base case):
//! 1. `Split` before either half is solved,
//! 2. all events of the left half, then all events of the right half,
//! 3. `StripFormed` before the strip scan, `BestUpdated` after it.
//!
//! Base-case subsets emit nothing.

use serde::{Deserialize, Serialize};

use crate::geom2::{ClosestPair, Point};

/// One algorithmic milestone.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The subset was divided at the vertical line `x = mid_x`.
    Split { mid_x: f64 },
    /// Points with `|x - mid_x| < best`, in ascending y, about to be scanned.
    /// `mid_x` is the divider of the node that built the strip.
    StripFormed {
        mid_x: f64,
        strip: Vec<Point>,
        best: f64,
    },
    /// Best pair of the node after the strip scan (updated or not).
    BestUpdated { pair: (Point, Point), distance: f64 },
}

impl TraceEvent {
    pub(crate) fn best_updated(best: &ClosestPair) -> Self {
        TraceEvent::BestUpdated {
            pair: best.pair(),
            distance: best.distance(),
        }
    }
}

/// Receiver of trace events.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);

    /// When false the solver skips building events altogether.
    fn enabled(&self) -> bool {
        true
    }
}

/// Sink that drops everything; the untraced solve path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&mut self, _event: TraceEvent) {}
    #[inline]
    fn enabled(&self) -> bool {
        false
    }
}

/// Adapts a closure into a sink, e.g. to stream events over a channel.
pub struct FnSink<F>(pub F);

impl<F: FnMut(TraceEvent)> TraceSink for FnSink<F> {
    #[inline]
    fn record(&mut self, event: TraceEvent) {
        (self.0)(event)
    }
}

/// Buffered trace of one solve, in emission order.
///
/// Consuming it with `into_iter` yields each event once.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    #[inline]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
    /// Divider positions in emission order.
    pub fn splits(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Split { mid_x } => Some(*mid_x),
            _ => None,
        })
    }
    /// Forward every buffered event into `sink`, preserving order.
    pub fn replay_into<S: TraceSink + ?Sized>(self, sink: &mut S) {
        for e in self.events {
            sink.record(e);
        }
    }
}

impl TraceSink for Trace {
    #[inline]
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

impl IntoIterator for Trace {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
