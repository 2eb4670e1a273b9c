//! Print the step trace of a seeded point cloud as JSON lines.
//!
//! Usage:
//!   cargo run -p closest-pair --example trace_json -- 32
//!
//! One event per line in emission order, then the final result. A visualizer
//! can draw a divider per `split`, the band `mid_x ± best` per `strip_formed`,
//! and a segment per `best_updated`.

use closest_pair::geom2::rand::{uniform_points, Bounds, ReplayToken};
use closest_pair::solve::divide_and_conquer_traced;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(16);
    let pts = uniform_points(n, Bounds::default(), ReplayToken { seed: 2025, index: 0 });
    match divide_and_conquer_traced(&pts) {
        Ok((best, trace)) => {
            for event in trace {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("serialize: {e}"),
                }
            }
            eprintln!("closest pair: {best}");
        }
        Err(e) => eprintln!("usage: trace_json <n >= 2> ({e})"),
    }
}
