//! Error type shared by the point model and both solvers.

/// Errors surfaced by point construction and the solvers.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ClosestPairError {
    /// A solver needs at least two points to form a pair.
    #[error("closest pair needs at least 2 points, got {len}")]
    InsufficientInput { len: usize },
    /// A coordinate was NaN or infinite.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    InvalidPoint { x: f64, y: f64 },
}

impl ClosestPairError {
    pub(crate) fn check_len(len: usize) -> Result<(), Self> {
        if len < 2 {
            return Err(Self::InsufficientInput { len });
        }
        Ok(())
    }
}
