//! .
//!
//! None of the solver errors are expected at runtime: they flag a broken internal invariant
//! (a split requested on a rectangle that cannot hold two circles) or a rejected input.
//! Running out of room is *not* an error, see [`Packing::is_complete`](crate::solver::Packing::is_complete).

use crate::geometry::Rect;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid rect to split: {rect:?}")]
  InvalidSplit { rect: Rect<f64> },

  #[error("circle of diameter {diameter} does not fit in {rect:?}")]
  CircleDoesNotFit { rect: Rect<f64>, diameter: f64 },

  #[error("unreachable state: {0}")]
  Unreachable(&'static str),

  #[error("invalid parameter: {0}")]
  InvalidParameter(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "drawing")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
