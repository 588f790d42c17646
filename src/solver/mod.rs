//! Recursive randomized partitioning of the square, and circle placement.
//!
//! [`partition`] splits the largest splittable rectangle until `n` pieces exist,
//! [`SigmaSearch`] tunes the split spread so that this succeeds, [`place_circles`] puts one
//! circle into every piece. Circles never overlap, because the pieces don't.

pub mod split;
pub use split::{split_rect, Axis, Splitter};

pub mod partition;
pub use partition::partition;

pub mod sigma_search;
pub use sigma_search::{find_tight_partition, SigmaSearch, Tuning};

pub mod placement;
pub use placement::{place_circle, place_circles};

#[cfg(test)] mod tests;

use {
  crate::{
    config::PackingConfig,
    error::Result,
    geometry::{self, Circle, Rect}
  },
  rand::Rng,
  tracing::warn
};

#[derive(Debug, Clone)]
pub struct Packing {
  pub n: usize,
  pub radius: f64,
  pub side: f64,
  /// Split spread the rectangles were generated with.
  pub sigma: f64,
  pub rects: Vec<Rect<f64>>,
  /// Empty unless the packing is complete.
  pub circles: Vec<Circle<f64>>,
}

impl Packing {
  /// Whether all `n` circles were placed.
  pub fn is_complete(&self) -> bool {
    self.rects.len() >= self.n && self.circles.len() == self.rects.len()
  }
}

/// Search for a partition into `config.n` rectangles, and place a circle in each of them.
///
/// Running out of room is reported through [`Packing::is_complete`], not as an error.
pub fn pack<R: Rng + ?Sized>(config: &PackingConfig, rng: &mut R) -> Result<Packing> {
  config.validate()?;
  let PackingConfig { n, radius, side, search } = *config;
  let mut packing = Packing { n, radius, side, sigma: 0.0, rects: vec![], circles: vec![] };

  if !geometry::fits_diameter(&geometry::square(side), config.diameter()) {
    warn!(side, radius, "square cannot hold a single circle");
    return Ok(packing);
  }

  let tuning = search.run(n, radius, side, rng)?;
  packing.sigma = tuning.sigma;
  packing.rects = tuning.rects;
  if packing.rects.len() >= n {
    packing.circles = place_circles(&packing.rects, radius, rng)?;
  }
  Ok(packing)
}
