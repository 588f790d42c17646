use {
  super::partition::partition,
  crate::{
    error::{Error, Result},
    geometry::Rect
  },
  rand::Rng,
  tracing::{debug, info}
};

/// Binary search for the largest split spread that still yields the requested number of
/// rectangles.
///
/// Invariant: `sigma_l` is either `0` or has produced a full partition, `sigma_r` has failed to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SigmaSearch {
  /// Initial upper bound.
  pub sigma_max: f64,
  /// Stop once the bounds are this close.
  pub eps: f64,
  /// Hard limit on the number of partition attempts.
  pub max_iterations: u32,
}

impl Default for SigmaSearch {
  fn default() -> Self {
    Self {
      sigma_max: 1e18,
      eps: 1e-16,
      max_iterations: 256,
    }}}

/// Outcome of a [`SigmaSearch`].
#[derive(Debug, Clone)]
pub struct Tuning {
  pub rects: Vec<Rect<f64>>,
  /// Spread the `rects` were generated with.
  pub sigma: f64,
  /// Final `(sigma_l, sigma_r)` search bounds.
  pub bracket: (f64, f64),
  pub iterations: u32,
}

impl SigmaSearch {
  pub fn with_sigma_max(mut self, sigma_max: f64) -> Self {
    self.sigma_max = sigma_max;
    self
  }
  pub fn with_eps(mut self, eps: f64) -> Self {
    self.eps = eps;
    self
  }
  pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
    self.max_iterations = max_iterations;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if !(self.sigma_max.is_finite() && self.sigma_max > 0.0) {
      return Err(Error::InvalidParameter(format!("sigma_max must be positive and finite, got {}", self.sigma_max)));
    }
    if !(self.eps > 0.0) {
      return Err(Error::InvalidParameter(format!("eps must be positive, got {}", self.eps)));
    }
    Ok(())
  }

  /// Returns the rectangles of the last successful attempt. If no attempt reached `n`, the
  /// attempt with the most rectangles is returned instead, and `rects.len() < n`.
  pub fn run<R: Rng + ?Sized>(&self, n: usize, r: f64, side: f64, rng: &mut R) -> Result<Tuning> {
    self.validate()?;
    let (mut sigma_l, mut sigma_r) = (0.0f64, self.sigma_max);
    let mut best: Option<(f64, Vec<Rect<f64>>)> = None;
    let mut partial: (f64, Vec<Rect<f64>>) = (0.0, vec![]);
    let mut iterations = 0;

    while (sigma_r - sigma_l).abs() > self.eps && iterations < self.max_iterations {
      let sigma = (sigma_l + sigma_r) / 2.0;
      // bounds are adjacent floats
      if sigma <= sigma_l || sigma >= sigma_r { break; }
      iterations += 1;

      let rects = partition(n, r, side, sigma, rng)?;
      debug!(iterations, sigma, count = rects.len(), "sigma search step");

      if rects.len() < n {
        sigma_r = sigma;
        if rects.len() > partial.1.len() {
          partial = (sigma, rects);
        }
      } else {
        sigma_l = sigma;
        best = Some((sigma, rects));
      }
    }

    let (sigma, rects) = best.unwrap_or(partial);
    info!(iterations, sigma, count = rects.len(), target = n, "sigma search finished");
    Ok(Tuning { rects, sigma, bracket: (sigma_l, sigma_r), iterations })
  }
}

/// Split the `side` x `side` square into `n` rectangles with the loosest split spread found by a
/// default [`SigmaSearch`].
pub fn find_tight_partition<R: Rng + ?Sized>(
  n: usize,
  r: f64,
  side: f64,
  rng: &mut R
) -> Result<Vec<Rect<f64>>> {
  SigmaSearch::default()
    .run(n, r, side, rng)
    .map(|tuning| tuning.rects)
}
