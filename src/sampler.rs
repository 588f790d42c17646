//! Normal distribution restricted to an interval.
//!
//! Sampling is exact, by rejection. When the standard deviation is small compared to the
//! interval, candidates are drawn from the untruncated normal; otherwise the density is nearly
//! flat over the interval, and candidates are drawn uniformly and accepted with probability
//! proportional to the normal density. In both regimes the acceptance rate stays above ~13%.

use {
  crate::error::{Error, Result},
  rand::{Rng, distributions::{Distribution, Uniform}},
  rand_distr::Normal
};


/// Above `std_dev / (high - low)` of this, candidates are drawn uniformly.
const NORMAL_PROPOSAL_LIMIT: f64 = 0.5;

#[derive(Debug, Copy, Clone)]
enum Proposal {
  /// Zero spread, every draw is the mean.
  Point,
  Normal(Normal<f64>),
  Uniform(Uniform<f64>),
}

#[derive(Debug, Copy, Clone)]
pub struct TruncatedNormal {
  mean: f64,
  std_dev: f64,
  proposal: Proposal,
  low: f64,
  high: f64,
}

impl TruncatedNormal {
  /// `std_dev` may be zero or `+inf`, the latter degenerating into a uniform distribution.
  pub fn new(mean: f64, std_dev: f64, low: f64, high: f64) -> Result<Self> {
    if !(low.is_finite() && high.is_finite() && low < high) {
      return Err(Error::InvalidParameter(format!("truncation interval [{low}, {high}] is empty")));
    }
    if !(low..=high).contains(&mean) {
      return Err(Error::InvalidParameter(format!("mean {mean} is outside of [{low}, {high}]")));
    }
    if std_dev.is_nan() || std_dev < 0.0 {
      return Err(Error::InvalidParameter(format!("standard deviation must be non-negative, got {std_dev}")));
    }

    let proposal = if std_dev == 0.0 {
      Proposal::Point
    } else if std_dev <= (high - low) * NORMAL_PROPOSAL_LIMIT {
      Normal::new(mean, std_dev)
        .map(Proposal::Normal)
        .map_err(|e| Error::InvalidParameter(format!("{e}")))?
    } else {
      Proposal::Uniform(Uniform::new_inclusive(low, high))
    };

    Ok(Self { mean, std_dev, proposal, low, high })
  }

  /// Centered on `0.5`, truncated to `[0, 1]`: the split position distribution.
  pub fn unit(std_dev: f64) -> Result<Self> {
    Self::new(0.5, std_dev, 0.0, 1.0)
  }

  pub fn std_dev(&self) -> f64 {
    self.std_dev
  }
}

impl Distribution<f64> for TruncatedNormal {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
    match self.proposal {
      Proposal::Point => self.mean,
      Proposal::Normal(normal) => loop {
        let x = normal.sample(rng);
        if (self.low..=self.high).contains(&x) {
          break x;
        }
      },
      Proposal::Uniform(uniform) => loop {
        let x = uniform.sample(rng);
        let z = (x - self.mean) / self.std_dev;
        if rng.gen::<f64>() < (-0.5 * z * z).exp() {
          break x;
        }
      }
    }
  }
}
