use {
  crate::{
    error::{Error, Result},
    geometry::{self, Rect, P2},
    sampler::TruncatedNormal
  },
  euclid::Size2D,
  rand::{Rng, distributions::Distribution},
  tracing::trace
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis { X, Y }

/// Cuts rectangles in two, such that each half is at least `d` wide along the cut axis.
#[derive(Debug, Copy, Clone)]
pub struct Splitter {
  d: f64,
  position: TruncatedNormal,
}

impl Splitter {
  /// `sigma` is the spread of the cut position around the middle of the valid range.
  pub fn new(d: f64, sigma: f64) -> Result<Self> {
    Ok(Self { d, position: TruncatedNormal::unit(sigma)? })
  }

  pub fn d(&self) -> f64 {
    self.d
  }

  /// Requires [`geometry::can_split`]. If both axes qualify, one is picked by a fair coin.
  pub fn split<R: Rng + ?Sized>(&self, rect: Rect<f64>, rng: &mut R) -> Result<(Rect<f64>, Rect<f64>)> {
    if !geometry::can_split(&rect, self.d) {
      return Err(Error::InvalidSplit { rect });
    }
    let d2 = 2.0 * self.d;
    let axis = match (rect.size.width >= d2, rect.size.height >= d2) {
      (true, true) => if rng.gen::<f64>() > 0.5 { Axis::X } else { Axis::Y },
      (true, false) => Axis::X,
      (false, true) => Axis::Y,
      (false, false) => return Err(Error::Unreachable("splittable rect qualifies on neither axis")),
    };
    let t = self.position.sample(rng);
    trace!(?axis, t, sigma = self.position.std_dev(), "split {:?}", rect);
    Ok(split_at(rect, axis, self.d, t))
  }
}

/// Length of the first half: `d + t * (size - 2d)`, pulled back by as many ulps as needed so
/// that the rest is still at least `d` after rounding.
fn cut_length(size: f64, d: f64, t: f64) -> f64 {
  let mut cut = (d + t * (size - 2.0 * d)).min(size - d);
  while size - cut < d && cut > d {
    cut = f64::from_bits(cut.to_bits() - 1);
  }
  cut
}

/// The first half is `d + t * (size - 2d)` long along `axis`, the second one takes the rest.
pub fn split_at(rect: Rect<f64>, axis: Axis, d: f64, t: f64) -> (Rect<f64>, Rect<f64>) {
  let Rect { origin, size, .. } = rect;
  match axis {
    Axis::X => {
      let dx = cut_length(size.width, d, t);
      (
        Rect::new(origin, Size2D::new(dx, size.height)),
        Rect::new(P2::new(origin.x + dx, origin.y), Size2D::new(size.width - dx, size.height))
      )
    }
    Axis::Y => {
      let dy = cut_length(size.height, d, t);
      (
        Rect::new(origin, Size2D::new(size.width, dy)),
        Rect::new(P2::new(origin.x, origin.y + dy), Size2D::new(size.width, size.height - dy))
      )
    }
  }
}

/// Split `rect` with minimum piece size `d`, drawing the cut position with spread `sigma`.
pub fn split_rect<R: Rng + ?Sized>(
  rect: Rect<f64>,
  d: f64,
  sigma: f64,
  rng: &mut R
) -> Result<(Rect<f64>, Rect<f64>)> {
  Splitter::new(d, sigma)?.split(rect, rng)
}
