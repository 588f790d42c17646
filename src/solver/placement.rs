use {
  crate::{
    error::{Error, Result},
    geometry::{self, Circle, Rect, P2}
  },
  rand::Rng
};

/// Random center inside `rect`, such that a circle of diameter `d` fits entirely.
pub fn place_circle<R: Rng + ?Sized>(rect: &Rect<f64>, d: f64, rng: &mut R) -> Result<P2<f64>> {
  if !geometry::fits_diameter(rect, d) {
    return Err(Error::CircleDoesNotFit { rect: *rect, diameter: d });
  }
  let dx = rng.gen_range(0.0..=rect.size.width - d);
  let dy = rng.gen_range(0.0..=rect.size.height - d);
  Ok(P2::new(
    rect.origin.x + d / 2.0 + dx,
    rect.origin.y + d / 2.0 + dy
  ))
}

/// One circle of radius `r` per rectangle, in the same order.
pub fn place_circles<R: Rng + ?Sized>(rects: &[Rect<f64>], r: f64, rng: &mut R) -> Result<Vec<Circle<f64>>> {
  rects.iter()
    .map(|rect| place_circle(rect, 2.0 * r, rng).map(|xy| Circle::new(xy, r)))
    .collect()
}
