//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. A rectangle is
//! stored as its top-left corner (`origin`) and its width/height (`size`), i.e. `{x, y, dx, dy}`.

use {
  euclid::{Point2D, Box2D, Size2D},
  num_traits::Float
};

pub mod shapes;
pub use shapes::*;


/// Coordinate basis of the packed square
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSpace;

pub type P2<T> = Point2D<T, WorldSpace>;
pub type Rect<T> = euclid::Rect<T, WorldSpace>;

pub trait BoundingBox<T> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace>;
}

impl<T: Float> BoundingBox<T> for Rect<T> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    Box2D::new(self.origin, self.origin + self.size.to_vector())
  }
}

/// `side` x `side` square, top-left corner in the origin.
pub fn square<T: Float>(side: T) -> Rect<T> {
  Rect::new(
    P2::new(T::zero(), T::zero()),
    Size2D::new(side, side)
  )
}

/// The larger of the two sides, used to order rectangles for splitting.
pub fn max_side<T: Float>(rect: &Rect<T>) -> T {
  rect.size.width.max(rect.size.height)
}

/// Whether `rect` can be cut into two pieces along some axis, such that both pieces are
/// at least `d` wide along that axis.
///
/// Note that the splitter receives the circle *diameter* as `d`, so a rectangle stays
/// splittable only while one of its sides is at least twice the diameter.
pub fn can_split<T: Float>(rect: &Rect<T>, d: T) -> bool {
  let d2 = d + d;
  rect.size.width >= d2 || rect.size.height >= d2
}

/// Whether a circle of diameter `d` fits inside `rect`.
pub fn fits_diameter<T: Float>(rect: &Rect<T>, d: T) -> bool {
  rect.size.width >= d && rect.size.height >= d
}

/// Area of the intersection of two rectangles, zero if they only share an edge.
pub fn overlap_area<T: Float>(a: &Rect<T>, b: &Rect<T>) -> T {
  let (a, b) = (a.bounding_box(), b.bounding_box());
  let w = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
  let h = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
  w.max(T::zero()) * h.max(T::zero())
}
