use {
  super::{BoundingBox, Rect, P2, WorldSpace},
  euclid::{Box2D, Vector2D as V2},
  num_traits::Float
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T> {
  pub xy: P2<T>,
  pub r: T,
}

impl<T: Float> Circle<T> {
  pub fn new(xy: P2<T>, r: T) -> Self {
    Self { xy, r }
  }

  /// Whether the whole disk lies inside `rect`, up to `tolerance`.
  pub fn is_inside(&self, rect: &Rect<T>, tolerance: T) -> bool {
    let (disk, rect) = (self.bounding_box(), rect.bounding_box());
    disk.min.x >= rect.min.x - tolerance && disk.max.x <= rect.max.x + tolerance &&
    disk.min.y >= rect.min.y - tolerance && disk.max.y <= rect.max.y + tolerance
  }

  /// Distance between the two centers.
  pub fn center_distance(&self, other: &Self) -> T {
    (self.xy - other.xy).length()
  }
}

impl<T: Float> BoundingBox<T> for Circle<T> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    Box2D::new(
      self.xy - V2::new(self.r, self.r),
      self.xy + V2::new(self.r, self.r)
    )
  }
}
