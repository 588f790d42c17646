use {
  super::{Draw, Texture, pixel_box},
  crate::geometry::{BoundingBox, Circle, Rect, P2},
  image::{Pixel, Rgba, RgbaImage}
};

impl Draw<RgbaImage> for Texture<Circle<f64>> {
  fn draw(&self, image: &mut RgbaImage, scale: f64) {
    let circle = self.shape;
    let bounding_box = match pixel_box(circle.bounding_box(), scale, image.dimensions()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let pixel_world = P2::new(x as f64 + 0.5, y as f64 + 0.5) / scale;
        let sdf = (pixel_world - circle.xy).length() - circle.r;
        let pixel = image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf * scale, *pixel, self.texture);
      });
  }
}

/// One pixel wide outline.
impl Draw<RgbaImage> for Texture<Rect<f64>> {
  fn draw(&self, image: &mut RgbaImage, scale: f64) {
    let bounding_box = match pixel_box(self.shape.bounding_box(), scale, image.dimensions()) {
      Some(x) if !x.is_empty() => x,
      _ => return
    };
    let (min, max) = (bounding_box.min, bounding_box.max - euclid::Vector2D::new(1, 1));

    for x in bounding_box.x_range() {
      image.put_pixel(x, min.y, self.texture);
      image.put_pixel(x, max.y, self.texture);
    }
    for y in bounding_box.y_range() {
      image.put_pixel(min.x, y, self.texture);
      image.put_pixel(max.x, y, self.texture);
    }
  }
}

/// `sdf` in pixels, negative inside.
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf).clamp(0.0, 1.0); // antialias
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
