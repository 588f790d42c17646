//! Rasterization of a packing: rectangle outlines and anti-aliased disks.

use {
  crate::{
    error::Result,
    geometry::{Circle, Rect, WorldSpace},
    solver::Packing
  },
  euclid::{Box2D, Size2D},
  image::{Rgba, RgbaImage},
  std::path::Path
};

mod impl_draw_rgbaimage;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const RECT_OUTLINE: Rgba<u8> = Rgba([96, 96, 96, 255]);
pub const CIRCLE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// `scale` is the number of pixels per world unit.
pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend, scale: f64);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S> {
  pub shape: S,
  pub texture: Rgba<u8>
}

pub trait Textured: Sized {
  fn texture(self, texture: Rgba<u8>) -> Texture<Self> {
    Texture { shape: self, texture }
  }
}
impl Textured for Circle<f64> {}
impl Textured for Rect<f64> {}

// world bounding box to the covered pixels, clipped to the image
fn pixel_box(
  bounding_box: Box2D<f64, WorldSpace>,
  scale: f64,
  (width, height): (u32, u32)
) -> Option<Box2D<u32, PixelSpace>> {
  Box2D::new(bounding_box.min * scale, bounding_box.max * scale)
    .cast_unit()
    .round_out()
    .intersection(&Box2D::from_size(Size2D::new(width as f64, height as f64)))
    .map(|b| b.to_u32())
}

/// Square image of `resolution` pixels per side, the packed square filling it entirely.
pub fn render(packing: &Packing, resolution: u32) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(resolution, resolution, BACKGROUND);
  let scale = resolution as f64 / packing.side;
  packing.rects.iter()
    .for_each(|rect| rect.texture(RECT_OUTLINE).draw(&mut image, scale));
  packing.circles.iter()
    .for_each(|circle| circle.texture(CIRCLE_FILL).draw(&mut image, scale));
  image
}

pub fn save_png(packing: &Packing, resolution: u32, path: impl AsRef<Path>) -> Result<()> {
  render(packing, resolution).save(path)?;
  Ok(())
}
