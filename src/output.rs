//! Flat coordinate dumps.
//!
//! Both lists start with the header line `N r L`, followed by one line per item:
//! `x y dx dy` for rectangles (top-left corner, width, height), `cx cy` for circle centers.

use {
  crate::{
    config::OutputConfig,
    error::Result,
    geometry::{Circle, Rect},
    solver::Packing
  },
  std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{BufWriter, Write},
    path::Path
  },
  tracing::info
};

pub const RECTS_BANNER: &str =
  "Printing bounding rectangles .... (top-left corner-x, top-left corner-y, width, height)";
pub const CIRCLES_BANNER: &str =
  "Printing center coordinates of circles .... (center-x, center-y)";
pub const RECTS_WRITTEN: &str =
  "Printed bounding rectangles to file .... (top-left corner-x, top-left corner-y, width, height)";
pub const CIRCLES_WRITTEN: &str =
  "Printed center coordinates of circles to file .... (center-x, center-y)";
pub const SOLUTION_FOUND: &str = "Found a solution!";
pub const NO_SOLUTION: &str = "Couldn't find a solution. Try increasing the size of the square.";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Header {
  pub n: usize,
  pub radius: f64,
  pub side: f64,
}

impl Display for Header {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {}", self.n, self.radius, self.side)
  }
}

impl From<&Packing> for Header {
  fn from(packing: &Packing) -> Self {
    Self { n: packing.n, radius: packing.radius, side: packing.side }
  }
}

fn write_rect_rows(w: &mut impl Write, rects: &[Rect<f64>]) -> Result<()> {
  for rect in rects {
    writeln!(w, "{} {} {} {}", rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)?;
  }
  Ok(())
}

fn write_circle_rows(w: &mut impl Write, circles: &[Circle<f64>]) -> Result<()> {
  for circle in circles {
    writeln!(w, "{} {}", circle.xy.x, circle.xy.y)?;
  }
  Ok(())
}

pub fn write_rects(w: &mut impl Write, header: Header, rects: &[Rect<f64>]) -> Result<()> {
  writeln!(w, "{header}")?;
  write_rect_rows(w, rects)
}

pub fn write_circles(w: &mut impl Write, header: Header, circles: &[Circle<f64>]) -> Result<()> {
  writeln!(w, "{header}")?;
  write_circle_rows(w, circles)
}

fn write_file(path: &Path, write: impl FnOnce(&mut BufWriter<File>) -> Result<()>) -> Result<()> {
  use humansize::{FileSize, file_size_opts as options};

  let mut file = BufWriter::new(File::create(path)?);
  write(&mut file)?;
  file.flush()?;
  let len = std::fs::metadata(path)?.len();
  info!(
    path = %path.display(),
    size = %len.file_size(options::BINARY).unwrap_or_else(|_| format!("{len} B")),
    "written"
  );
  Ok(())
}

/// Mirror a complete packing to `console` and to the configured files.
pub fn emit(packing: &Packing, config: &OutputConfig, console: &mut impl Write) -> Result<()> {
  let header = Header::from(packing);

  if config.rects_console {
    writeln!(console, "{RECTS_BANNER}")?;
    write_rect_rows(console, &packing.rects)?;
  }
  if config.circles_console {
    writeln!(console, "{CIRCLES_BANNER}")?;
    write_circle_rows(console, &packing.circles)?;
  }
  if let Some(path) = &config.rects_file {
    write_file(path, |w| write_rects(w, header, &packing.rects))?;
    writeln!(console, "{RECTS_WRITTEN}")?;
  }
  if let Some(path) = &config.circles_file {
    write_file(path, |w| write_circles(w, header, &packing.circles))?;
    writeln!(console, "{CIRCLES_WRITTEN}")?;
  }
  Ok(())
}

/// Announce the outcome on `console`, and [`emit`] the packing only if it is complete.
/// Returns whether it was.
pub fn report(packing: &Packing, config: &OutputConfig, console: &mut impl Write) -> Result<bool> {
  if !packing.is_complete() {
    writeln!(console, "{NO_SOLUTION}")?;
    return Ok(false);
  }
  writeln!(console, "{SOLUTION_FOUND}")?;
  emit(packing, config, console)?;
  Ok(true)
}
