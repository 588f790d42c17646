use {
  crate::{
    error::{Error, Result},
    solver::SigmaSearch
  },
  std::path::PathBuf
};

/// What to pack: `n` circles of radius `radius` into a `side` x `side` square.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingConfig {
  pub n: usize,
  pub radius: f64,
  pub side: f64,
  pub search: SigmaSearch,
}

impl PackingConfig {
  pub fn new(n: usize, radius: f64, side: f64) -> Self {
    Self { n, radius, side, search: SigmaSearch::default() }
  }

  pub fn with_search(mut self, search: SigmaSearch) -> Self {
    self.search = search;
    self
  }

  pub fn diameter(&self) -> f64 {
    2.0 * self.radius
  }

  pub fn validate(&self) -> Result<()> {
    if self.n == 0 {
      return Err(Error::InvalidParameter("circle count must be positive".into()));
    }
    if !(self.radius.is_finite() && self.radius > 0.0) {
      return Err(Error::InvalidParameter(format!("radius must be positive and finite, got {}", self.radius)));
    }
    if !(self.side.is_finite() && self.side > 0.0) {
      return Err(Error::InvalidParameter(format!("square side must be positive and finite, got {}", self.side)));
    }
    self.search.validate()
  }
}

/// Where the rectangle and circle lists go. `None` disables the file sink.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
  pub rects_console: bool,
  pub circles_console: bool,
  pub rects_file: Option<PathBuf>,
  pub circles_file: Option<PathBuf>,
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      rects_console: true,
      circles_console: true,
      rects_file: Some("output_rects.txt".into()),
      circles_file: Some("output_circles.txt".into()),
    }}}
