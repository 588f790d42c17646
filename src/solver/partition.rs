use {
  super::split::Splitter,
  crate::{
    error::Result,
    geometry::{self, Rect}
  },
  rand::Rng,
  std::{cmp::Ordering, collections::BinaryHeap}
};

/// Heap entry, larger rects (in terms of `max(width, height)`) compare greater.
#[derive(Debug, Copy, Clone)]
struct ByMaxSide(Rect<f64>);

impl PartialEq for ByMaxSide {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for ByMaxSide {}

impl PartialOrd for ByMaxSide {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ByMaxSide {
  fn cmp(&self, other: &Self) -> Ordering {
    geometry::max_side(&self.0).total_cmp(&geometry::max_side(&other.0))
  }
}

/// Rectangles produced so far: those that may still be split, and those that may not.
struct Frontier {
  d: f64,
  eligible: BinaryHeap<ByMaxSide>,
  ineligible: Vec<Rect<f64>>,
}

impl Frontier {
  fn new(d: f64) -> Self {
    Self { d, eligible: BinaryHeap::new(), ineligible: vec![] }
  }

  fn push(&mut self, rect: Rect<f64>) {
    if geometry::can_split(&rect, self.d) {
      self.eligible.push(ByMaxSide(rect));
    } else {
      self.ineligible.push(rect);
    }
  }

  fn pop_largest(&mut self) -> Option<Rect<f64>> {
    self.eligible.pop().map(|ByMaxSide(rect)| rect)
  }

  fn len(&self) -> usize {
    self.eligible.len() + self.ineligible.len()
  }

  /// Largest splittable rects first, then the rest in insertion order.
  fn into_vec(self) -> Vec<Rect<f64>> {
    self.eligible.into_sorted_vec().into_iter()
      .rev()
      .map(|ByMaxSide(rect)| rect)
      .chain(self.ineligible)
      .collect()
  }
}

/// Try to split the `side` x `side` square into `n` non-overlapping rectangles, each able to
/// hold a circle of radius `r`, by repeatedly splitting the largest splittable rectangle.
///
/// `sigma` controls the spread of the split positions. Returns fewer than `n` rectangles if
/// none of them can be split any further before reaching `n`.
pub fn partition<R: Rng + ?Sized>(
  n: usize,
  r: f64,
  side: f64,
  sigma: f64,
  rng: &mut R
) -> Result<Vec<Rect<f64>>> {
  let splitter = Splitter::new(2.0 * r, sigma)?;
  let mut frontier = Frontier::new(splitter.d());
  frontier.push(geometry::square(side));

  while frontier.len() < n {
    let rect = match frontier.pop_largest() {
      Some(rect) => rect,
      None => break
    };
    let (a, b) = splitter.split(rect, rng)?;
    frontier.push(a);
    frontier.push(b);
  }

  Ok(frontier.into_vec())
}
