use {
  super::*,
  crate::{
    error::Error,
    geometry::{overlap_area, square, P2}
  },
  anyhow::Result,
  euclid::Size2D,
  itertools::Itertools,
  proptest::prelude::*,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

const TOLERANCE: f64 = 1e-9;

fn rect(x: f64, y: f64, dx: f64, dy: f64) -> Rect<f64> {
  Rect::new(P2::new(x, y), Size2D::new(dx, dy))
}

/// No gaps, no overlaps, every piece able to hold a circle of diameter `d`.
fn assert_tiling(rects: &[Rect<f64>], side: f64, d: f64) {
  let area: f64 = rects.iter().map(|r| r.area()).sum();
  assert!((area - side * side).abs() <= TOLERANCE * side * side, "area {area} != {}", side * side);

  let bounds = square(side);
  for r in rects {
    assert!(r.size.width >= d - TOLERANCE && r.size.height >= d - TOLERANCE, "{r:?} too small");
    assert!(r.origin.x >= -TOLERANCE && r.origin.y >= -TOLERANCE, "{r:?} out of bounds");
    assert!(r.max_x() <= bounds.max_x() + TOLERANCE && r.max_y() <= bounds.max_y() + TOLERANCE, "{r:?} out of bounds");
  }
  for (a, b) in rects.iter().tuple_combinations() {
    assert!(overlap_area(a, b) <= TOLERANCE * side * side, "{a:?} overlaps {b:?}");
  }
}

fn assert_circles(rects: &[Rect<f64>], circles: &[Circle<f64>], r: f64) {
  assert_eq!(rects.len(), circles.len());
  for (rect, circle) in rects.iter().zip(circles) {
    assert_eq!(circle.r, r);
    assert!(circle.is_inside(rect, TOLERANCE), "{circle:?} not inside {rect:?}");
  }
  for (a, b) in circles.iter().tuple_combinations() {
    assert!(a.center_distance(b) >= 2.0 * r - TOLERANCE, "{a:?} overlaps {b:?}");
  }
}

#[test] fn split_covers_parent() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let parent = rect(1.0, 2.0, 9.0, 5.0);
  for _ in 0..100 {
    let (a, b) = split_rect(parent, 2.0, 0.3, &mut rng)?;
    assert_eq!(a.origin, parent.origin);
    assert!((a.area() + b.area() - parent.area()).abs() < TOLERANCE);
    assert_eq!(overlap_area(&a, &b), 0.0);
    if a.size.height == parent.size.height {
      // x split
      assert!(a.size.width >= 2.0 && b.size.width >= 2.0);
      assert_eq!(b.origin, P2::new(a.max_x(), a.origin.y));
    } else {
      assert!(a.size.height >= 2.0 && b.size.height >= 2.0);
      assert_eq!(a.size.width, parent.size.width);
      assert_eq!(b.origin, P2::new(a.origin.x, a.max_y()));
    }
  }
  Ok(())
}

#[test] fn split_forces_the_only_valid_axis() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(1);
  for _ in 0..50 {
    let (a, b) = split_rect(rect(0.0, 0.0, 10.0, 3.0), 2.0, 1.0, &mut rng)?;
    assert_eq!((a.size.height, b.size.height), (3.0, 3.0));
    let (a, b) = split_rect(rect(0.0, 0.0, 3.0, 10.0), 2.0, 1.0, &mut rng)?;
    assert_eq!((a.size.width, b.size.width), (3.0, 3.0));
  }
  Ok(())
}

#[test] fn split_position_follows_sample() {
  let parent = rect(0.0, 0.0, 10.0, 10.0);
  let (a, b) = split::split_at(parent, Axis::X, 2.0, 0.0);
  assert_eq!((a.size.width, b.size.width), (2.0, 8.0));
  let (a, b) = split::split_at(parent, Axis::Y, 2.0, 1.0);
  assert_eq!((a.size.height, b.size.height), (8.0, 2.0));
  let (a, b) = split::split_at(parent, Axis::X, 2.0, 0.5);
  assert_eq!((a.size.width, b.size.width), (5.0, 5.0));
}

#[test] fn split_near_the_ends_keeps_both_halves_large_enough() -> Result<()> {
  use rand::Rng;

  let mut rng = Pcg64::seed_from_u64(0);
  let ts = [0.0, f64::EPSILON, 1.0 - f64::EPSILON, 1.0 - f64::EPSILON / 2.0, 1.0];
  for _ in 0..20_000 {
    let d = rng.gen_range(0.01..5.0);
    let w = rng.gen_range(2.0 * d..200.0);
    for t in ts {
      for axis in [Axis::X, Axis::Y] {
        let (a, b) = split::split_at(rect(0.0, 0.0, w, w), axis, d, t);
        let (la, lb) = match axis {
          Axis::X => (a.size.width, b.size.width),
          Axis::Y => (a.size.height, b.size.height)
        };
        assert!(la >= d && lb >= d, "w = {w}, d = {d}, t = {t}: {la} + {lb}");
        place_circle(&b, d, &mut rng)?;
      }
    }
  }
  Ok(())
}

#[test] fn split_rejects_small_rect() {
  let mut rng = Pcg64::seed_from_u64(0);
  let small = rect(0.0, 0.0, 3.9, 3.9);
  assert!(matches!(
    split_rect(small, 2.0, 0.5, &mut rng),
    Err(Error::InvalidSplit { rect }) if rect == small
  ));
}

#[test] fn single_circle_takes_whole_square() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let rects = find_tight_partition(1, 1.0, 10.0, &mut rng)?;
  assert_eq!(rects, vec![square(10.0)]);

  let circles = place_circles(&rects, 1.0, &mut rng)?;
  assert_circles(&rects, &circles, 1.0);
  Ok(())
}

#[test] fn four_circles_in_small_square() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(7);
  let packing = pack(&PackingConfig::new(4, 1.0, 10.0), &mut rng)?;
  assert!(packing.is_complete());
  assert_eq!(packing.rects.len(), 4);
  assert_tiling(&packing.rects, 10.0, 2.0);
  assert_circles(&packing.rects, &packing.circles, 1.0);
  Ok(())
}

#[test] fn many_circles() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let packing = pack(&PackingConfig::new(200, 1.0, 100.0), &mut rng)?;
  assert!(packing.is_complete());
  assert!(packing.sigma > 0.0);
  assert_tiling(&packing.rects, 100.0, 2.0);
  assert_circles(&packing.rects, &packing.circles, 1.0);
  Ok(())
}

#[test] fn overfull_square_is_reported_incomplete() -> Result<()> {
  // at most (10 / 2)^2 pieces of at least 2 x 2
  let mut rng = Pcg64::seed_from_u64(0);
  let config = PackingConfig::new(100, 1.0, 10.0);
  let packing = pack(&config, &mut rng)?;
  assert!(!packing.is_complete());
  assert!(packing.rects.len() < 100);
  assert!(packing.circles.is_empty());
  assert_tiling(&packing.rects, 10.0, 2.0);
  Ok(())
}

#[test] fn square_smaller_than_circle() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let packing = pack(&PackingConfig::new(1, 1.0, 1.5), &mut rng)?;
  assert!(!packing.is_complete());
  assert!(packing.rects.is_empty());
  Ok(())
}

#[test] fn search_is_reproducible() -> Result<()> {
  let run = |seed| -> Result<Tuning> {
    Ok(SigmaSearch::default().run(300, 1.0, 80.0, &mut Pcg64::seed_from_u64(seed))?)
  };
  let (a, b) = (run(11)?, run(11)?);
  assert_eq!(a.rects.len(), b.rects.len());
  assert_eq!(a.sigma, b.sigma);
  assert_eq!(a.rects, b.rects);
  Ok(())
}

#[test] fn search_respects_iteration_limit() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let tuning = SigmaSearch::default()
    .with_max_iterations(5)
    .run(50, 1.0, 10.0, &mut rng)?;
  assert_eq!(tuning.iterations, 5);

  let tuning = SigmaSearch::default().run(50, 1.0, 10.0, &mut rng)?;
  assert!(tuning.iterations > 5 && tuning.iterations <= 256);
  Ok(())
}

/// No float strictly between the bounds, or the bounds are within `eps`.
fn converged((sigma_l, sigma_r): (f64, f64), eps: f64) -> bool {
  let mid = (sigma_l + sigma_r) / 2.0;
  sigma_r - sigma_l <= eps || mid <= sigma_l || mid >= sigma_r
}

#[test] fn search_converges_within_eps() -> Result<()> {
  let search = SigmaSearch::default();

  // never reaches 50 pieces: upper bound shrinks towards zero
  let mut rng = Pcg64::seed_from_u64(0);
  let tuning = search.run(50, 1.0, 10.0, &mut rng)?;
  assert!(tuning.iterations < search.max_iterations);
  assert_eq!(tuning.bracket.0, 0.0);
  assert!(tuning.bracket.1 - tuning.bracket.0 <= search.eps, "{:?}", tuning.bracket);

  // always succeeds: lower bound climbs until the bounds are adjacent floats
  let tuning = search.run(1, 1.0, 10.0, &mut rng)?;
  assert!(tuning.iterations < search.max_iterations);
  assert!(converged(tuning.bracket, search.eps), "{:?}", tuning.bracket);
  assert_eq!(tuning.sigma, tuning.bracket.0);

  let tuning = search.run(200, 1.0, 40.0, &mut rng)?;
  assert!(tuning.iterations < search.max_iterations);
  assert!(converged(tuning.bracket, search.eps), "{:?}", tuning.bracket);
  Ok(())
}

#[test] fn exhausted_partition_is_unsplittable() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(5);
  let rects = partition(1000, 1.0, 20.0, 1e18, &mut rng)?;
  assert!(rects.len() < 1000);
  assert!(rects.iter().all(|r| !geometry::can_split(r, 2.0)));
  assert_tiling(&rects, 20.0, 2.0);
  Ok(())
}

#[test] fn placement_on_exact_fit_is_centered() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let center = place_circle(&rect(3.0, 4.0, 2.0, 2.0), 2.0, &mut rng)?;
  assert_eq!(center, P2::new(4.0, 5.0));
  assert!(matches!(
    place_circle(&rect(0.0, 0.0, 1.0, 5.0), 2.0, &mut rng),
    Err(Error::CircleDoesNotFit { .. })
  ));
  Ok(())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test] fn partition_tiles_the_square(
    n in 1usize..80,
    r in 0.5f64..2.0,
    side in 4.0f64..60.0,
    sigma in 0.0f64..5.0,
    seed in any::<u64>()
  ) {
    prop_assume!(side >= 2.0 * r);
    let mut rng = Pcg64::seed_from_u64(seed);
    let rects = partition(n, r, side, sigma, &mut rng).unwrap();
    prop_assert!(rects.len() <= n);
    if rects.len() < n {
      prop_assert!(rects.iter().all(|rect| !geometry::can_split(rect, 2.0 * r)));
    }
    assert_tiling(&rects, side, 2.0 * r);

    let circles = place_circles(&rects, r, &mut rng).unwrap();
    assert_circles(&rects, &circles, r);
  }
}
