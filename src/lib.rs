//! Random packing of `N` equal, non-overlapping circles into a square.
//!
//! The square is recursively split into rectangles, each large enough to hold one circle,
//! and then a circle is put at a random position inside every rectangle. Circles never
//! overlap, simply because the rectangles don't.
//!
//! The split positions are drawn from a normal distribution centered on the middle of the
//! valid range, truncated to it. Its spread (`sigma`) trades randomness for capacity: wide
//! spread gives irregular layouts, but leaves small unsplittable fragments behind.
//! [`solver::SigmaSearch`] binary searches the widest spread which still reaches `N` pieces.
//!
//! # Basic usage
//! ```
//! # use {
//! #   circle_packing::{config::PackingConfig, error::Result, solver},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! // 4 circles of radius 1 inside a 10x10 square
//! let packing = solver::pack(&PackingConfig::new(4, 1.0, 10.0), &mut rng)?;
//!
//! assert!(packing.is_complete());
//! for (rect, circle) in packing.rects.iter().zip(&packing.circles) {
//!   println!("{:?} holds a circle at {:?}", rect, circle.xy);
//! }
//! #   Ok(())
//! # }
//! ```
//! Running out of room is not an error: [`solver::Packing::is_complete`] is `false`, and
//! `rects` holds the largest partition that was found.
//!
//! A note on the minimum rectangle size: the splitter is given the circle *diameter* `D` as
//! the minimum piece size, and only splits rectangles with a side of at least `2D`. So every
//! piece holds a circle, and a piece is final once both of its sides are below `4r`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod sampler;
pub mod solver;
pub mod config;
pub mod output;
pub mod util;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
