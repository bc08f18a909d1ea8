//! Tetros is a small library for packing tetromino pieces into the smallest
//! square board it can find. It was built for Tetrapack, a command line tool
//! that reads piece files and prints packed boards.
//!
//! Tetros currently exposes a single packing implementation,
//! [`Packer`][Packer], a depth-first backtracking search. The board starts
//! at the area lower bound for the piece count and grows one cell per side
//! each time a size is proven unsolvable, up to a configurable attempt
//! budget.
//!
//! ## Example
//! ```
//! use tetros::{Packer, Shape};
//!
//! // First, describe your pieces as boolean masks, where `true` marks an
//! // occupied cell.
//! let square = Shape::from_rows(&[
//!     vec![true, true],
//!     vec![true, true],
//! ]).unwrap();
//!
//! // Construct a packer and configure it with your constraints
//! let packer = Packer::new().max_attempts(3);
//!
//! // Compute a solution. Markers in the returned grid are indices into the
//! // shape slice you passed in.
//! let packing = packer.pack(&[square]).unwrap();
//! assert_eq!(packing.grid().size(), 2);
//! ```
//!
//! [Packer]: struct.Packer.html

mod grid;
mod shape;
mod solver;

pub use grid::*;
pub use shape::*;
pub use solver::*;
