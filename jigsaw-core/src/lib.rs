//! Tile-assembly jigsaw solver
//!
//! Reassembles an image from square tiles whose borders line up with their
//! neighbours, then searches the image for a fixed motif.
//!
//! # Overview
//!
//! The pipeline runs leaf to root:
//! - [`Grid`] and the [`Orientation`] cycle: the eight rotations and mirrors of a grid
//! - [`Tile`]: a grid with an id, a current orientation and border comparisons
//! - [`solve`]: backtracking placement of every tile into a [`Layout`]
//! - [`assemble`]: the layout's cropped tiles stitched into one image
//! - [`overlay_motif`]: marks every [`Motif`] instance in any orientation
//!
//! [`JurassicJigsaw`] wraps all of it as a two-part puzzle behind the
//! [`Solver`] trait, and [`SolverInstance`] runs it with timing through
//! [`DynSolver`].
//!
//! # Quick Example
//!
//! ```
//! use jigsaw_core::{DynSolver, JurassicJigsaw, SolverInstance};
//!
//! let input = "Tile 7:\n#####\n#.#.#\n##..#\n#...#\n#####\n";
//! let mut solver = SolverInstance::<JurassicJigsaw>::new("example", input).unwrap();
//!
//! // a single tile is its own four corners
//! assert_eq!(solver.solve(1).unwrap().answer, "2401");
//! // the cropped 3x3 interior keeps two `#` and has no room for a sea monster
//! assert_eq!(solver.solve(2).unwrap().answer, "2");
//! ```
//!
//! # Orientation order and determinism
//!
//! [`solve`] returns the first layout found when cells are filled row-major,
//! tiles are taken in input order and orientations in cycle order. Inputs are
//! expected to have one solution up to the symmetry of the whole image, so the
//! corner ids do not depend on that order; the search itself does not check
//! uniqueness.

mod error;
mod grid;
mod image;
mod instance;
mod layout;
mod motif;
mod parse;
mod puzzle;
mod solver;
mod symmetry;
mod tile;

pub use error::{ParseError, SolveError, SolverError};
pub use grid::Grid;
pub use image::assemble;
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use layout::{Layout, Placement, solve};
pub use motif::{MARKED, MATCHED, Motif, OverlayReport, overlay_motif};
pub use parse::{TileParser, parse_tiles};
pub use puzzle::{Arrangement, JurassicJigsaw, SharedData};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
pub use symmetry::{Orientation, Orientations, Transform};
pub use tile::{Side, Tile, load_tile};
