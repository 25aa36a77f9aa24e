//! Hexring is a spatial index for hexagonal grids made of concentric rings.
//! Every hexagon gets a single integer ID, assigned by walking the grid ring
//! by ring outwards from the center. From that ID alone, you can work out
//! which ring a hexagon is in, where it sits along that ring, and which IDs
//! are its six neighbors. No adjacency table is ever stored.
//!
//! This crate does no rendering. It produces center positions (and a vertex
//! template for one hexagon), which you can feed into whatever drawing
//! library you like.
//!
//! ```
//! use hexring::{GridConfig, HexDirection, HexGrid};
//!
//! let grid = HexGrid::new(GridConfig::new(2)).unwrap();
//! assert_eq!(grid.max_hex_id(), 18);
//! assert_eq!(grid.neighbors_of(0).unwrap(), vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(grid.neighbor(3, HexDirection::Right).unwrap(), Some(12));
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized, and the
//! [hex] module for a description of the indexing scheme.

mod config;
mod grid;
pub mod hex;
mod util;

pub use crate::{
    config::GridConfig,
    grid::{Bounds, HexGrid},
    hex::{HexDirection, HexId, HexIdOutOfRange, RingPosition},
    util::{range::NumRange, unit::Point2},
};
