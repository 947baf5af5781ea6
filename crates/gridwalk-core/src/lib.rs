//! **gridwalk-core**: rectangular grids and integer geometry.
//!
//! This crate provides the foundational types used by the *gridwalk*
//! search engine: [`Point`] and [`Direction`] geometry, the half-open
//! [`Range`] rectangle, the [`Adjacency`] neighbor strategy and the dense
//! [`Grid`] container.

pub mod adjacency;
pub mod error;
pub mod geom;
pub mod grid;

pub use adjacency::Adjacency;
pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::{Grid, Ray};
