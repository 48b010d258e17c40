//! Geometry primitives
//!
//! Pure value types used to place cells in a grid:
//! - [`Coord`]: 1-indexed position (column, row)
//! - [`Size`]: extent or displacement (width, height)
//! - [`Rect`]: inclusive rectangular region

mod coord;
mod rect;
mod size;

pub use coord::{Coord, Point};
pub use rect::Rect;
pub use size::Size;
