//! Core table model
//!
//! This module contains the neutral table representation:
//! - `geometry`: coordinates, sizes and rects
//! - `cell`: styled cells with a user-defined content
//! - `grid`: the spanning grid engine (insert, merge, expand, fill)
//! - `table`: styled tables with row/column views

pub mod cell;
pub mod geometry;
pub mod grid;
pub mod nature;
pub mod styled;
pub mod table;

// Re-export main types
pub use cell::{Cell, Content};
pub use geometry::{Coord, Point, Rect, Size};
pub use grid::{Grid, Rows};
pub use nature::Nature;
pub use styled::{styles_from, Styled, Styles};
pub use table::{Axis, CellOptions, Table, View, ViewMut};
