//! Feature modules built on top of the table model
//!
//! - Text drawing of grids and tables, used by their `Display` output

pub mod drawing;

pub use drawing::{draw, draw_with, DrawOptions};
