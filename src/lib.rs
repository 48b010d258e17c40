//! # tablegrid
//!
//! Neutral table model for converting tables between document formats
//! (word-processor tables, CALS, Formex4).
//!
//! ## Features
//!
//! - **Spanning Grid**: cells spanning several rows/columns, never overlapping
//! - **Deterministic Order**: row-major iteration, grouped by row
//! - **Merge & Expand**: combine exactly covered regions into one cell
//! - **Gap Filling**: turn a sparse grid into a fully covered rectangle
//! - **Row/Column Views**: incremental insertion with owned/caught cells
//! - **Serde Support**: optional `serde` feature for every model type
//!
//! ## Usage Examples
//!
//! ### Building a Table
//!
//! ```rust
//! use tablegrid::{CellOptions, Coord, Nature, Styled, Table};
//!
//! let mut table = Table::new().with_nature(Nature::Header);
//! let mut row = table.row_mut(1);
//! row.insert_cell_with("Name".to_string(), CellOptions::span(1, 2)).unwrap();
//! row.insert_cell_with("Contact".to_string(), CellOptions::span(2, 1)).unwrap();
//!
//! let mut row = table.row_mut(2);
//! row.insert_cell("Mail".to_string()).unwrap();
//! row.insert_cell("Phone".to_string()).unwrap();
//!
//! assert_eq!(table.bounding_box().unwrap().to_string(), "A1:C2");
//! assert_eq!(table.get(Coord::new(2, 2)).unwrap().content, "Mail");
//! assert!(table.iter_cells().all(|cell| cell.nature().is_header()));
//! ```
//!
//! ### Grid Operations
//!
//! ```rust
//! use tablegrid::{Cell, Coord, Grid, Nature};
//!
//! let mut grid = Grid::new();
//! grid.insert(Coord::new(1, 1), Cell::new("a".to_string())).unwrap();
//! grid.insert(Coord::new(2, 1), Cell::new("b".to_string())).unwrap();
//! grid.insert(Coord::new(2, 2), Cell::new("d".to_string())).unwrap();
//!
//! assert_eq!(grid.fill_missing(&Nature::Body, String::new), 1);
//! let merged = grid.merge(Coord::new(1, 1), Coord::new(2, 1)).unwrap();
//! assert_eq!(merged.content, "ab");
//! assert_eq!(merged.rect().to_string(), "A1:B1");
//! ```

/// Core table model
pub mod core;

/// Feature modules built on the model
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the model
pub use core::{
    styles_from, Axis, Cell, CellOptions, Content, Coord, Grid, Nature, Point, Rect, Rows, Size,
    Styled, Styles, Table, View, ViewMut,
};

// Re-export features
pub use features::drawing;
pub use features::{draw, draw_with, DrawOptions};

// Re-export utilities
pub use utils::alphabet::{alphabet_to_int, int_to_alphabet};
pub use utils::error::{TableError, TableResult};
