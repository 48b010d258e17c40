//! Styled table with row and column views
//!
//! A [`Table`] wraps a [`Grid`] with table-level styles, a default nature
//! and lazily created row/column views. Parsers build tables row by row (or
//! column by column) through [`ViewMut::insert_cell_with`]; builders walk
//! the cells with [`Table::iter_rows`] or the views' owned/caught cells.
//!
//! # Example
//!
//! ```
//! use tablegrid::{CellOptions, Table};
//!
//! let mut table = Table::new();
//! let mut row = table.row_mut(1);
//! row.insert_cell("red".to_string()).unwrap();
//! row.insert_cell_with("pink".to_string(), CellOptions::span(2, 1)).unwrap();
//! table.row_mut(2).insert_cell("blue".to_string()).unwrap();
//!
//! let row1: Vec<_> = table.row(1).owned_cells().into_iter().map(|c| c.content.as_str()).collect();
//! assert_eq!(row1, ["red", "pink"]);
//! assert_eq!(table.bounding_box().unwrap().to_string(), "A1:C2");
//! ```

mod view;


use std::collections::BTreeMap;
use std::fmt;

use super::cell::{Cell, Content};
use super::geometry::{Coord, Point, Rect, Size};
use super::grid::{Grid, Rows};
use super::nature::Nature;
use super::styled::{Styled, Styles};
use crate::utils::error::TableResult;

pub use view::{Axis, CellOptions, View, ViewMut};
use view::ViewState;

/// Table made of a grid, styles, a nature and row/column views
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table<T> {
    grid: Grid<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    styles: Styles,
    #[cfg_attr(feature = "serde", serde(default))]
    nature: Nature,
    #[cfg_attr(feature = "serde", serde(default))]
    rows: BTreeMap<u32, ViewState>,
    #[cfg_attr(feature = "serde", serde(default))]
    cols: BTreeMap<u32, ViewState>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            grid: Grid::new(),
            styles: Styles::new(),
            nature: Nature::Body,
            rows: BTreeMap::new(),
            cols: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    /// Create an empty body table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from cells already placed at their final position
    pub fn from_cells(cells: impl IntoIterator<Item = Cell<T>>) -> TableResult<Self> {
        Ok(Table {
            grid: Grid::from_cells(cells)?,
            ..Default::default()
        })
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the default nature, inherited by views materialized afterwards
    pub fn with_nature(mut self, nature: impl Into<Nature>) -> Self {
        self.nature = nature.into();
        self
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// `None` for an empty table
    pub fn bounding_box(&self) -> Option<Rect> {
        self.grid.bounding_box()
    }

    /// Cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell<T>> {
        self.grid.iter()
    }

    /// Cells grouped by the row where they start
    pub fn iter_rows(&self) -> Rows<'_, T> {
        self.grid.iter_rows()
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// View of the row `index`, without materializing it
    pub fn row(&self, index: u32) -> View<'_, T> {
        self.view(Axis::Row, index)
    }

    /// View of the column `index`, without materializing it
    pub fn col(&self, index: u32) -> View<'_, T> {
        self.view(Axis::Col, index)
    }

    /// Mutable view of the row `index`, created on first access
    pub fn row_mut(&mut self, index: u32) -> ViewMut<'_, T> {
        self.view_mut(Axis::Row, index)
    }

    /// Mutable view of the column `index`, created on first access
    pub fn col_mut(&mut self, index: u32) -> ViewMut<'_, T> {
        self.view_mut(Axis::Col, index)
    }

    /// Number of rows: the bounding box extent or the last materialized row
    pub fn row_count(&self) -> u32 {
        self.count(Axis::Row)
    }

    pub fn col_count(&self) -> u32 {
        self.count(Axis::Col)
    }

    /// Views of rows `1..=row_count()`
    pub fn rows(&self) -> impl Iterator<Item = View<'_, T>> + '_ {
        (1..=self.row_count()).map(move |index| self.row(index))
    }

    /// Views of columns `1..=col_count()`
    pub fn cols(&self) -> impl Iterator<Item = View<'_, T>> + '_ {
        (1..=self.col_count()).map(move |index| self.col(index))
    }

    fn views(&self, axis: Axis) -> &BTreeMap<u32, ViewState> {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }

    fn view(&self, axis: Axis, index: u32) -> View<'_, T> {
        View {
            grid: &self.grid,
            state: self.views(axis).get(&index),
            default_nature: &self.nature,
            axis,
            index,
        }
    }

    fn view_mut(&mut self, axis: Axis, index: u32) -> ViewMut<'_, T> {
        let nature = &self.nature;
        let views = match axis {
            Axis::Row => &mut self.rows,
            Axis::Col => &mut self.cols,
        };
        let state = views
            .entry(index)
            .or_insert_with(|| ViewState::new(nature.clone()));
        ViewMut {
            grid: &mut self.grid,
            state,
            axis,
            index,
        }
    }

    fn count(&self, axis: Axis) -> u32 {
        let extent = self
            .grid
            .bounding_box()
            .map_or(0, |bb| axis.end(&bb));
        let materialized = self.views(axis).keys().next_back().copied().unwrap_or(0);
        extent.max(materialized)
    }

    // ========================================================================
    // Grid operations
    // ========================================================================

    /// Insert `cell` with its top-left corner at `coord`
    pub fn insert(&mut self, coord: Coord, cell: Cell<T>) -> TableResult<()> {
        self.grid.insert(coord, cell)
    }

    pub fn remove(&mut self, coord: Coord) -> TableResult<Cell<T>> {
        self.grid.remove(coord)
    }

    /// Cell whose top-left corner is exactly `coord`
    pub fn get(&self, coord: Coord) -> Option<&Cell<T>> {
        self.grid.get(coord)
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell<T>> {
        self.grid.get_mut(coord)
    }

    /// Cell covering `point`
    pub fn find<P: Point>(&self, point: P) -> Option<&Cell<T>> {
        self.grid.find(point)
    }

    pub fn contains<P: Point>(&self, point: P) -> bool {
        self.grid.contains(point)
    }

    pub fn merge(&mut self, start: Coord, end: Coord) -> TableResult<&Cell<T>>
    where
        T: Content,
    {
        self.grid.merge(start, end)
    }

    pub fn merge_with<F>(&mut self, start: Coord, end: Coord, appender: F) -> TableResult<&Cell<T>>
    where
        F: FnMut(T, T) -> T,
    {
        self.grid.merge_with(start, end, appender)
    }

    pub fn expand(&mut self, coord: Coord, delta: Size) -> TableResult<&Cell<T>>
    where
        T: Content,
    {
        self.grid.expand(coord, delta)
    }

    pub fn expand_with<F>(&mut self, coord: Coord, delta: Size, appender: F) -> TableResult<&Cell<T>>
    where
        F: FnMut(T, T) -> T,
    {
        self.grid.expand_with(coord, delta, appender)
    }

    /// Fill the holes of the bounding box with cells of the table's nature
    pub fn fill_missing<F>(&mut self, factory: F) -> usize
    where
        F: FnMut() -> T,
    {
        self.grid.fill_missing(&self.nature, factory)
    }

    /// Fill the holes of the bounding box with copies of `value`
    pub fn fill_missing_value(&mut self, value: T) -> usize
    where
        T: Clone,
    {
        self.fill_missing(|| value.clone())
    }

    /// Fill the holes of `region`, with the table's nature unless `nature` is given
    pub fn fill_missing_in<F>(&mut self, region: Rect, factory: F, nature: Option<Nature>) -> usize
    where
        F: FnMut() -> T,
    {
        let nature = nature.unwrap_or_else(|| self.nature.clone());
        self.grid.fill_missing_in(region, &nature, factory)
    }
}

impl<T> Styled for Table<T> {
    fn styles(&self) -> &Styles {
        &self.styles
    }

    fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    fn nature(&self) -> &Nature {
        &self.nature
    }

    fn set_nature(&mut self, nature: Nature) {
        self.nature = nature;
    }
}

impl<T: fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
