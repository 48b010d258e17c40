//! Row and column views of a table

use lazy_static::lazy_static;
use log::trace;

use crate::core::cell::Cell;
use crate::core::geometry::{Coord, Rect};
use crate::core::grid::Grid;
use crate::core::nature::Nature;
use crate::core::styled::{Styled, Styles};
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    static ref EMPTY_STYLES: Styles = Styles::new();
}

/// Direction of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    /// First index of `rect` along this axis (top row or left column)
    fn start(self, rect: &Rect) -> u32 {
        match self {
            Axis::Row => rect.top_left().y(),
            Axis::Col => rect.top_left().x(),
        }
    }

    /// Last index of `rect` along this axis
    pub(crate) fn end(self, rect: &Rect) -> u32 {
        match self {
            Axis::Row => rect.bottom_right().y(),
            Axis::Col => rect.bottom_right().x(),
        }
    }

    /// Point at `pos` along the view `index`
    fn point(self, index: u32, pos: u32) -> (u32, u32) {
        match self {
            Axis::Row => (pos, index),
            Axis::Col => (index, pos),
        }
    }

    /// Cursor advance after inserting a `width` × `height` cell
    fn advance(self, width: u32, height: u32) -> u32 {
        match self {
            Axis::Row => width,
            Axis::Col => height,
        }
    }

    /// Error for a position beyond the last representable coordinate
    fn out_of_range(self, index: u32, pos: u32, step: u32) -> TableError {
        let pos = i64::from(pos) + i64::from(step);
        let (x, y) = match self {
            Axis::Row => (pos, i64::from(index)),
            Axis::Col => (i64::from(index), pos),
        };
        TableError::InvalidCoordinate { x, y }
    }
}

/// Cached state of a materialized view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct ViewState {
    nature: Nature,
    styles: Styles,
    /// Next position to try along the cross axis
    cursor: u32,
}

impl ViewState {
    pub(crate) fn new(nature: Nature) -> Self {
        ViewState {
            nature,
            styles: Styles::new(),
            cursor: 1,
        }
    }
}

/// Options of [`ViewMut::insert_cell_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    /// Columns spanned
    pub width: u32,
    /// Rows spanned
    pub height: u32,
    pub styles: Styles,
    /// Nature of the cell, the view's nature when `None`
    pub nature: Option<Nature>,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            styles: Styles::new(),
            nature: None,
        }
    }
}

impl CellOptions {
    /// Spanning cell
    pub fn span(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn with_nature(mut self, nature: impl Into<Nature>) -> Self {
        self.nature = Some(nature.into());
        self
    }
}

fn owned<'a, T>(grid: &'a Grid<T>, axis: Axis, index: u32) -> Vec<&'a Cell<T>> {
    grid.iter()
        .filter(|cell| axis.start(&cell.rect()) == index)
        .collect()
}

fn caught<'a, T>(grid: &'a Grid<T>, axis: Axis, index: u32) -> Vec<&'a Cell<T>> {
    grid.iter()
        .filter(|cell| {
            let rect = cell.rect();
            axis.start(&rect) <= index && index <= axis.end(&rect)
        })
        .collect()
}

/// Read-only view of a row or a column
///
/// A view that was never materialized with `row_mut`/`col_mut` reports the
/// table's nature and no styles.
#[derive(Debug)]
pub struct View<'a, T> {
    pub(crate) grid: &'a Grid<T>,
    pub(crate) state: Option<&'a ViewState>,
    pub(crate) default_nature: &'a Nature,
    pub(crate) axis: Axis,
    pub(crate) index: u32,
}

impl<'a, T> Clone for View<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for View<'a, T> {}

impl<'a, T> View<'a, T> {
    /// 1-based row or column index
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn nature(&self) -> &'a Nature {
        self.state.map_or(self.default_nature, |state| &state.nature)
    }

    pub fn styles(&self) -> &'a Styles {
        match self.state {
            Some(state) => &state.styles,
            None => &EMPTY_STYLES,
        }
    }

    pub fn style(&self, key: &str) -> Option<&'a str> {
        self.styles().get(key).map(String::as_str)
    }

    /// Cells whose top-left corner lies in this row/column
    pub fn owned_cells(&self) -> Vec<&'a Cell<T>> {
        owned(self.grid, self.axis, self.index)
    }

    /// Owned cells plus the cells spanning into this row/column
    pub fn caught_cells(&self) -> Vec<&'a Cell<T>> {
        caught(self.grid, self.axis, self.index)
    }
}

/// Mutable view of a row or a column, used to build a table incrementally
pub struct ViewMut<'a, T> {
    pub(crate) grid: &'a mut Grid<T>,
    pub(crate) state: &'a mut ViewState,
    pub(crate) axis: Axis,
    pub(crate) index: u32,
}

impl<'a, T> ViewMut<'a, T> {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn owned_cells(&self) -> Vec<&Cell<T>> {
        owned(self.grid, self.axis, self.index)
    }

    pub fn caught_cells(&self) -> Vec<&Cell<T>> {
        caught(self.grid, self.axis, self.index)
    }

    /// Insert a 1×1 cell at the next free position
    pub fn insert_cell(&mut self, content: T) -> TableResult<Coord> {
        self.insert_cell_with(content, CellOptions::default())
    }

    /// Insert a cell at the next free position and return its coordinate
    ///
    /// The search starts at the cursor and skips positions covered by cells
    /// spanning into this view. On success the cursor moves past the new
    /// cell: by its width for a row, by its height for a column. The cell
    /// inherits the view's nature unless `options` gives one.
    pub fn insert_cell_with(&mut self, content: T, options: CellOptions) -> TableResult<Coord> {
        let CellOptions {
            width,
            height,
            styles,
            nature,
        } = options;
        let mut pos = self.state.cursor.max(1);
        while self.grid.contains(self.axis.point(self.index, pos)) {
            pos = pos
                .checked_add(1)
                .ok_or_else(|| self.axis.out_of_range(self.index, pos, 1))?;
        }
        let (x, y) = self.axis.point(self.index, pos);
        let coord = Coord::try_new(i64::from(x), i64::from(y))?;
        let nature = nature.unwrap_or_else(|| self.state.nature.clone());
        let cell = Cell::new(content)
            .with_styles(styles)
            .with_nature(nature)
            .with_span(width, height)?;
        let step = self.axis.advance(width, height);
        let next = pos
            .checked_add(step)
            .ok_or_else(|| self.axis.out_of_range(self.index, pos, step))?;
        self.grid.insert(coord, cell)?;
        self.state.cursor = next;
        trace!("{:?} {}: cursor at {}", self.axis, self.index, self.state.cursor);
        Ok(coord)
    }
}

impl<'a, T> Styled for ViewMut<'a, T> {
    fn styles(&self) -> &Styles {
        &self.state.styles
    }

    fn styles_mut(&mut self) -> &mut Styles {
        &mut self.state.styles
    }

    fn nature(&self) -> &Nature {
        &self.state.nature
    }

    fn set_nature(&mut self, nature: Nature) {
        self.state.nature = nature;
    }
}
