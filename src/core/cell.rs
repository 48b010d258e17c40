//! Grid cells
//!
//! A [`Cell`] stores a user-defined content together with its styles, its
//! nature and the rect it occupies in a grid. A fresh cell is 1×1 at `A1`;
//! grids and tables move it to its final place on insertion.

use std::cmp::Ordering;
use std::fmt;

use super::geometry::{Coord, Point, Rect, Size};
use super::nature::Nature;
use super::styled::{Styled, Styles};
use crate::utils::error::TableResult;

/// Cell contents that can be concatenated when cells are merged
///
/// Merging folds the absorbed contents left to right, top to bottom with
/// [`Content::concat`]. A custom appender can be given to
/// [`Grid::merge_with`](crate::Grid::merge_with) instead.
pub trait Content {
    fn concat(self, other: Self) -> Self;
}

impl Content for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<U> Content for Vec<U> {
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// `None` is the identity: filled holes do not erase merged text
impl<C: Content> Content for Option<C> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Some(first), Some(second)) => Some(first.concat(second)),
            (first, second) => first.or(second),
        }
    }
}

impl Content for () {
    fn concat(self, _other: Self) -> Self {}
}

/// A single table cell
///
/// The content is never copied by the model: cloning a cell clones the
/// content value itself, so use an `Rc`/`Arc` content type to share one
/// payload between cells or tables.
///
/// Equality is structural. To order cells by position, as a grid iterates
/// them, sort with [`Cell::cmp_rect`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T> {
    /// User-defined payload (text, XML fragment, paragraphs, ...)
    pub content: T,
    styles: Styles,
    nature: Nature,
    rect: Rect,
}

impl<T> Cell<T> {
    /// Create a 1×1 body cell at `A1`
    pub fn new(content: T) -> Self {
        Cell {
            content,
            styles: Styles::new(),
            nature: Nature::Body,
            rect: Rect::default(),
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
        self.nature = nature.into();
        self
    }

    /// Set the column/row spanning of the cell
    pub fn with_span(self, width: u32, height: u32) -> TableResult<Self> {
        self.resize(Size::new(i64::from(width), i64::from(height)))
    }

    /// Move the cell to `coord` and/or resize it to `size`
    pub fn transform(mut self, coord: Option<Coord>, size: Option<Size>) -> TableResult<Self> {
        self.rect = self.rect.transform(coord, size)?;
        Ok(self)
    }

    pub fn move_to(self, coord: Coord) -> TableResult<Self> {
        self.transform(Some(coord), None)
    }

    pub fn resize(self, size: Size) -> TableResult<Self> {
        self.transform(None, Some(size))
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Top-left coordinate
    pub fn top_left(&self) -> Coord {
        self.rect.top_left()
    }

    /// Bottom-right coordinate
    pub fn bottom_right(&self) -> Coord {
        self.rect.bottom_right()
    }

    /// Compare two cells by their rect: top row, then left column, then the
    /// bottom-right corner. Contents, styles and natures are ignored.
    ///
    /// ```
    /// use tablegrid::{Cell, Coord};
    ///
    /// let mut cells = vec![
    ///     Cell::new("b").move_to(Coord::new(1, 2)).unwrap(),
    ///     Cell::new("a").move_to(Coord::new(2, 1)).unwrap(),
    /// ];
    /// cells.sort_by(Cell::cmp_rect);
    /// assert_eq!(cells[0].content, "a");
    /// ```
    pub fn cmp_rect(&self, other: &Self) -> Ordering {
        self.rect.cmp(&other.rect)
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Columns spanned
    pub fn width(&self) -> u32 {
        self.rect.width()
    }

    /// Rows spanned
    pub fn height(&self) -> u32 {
        self.rect.height()
    }

    pub fn contains<P: Point>(&self, point: P) -> bool {
        self.rect.contains(point)
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

impl<T: Default> Default for Cell<T> {
    fn default() -> Self {
        Cell::new(T::default())
    }
}

impl<T> Styled for Cell<T> {
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

impl<T: fmt::Display> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styled::styles_from;
    use std::rc::Rc;

    #[test]
    fn test_sort_by_rect() {
        let mut cells = vec![
            Cell::new("blue").move_to(Coord::new(2, 2)).unwrap(),
            Cell::new("pink").with_span(2, 1).unwrap().move_to(Coord::new(2, 1)).unwrap(),
            Cell::new("red").with_span(1, 2).unwrap(),
            Cell::new("wide").with_span(3, 1).unwrap().move_to(Coord::new(2, 1)).unwrap(),
        ];
        cells.sort_by(Cell::cmp_rect);
        let names: Vec<&str> = cells.iter().map(|cell| cell.content).collect();
        assert_eq!(names, vec!["red", "pink", "wide", "blue"]);

        let header = Cell::new("x").with_nature(Nature::Header);
        assert_eq!(header.cmp_rect(&Cell::new("y")), Ordering::Equal);
        assert_ne!(header, Cell::new("y"));
    }

    #[test]
    fn test_new_cell() {
        let cell = Cell::new("c1");
        assert_eq!(cell.top_left(), Coord::new(1, 1));
        assert_eq!(cell.size(), Size::new(1, 1));
        assert_eq!(cell.nature(), &Nature::Body);
        assert!(cell.styles().is_empty());
        assert_eq!(cell.to_string(), "c1");
    }

    #[test]
    fn test_move_keeps_size() {
        let cell = Cell::new("c1").with_span(3, 2).unwrap();
        let moved = cell.move_to(Coord::new(5, 3)).unwrap();
        assert_eq!(moved.top_left(), Coord::new(5, 3));
        assert_eq!(moved.size(), Size::new(3, 2));
        assert_eq!(moved.bottom_right(), Coord::new(7, 4));
        assert!(moved.contains((7, 4)));
        assert!(moved.contains(Coord::new(6, 3)));
        assert!(moved.rect().contains_rect(&"F3:G4".parse().unwrap()));
    }

    #[test]
    fn test_invalid_span() {
        assert!(Cell::new(()).with_span(0, 1).is_err());
    }

    #[test]
    fn test_styles_are_independent() {
        let styles = styles_from([("color", "red")]);
        let mut c1 = Cell::new("a").with_styles(styles.clone());
        let c2 = Cell::new("b").with_styles(styles);
        c1.set_style("color", "blue");
        assert_eq!(c1.style("color"), Some("blue"));
        assert_eq!(c2.style("color"), Some("red"));
    }

    #[test]
    fn test_shared_content() {
        let payload = Rc::new(vec!["para".to_string()]);
        let c1 = Cell::new(Rc::clone(&payload));
        let c2 = c1.clone();
        assert!(Rc::ptr_eq(&c1.content, &c2.content));
        assert_eq!(Rc::strong_count(&payload), 3);
    }

    #[test]
    fn test_content_concat() {
        assert_eq!("ab".to_string().concat("cd".to_string()), "abcd");
        assert_eq!(vec![1].concat(vec![2, 3]), vec![1, 2, 3]);
        assert_eq!(Some("a".to_string()).concat(None), Some("a".to_string()));
        assert_eq!(None::<String>.concat(Some("b".to_string())), Some("b".to_string()));
        assert_eq!(None::<String>.concat(None), None);
    }
}
