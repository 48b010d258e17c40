//! Spanning grid engine
//!
//! A [`Grid`] stores non-overlapping [`Cell`]s keyed by their top-left
//! coordinate. It owns every geometric rule of the model:
//!
//! - insertion rejects duplicate keys and overlapping rects
//! - merge/expand replace an exactly covered region by a single cell
//! - fill-missing plugs the holes of a region with unit cells
//! - iteration is row-major, by the total order of the cell rects
//!
//! ```text
//! +-----------+-----------------------+
//! |    red    |   pink                |
//! |           +-----------+-----------+
//! |           |   blue    |           |
//! +-----------+-----------+-----------+
//! ```
//!
//! All operations validate before mutating: on error the grid is unchanged.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::iter::Peekable;

use fxhash::FxHashSet;
use log::{debug, trace};

use super::cell::{Cell, Content};
use super::geometry::{Coord, Point, Rect, Size};
use super::nature::Nature;
use crate::features::drawing::{draw, DrawOptions};
use crate::utils::error::{TableError, TableResult};

/// Collection of disjoint cells ordered in rows and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Keyed by top-left corner; `Coord` orders row-major, and disjoint cells
    /// have distinct corners, so key order is the rect total order.
    cells: BTreeMap<Coord, Cell<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid {
            cells: BTreeMap::new(),
        }
    }
}

impl<T> Grid<T> {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from cells already placed at their final position
    ///
    /// Fails on the first cell that collides with a previous one.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell<T>>) -> TableResult<Self> {
        let mut grid = Grid::new();
        for cell in cells {
            grid.insert(cell.top_left(), cell)?;
        }
        Ok(grid)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Insert `cell` with its top-left corner at `coord`, keeping its size
    pub fn insert(&mut self, coord: Coord, mut cell: Cell<T>) -> TableResult<()> {
        if self.cells.contains_key(&coord) {
            return Err(TableError::DuplicateCoordinate { coord });
        }
        let rect = cell.rect().move_to(coord)?;
        if let Some(other) = self.first_intersecting(&rect) {
            return Err(TableError::Overlap {
                coord,
                conflict: other.top_left(),
            });
        }
        cell.set_rect(rect);
        trace!("insert cell {}", rect);
        self.cells.insert(coord, cell);
        Ok(())
    }

    /// Remove the cell whose top-left corner is exactly `coord`
    pub fn remove(&mut self, coord: Coord) -> TableResult<Cell<T>> {
        let cell = self
            .cells
            .remove(&coord)
            .ok_or(TableError::MissingCoordinate { coord })?;
        trace!("remove cell {}", cell.rect());
        Ok(cell)
    }

    /// Cell whose top-left corner is exactly `coord`
    pub fn get(&self, coord: Coord) -> Option<&Cell<T>> {
        self.cells.get(&coord)
    }

    /// Mutable access to content, styles and nature (the geometry is fixed)
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell<T>> {
        self.cells.get_mut(&coord)
    }

    /// Like [`Grid::get`], but fails with `MissingCoordinate`
    pub fn cell(&self, coord: Coord) -> TableResult<&Cell<T>> {
        self.get(coord)
            .ok_or(TableError::MissingCoordinate { coord })
    }

    pub fn contains_key(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Cell covering `point`, which may be a spanning cell stored elsewhere
    pub fn find<P: Point>(&self, point: P) -> Option<&Cell<T>> {
        let (x, y) = point.xy();
        if x == 0 || y == 0 {
            return None;
        }
        self.cells
            .range(..=Coord::new(u32::MAX, y))
            .map(|(_, cell)| cell)
            .find(|cell| cell.contains((x, y)))
    }

    /// Whether some cell covers `point` (not only whether it is a key)
    pub fn contains<P: Point>(&self, point: P) -> bool {
        self.find(point).is_some()
    }

    /// Cells in row-major order
    pub fn iter(&self) -> btree_map::Values<'_, Coord, Cell<T>> {
        self.cells.values()
    }

    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, Coord, Cell<T>> {
        self.cells.values_mut()
    }

    /// Cells grouped by the row where they start
    pub fn iter_rows(&self) -> Rows<'_, T> {
        Rows {
            cells: self.cells.values().peekable(),
        }
    }

    pub fn into_cells(self) -> impl Iterator<Item = Cell<T>> {
        self.cells.into_values()
    }

    /// Union of every cell rect, `None` for an empty grid
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::bounding(self.cells.values().map(Cell::rect))
    }

    /// Merge the cells of the region spanned by `start` and `end`
    ///
    /// Contents are concatenated with [`Content::concat`]; see
    /// [`Grid::merge_with`].
    pub fn merge(&mut self, start: Coord, end: Coord) -> TableResult<&Cell<T>>
    where
        T: Content,
    {
        self.merge_with(start, end, T::concat)
    }

    /// Merge the cells of the region spanned by `start` and `end`
    ///
    /// The region must be covered exactly by existing cells: no cell may
    /// cross its boundary and no coordinate inside may be left uncovered.
    /// The merged cell is stored at the top-left corner of the region and
    /// keeps the nature and styles of the top-left cell. Contents are folded
    /// in row-major order with `appender`.
    pub fn merge_with<F>(&mut self, start: Coord, end: Coord, appender: F) -> TableResult<&Cell<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let region = Rect::at(start).union(&Rect::at(end));
        self.merge_region(region, appender)
    }

    /// Grow (or shrink) the cell at `coord` by `delta`, absorbing the cells it covers
    pub fn expand(&mut self, coord: Coord, delta: Size) -> TableResult<&Cell<T>>
    where
        T: Content,
    {
        self.expand_with(coord, delta, T::concat)
    }

    /// [`Grid::expand`] with a custom content appender
    pub fn expand_with<F>(&mut self, coord: Coord, delta: Size, appender: F) -> TableResult<&Cell<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let rect = self.cell(coord)?.rect();
        let region = rect
            .size()
            .checked_add(delta)
            .and_then(|size| rect.resize(size).ok())
            .ok_or_else(|| TableError::invalid_merge(rect, "the expanded cell has no valid extent"))?;
        self.merge_region(region, appender)
    }

    fn merge_region<F>(&mut self, region: Rect, mut appender: F) -> TableResult<&Cell<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let mut absorbed = Vec::new();
        let mut covered = 0u64;
        for cell in self.cells.values() {
            let rect = cell.rect();
            if region.contains_rect(&rect) {
                absorbed.push(cell.top_left());
                covered += rect.area();
            } else if region.intersects(&rect) {
                return Err(TableError::invalid_merge(
                    region,
                    "a cell crosses the region boundary",
                ));
            }
        }
        if absorbed.is_empty() {
            return Err(TableError::invalid_merge(region, "no cell to merge"));
        }
        if covered != region.area() {
            return Err(TableError::invalid_merge(
                region,
                "the region is not fully covered",
            ));
        }

        // Full coverage: the first absorbed key is the region's top-left corner
        let count = absorbed.len();
        let mut cells = absorbed
            .into_iter()
            .filter_map(|coord| self.cells.remove(&coord));
        let mut merged = match cells.next() {
            Some(first) => first,
            None => return Err(TableError::invalid_merge(region, "no cell to merge")),
        };
        for cell in cells {
            merged.content = appender(merged.content, cell.content);
        }
        merged.set_rect(region);
        debug!("merged {} cells into {}", count, region);
        Ok(&*self.cells.entry(region.top_left()).or_insert(merged))
    }

    /// Fill every hole of the bounding box with a unit cell of `nature`
    ///
    /// Returns the number of inserted cells.
    pub fn fill_missing<F>(&mut self, nature: &Nature, factory: F) -> usize
    where
        F: FnMut() -> T,
    {
        match self.bounding_box() {
            Some(region) => self.fill_missing_in(region, nature, factory),
            None => 0,
        }
    }

    /// Fill every hole of `region` with a unit cell of `nature`
    pub fn fill_missing_in<F>(&mut self, region: Rect, nature: &Nature, mut factory: F) -> usize
    where
        F: FnMut() -> T,
    {
        let mut covered: FxHashSet<Coord> = FxHashSet::default();
        for cell in self.cells.values() {
            if let Ok(common) = cell.rect().intersection(&region) {
                covered.extend(common.coords());
            }
        }
        let holes: Vec<Coord> = region.coords().filter(|c| !covered.contains(c)).collect();
        for &coord in &holes {
            let mut cell = Cell::new(factory()).with_nature(nature.clone());
            cell.set_rect(Rect::at(coord));
            self.cells.insert(coord, cell);
        }
        if !holes.is_empty() {
            debug!("filled {} missing cells in {}", holes.len(), region);
        }
        holes.len()
    }

    fn first_intersecting(&self, rect: &Rect) -> Option<&Cell<T>> {
        // cells starting below the rect cannot reach it
        self.cells
            .range(..=Coord::new(u32::MAX, rect.bottom_right().y()))
            .map(|(_, cell)| cell)
            .find(|cell| cell.rect().intersects(rect))
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Cell<T>;
    type IntoIter = btree_map::Values<'a, Coord, Cell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&draw(self, &DrawOptions::default()))
    }
}

/// Iterator over the row groups of a grid, see [`Grid::iter_rows`]
pub struct Rows<'a, T> {
    cells: Peekable<btree_map::Values<'a, Coord, Cell<T>>>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = Vec<&'a Cell<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cells.next()?;
        let y = first.top_left().y();
        let mut row = vec![first];
        while let Some(cell) = self.cells.next_if(|cell| cell.top_left().y() == y) {
            row.push(cell);
        }
        Some(row)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.values())
    }
}

/// Cells are re-inserted one by one, so an invalid sequence is rejected
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Cell<T>>::deserialize(deserializer)?;
        Grid::from_cells(cells).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styled::Styled;
    use pretty_assertions::assert_eq;

    fn c(x: u32, y: u32) -> Coord {
        Coord::new(x, y)
    }

    fn text(s: &str) -> Cell<String> {
        Cell::new(s.to_string())
    }

    /// red: A1:A2, pink: B1:C1, blue: B2
    fn sample() -> Grid<String> {
        let mut grid = Grid::new();
        grid.insert(c(1, 1), text("red").with_span(1, 2).unwrap())
            .unwrap();
        grid.insert(c(2, 1), text("pink").with_span(2, 1).unwrap())
            .unwrap();
        grid.insert(c(2, 2), text("blue")).unwrap();
        grid
    }

    fn contents(grid: &Grid<String>) -> Vec<&str> {
        grid.iter().map(|cell| cell.content.as_str()).collect()
    }

    #[test]
    fn test_iteration_follows_total_order() {
        let mut grid = Grid::new();
        grid.insert(c(2, 2), text("blue")).unwrap();
        grid.insert(c(2, 1), text("pink").with_span(2, 1).unwrap())
            .unwrap();
        grid.insert(c(1, 1), text("red").with_span(1, 2).unwrap())
            .unwrap();
        assert_eq!(contents(&grid), vec!["red", "pink", "blue"]);
        assert_eq!(grid.get(c(2, 1)).unwrap().content, "pink");
        assert_eq!(grid.get(c(2, 2)).unwrap().content, "blue");
    }

    #[test]
    fn test_insert_moves_cell() {
        let mut grid = Grid::new();
        grid.insert(c(3, 4), text("x").with_span(2, 1).unwrap())
            .unwrap();
        let cell = grid.get(c(3, 4)).unwrap();
        assert_eq!(cell.rect().to_string(), "C4:D4");
    }

    #[test]
    fn test_duplicate_checked_before_overlap() {
        let mut grid = sample();
        assert_eq!(
            grid.insert(c(2, 2), text("again")),
            Err(TableError::DuplicateCoordinate { coord: c(2, 2) })
        );
    }

    #[test]
    fn test_overlap_at_other_key() {
        let mut grid = sample();
        // A2 is covered by red (A1:A2) without being a key
        assert_eq!(
            grid.insert(c(1, 2), text("x")),
            Err(TableError::Overlap {
                coord: c(1, 2),
                conflict: c(1, 1)
            })
        );
        assert!(matches!(
            grid.insert(c(3, 1), text("x")),
            Err(TableError::Overlap { .. })
        ));
        assert_eq!(grid.len(), 3);

        // a wide cell starting in a hole but running into a neighbour
        let mut grid = Grid::new();
        grid.insert(c(1, 1), text("a")).unwrap();
        grid.insert(c(3, 1), text("c")).unwrap();
        assert_eq!(
            grid.insert(c(2, 1), text("b").with_span(2, 1).unwrap()),
            Err(TableError::Overlap {
                coord: c(2, 1),
                conflict: c(3, 1)
            })
        );
    }

    #[test]
    fn test_from_cells_rejects_overlap() {
        let cells = vec![
            text("a").with_span(2, 2).unwrap(),
            text("b").move_to(c(2, 2)).unwrap(),
        ];
        assert!(matches!(
            Grid::from_cells(cells),
            Err(TableError::Overlap { .. })
        ));
    }

    #[test]
    fn test_remove() {
        let mut grid = sample();
        let pink = grid.remove(c(2, 1)).unwrap();
        assert_eq!(pink.content, "pink");
        assert_eq!(
            grid.remove(c(3, 1)),
            Err(TableError::MissingCoordinate { coord: c(3, 1) })
        );
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_point_membership() {
        let grid = sample();
        assert!(grid.contains(c(1, 2)));
        assert!(!grid.contains_key(c(1, 2)));
        assert!(grid.contains((3, 1)));
        assert!(!grid.contains((3, 2)));
        assert!(!grid.contains((0, 1)));
        assert_eq!(grid.find((3, 1)).unwrap().content, "pink");
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(Grid::<String>::new().bounding_box(), None);
        let grid = sample();
        let bb = grid.bounding_box().unwrap();
        assert_eq!(bb.to_string(), "A1:C2");
        assert_eq!(bb.size(), Size::new(3, 2));
    }

    #[test]
    fn test_iter_rows() {
        let grid = sample();
        let rows: Vec<Vec<&str>> = grid
            .iter_rows()
            .map(|row| row.iter().map(|cell| cell.content.as_str()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["red", "pink"], vec!["blue"]]);
    }

    #[test]
    fn test_merge() {
        let mut grid = sample();
        grid.fill_missing(&Nature::Body, String::new);
        let merged = grid
            .merge_with(c(2, 1), c(3, 2), |a, b| format!("{}/{}", a, b))
            .unwrap();
        assert_eq!(merged.content, "pink/blue/");
        assert_eq!(merged.rect().to_string(), "B1:C2");
        assert!(grid.get(c(2, 2)).is_none());
        assert!(grid.get(c(3, 2)).is_none());
        assert_eq!(contents(&grid), vec!["red", "pink/blue/"]);
    }

    #[test]
    fn test_merge_keeps_top_left_styles_and_nature() {
        let mut grid = Grid::new();
        grid.insert(
            c(1, 1),
            text("a").with_style("align", "left").with_nature(Nature::Header),
        )
        .unwrap();
        grid.insert(c(2, 1), text("b").with_style("valign", "top"))
            .unwrap();
        let merged = grid.merge(c(1, 1), c(2, 1)).unwrap();
        assert_eq!(merged.content, "ab");
        assert_eq!(merged.nature(), &Nature::Header);
        assert_eq!(merged.style("align"), Some("left"));
        assert_eq!(merged.style("valign"), None);
    }

    #[test]
    fn test_merge_with_reversed_corners() {
        let mut grid = Grid::new();
        grid.insert(c(1, 1), text("a")).unwrap();
        grid.insert(c(1, 2), text("b")).unwrap();
        let merged = grid.merge(c(1, 2), c(1, 1)).unwrap();
        assert_eq!(merged.top_left(), c(1, 1));
        assert_eq!(merged.content, "ab");
    }

    #[test]
    fn test_merge_rejects_partial_cell() {
        let mut grid = sample();
        let before = grid.clone();
        // red spans A1:A2, the region A1:B1 cuts it
        assert!(matches!(
            grid.merge(c(1, 1), c(2, 1)),
            Err(TableError::InvalidMergeRegion { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_merge_rejects_gap() {
        let mut grid = sample();
        let before = grid.clone();
        // C2 is a hole
        assert!(matches!(
            grid.merge(c(2, 2), c(3, 2)),
            Err(TableError::InvalidMergeRegion { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_merge_empty_region() {
        let mut grid: Grid<String> = Grid::new();
        assert!(matches!(
            grid.merge(c(1, 1), c(2, 2)),
            Err(TableError::InvalidMergeRegion { .. })
        ));
    }

    #[test]
    fn test_expand() {
        let mut grid = sample();
        grid.insert(c(3, 2), text("green")).unwrap();
        let cell = grid.expand(c(2, 2), Size::new(1, 0)).unwrap();
        assert_eq!(cell.content, "bluegreen");
        assert_eq!(cell.size(), Size::new(2, 1));
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_expand_errors() {
        let mut grid = sample();
        assert_eq!(
            grid.expand(c(3, 3), Size::new(1, 0)).map(|cell| cell.rect()),
            Err(TableError::MissingCoordinate { coord: c(3, 3) })
        );
        // blue cannot grow into the hole at C2
        assert!(matches!(
            grid.expand(c(2, 2), Size::new(1, 0)),
            Err(TableError::InvalidMergeRegion { .. })
        ));
        // widening red would cut pink in half
        assert!(grid.expand(c(1, 1), Size::new(1, 0)).is_err());
    }

    #[test]
    fn test_expand_rejects_shrinking_and_overflow() {
        let mut grid = sample();
        let before = grid.clone();
        for delta in [
            Size::new(0, -1),
            Size::new(0, -2),
            Size::new(-5, 0),
            Size::new(i64::MAX, 0),
            Size::new(0, i64::MIN),
        ] {
            let result = grid.expand(c(1, 1), delta).map(|cell| cell.rect());
            assert!(
                matches!(result, Err(TableError::InvalidMergeRegion { .. })),
                "{} gave {:?}",
                delta,
                result
            );
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_missing() {
        let mut grid = sample();
        let bb = grid.bounding_box().unwrap();
        let inserted = grid.fill_missing(&Nature::Footer, || "?".to_string());
        assert_eq!(inserted, 1);
        assert_eq!(grid.bounding_box(), Some(bb));
        let filler = grid.get(c(3, 2)).unwrap();
        assert_eq!(filler.content, "?");
        assert_eq!(filler.nature(), &Nature::Footer);
        for coord in bb.coords() {
            assert!(grid.contains(coord));
        }
        assert_eq!(grid.fill_missing(&Nature::Body, String::new), 0);
    }

    #[test]
    fn test_fill_missing_area() {
        let mut grid = Grid::new();
        grid.insert(c(2, 2), text("x").with_span(2, 2).unwrap())
            .unwrap();
        grid.insert(c(5, 4), text("y")).unwrap();
        let bb = grid.bounding_box().unwrap();
        let covered: u64 = grid.iter().map(|cell| cell.rect().area()).sum();
        let inserted = grid.fill_missing(&Nature::Body, String::new);
        assert_eq!(inserted as u64, bb.area() - covered);
        let total: u64 = grid.iter().map(|cell| cell.rect().area()).sum();
        assert_eq!(total, bb.area());
    }

    #[test]
    fn test_fill_missing_in_region() {
        let mut grid = sample();
        let region: Rect = "A3:C3".parse().unwrap();
        assert_eq!(grid.fill_missing_in(region, &Nature::Footer, String::new), 3);
        assert_eq!(grid.bounding_box().unwrap().to_string(), "A1:C3");
        assert_eq!(grid.fill_missing(&Nature::Body, String::new), 1);
    }

    #[test]
    fn test_fill_missing_empty_grid() {
        let mut grid: Grid<String> = Grid::new();
        assert_eq!(grid.fill_missing(&Nature::Body, String::new), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_display() {
        let grid = sample();
        let expected = "\
+-----------+-----------------------+
|    red    |   pink                |
|           +-----------+-----------+
|           |   blue    |           |
+-----------+-----------+-----------+";
        assert_eq!(grid.to_string(), expected);
    }
}
