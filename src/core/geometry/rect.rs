//! Rectangular grid regions
//!
//! A [`Rect`] is an axis-aligned region defined by its top-left (`min`) and
//! bottom-right (`max`) coordinates, both inclusive. Every cell of a grid
//! occupies a rect, and the bounding box of a grid is a rect too.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::coord::{Coord, Point};
use super::size::Size;
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    static ref RECT_RE: Regex =
        Regex::new(r"^([A-Z]+[1-9][0-9]*)(?::([A-Z]+[1-9][0-9]*))?$").unwrap();
}

/// Rectangular region of a grid
///
/// ```
/// use tablegrid::{Coord, Rect};
///
/// let rect = Rect::new(Coord::new(5, 6), Coord::new(6, 8)).unwrap();
/// assert_eq!((rect.width(), rect.height()), (2, 3));
/// assert!(rect.contains((5, 7)));
/// assert_eq!(rect.to_string(), "E6:F8");
/// ```
///
/// Rects are totally ordered by `min.y`, `min.x`, `max.y`, then `max.x`:
/// sorting cells by their rect walks the grid row by row, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RectRepr"))]
pub struct Rect {
    min: Coord,
    max: Coord,
}

impl Rect {
    /// Create a rect from its corners
    pub fn new(min: Coord, max: Coord) -> TableResult<Self> {
        if max.x() < min.x() || max.y() < min.y() {
            return Err(TableError::InvalidRect { min, max });
        }
        Ok(Rect { min, max })
    }

    /// 1×1 rect at `min`
    pub fn at(min: Coord) -> Self {
        Rect { min, max: min }
    }

    /// Rect starting at `min` with the given size
    pub fn with_size(min: Coord, size: Size) -> TableResult<Self> {
        if size.width < 1 || size.height < 1 {
            return Err(TableError::InvalidSpan {
                width: size.width,
                height: size.height,
            });
        }
        let max = min.translate(size - 1)?;
        Ok(Rect { min, max })
    }

    /// Smallest rect covering every rect of `rects`, `None` if there is none
    pub fn bounding(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
        rects.into_iter().reduce(|acc, rect| acc.union(&rect))
    }

    /// Top-left corner
    pub fn top_left(&self) -> Coord {
        self.min
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Coord {
        self.max
    }

    pub fn width(&self) -> u32 {
        self.max.x() - self.min.x() + 1
    }

    pub fn height(&self) -> u32 {
        self.max.y() - self.min.y() + 1
    }

    pub fn size(&self) -> Size {
        Size::new(i64::from(self.width()), i64::from(self.height()))
    }

    /// Number of grid coordinates covered
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Whether the point lies inside the rect
    pub fn contains<P: Point>(&self, point: P) -> bool {
        let (x, y) = point.xy();
        self.min.x() <= x && x <= self.max.x() && self.min.y() <= y && y <= self.max.y()
    }

    /// Whether `other` lies entirely inside the rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Whether the two rects overlap on both axes
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x() <= other.max.x()
            && other.min.x() <= self.max.x()
            && self.min.y() <= other.max.y()
            && other.min.y() <= self.max.y()
    }

    pub fn is_disjoint(&self, other: &Rect) -> bool {
        !self.intersects(other)
    }

    /// Overlapping region of the two rects
    pub fn intersection(&self, other: &Rect) -> TableResult<Rect> {
        if self.is_disjoint(other) {
            return Err(TableError::NoIntersection {
                first: *self,
                second: *other,
            });
        }
        Ok(Rect {
            min: Coord::new(
                self.min.x().max(other.min.x()),
                self.min.y().max(other.min.y()),
            ),
            max: Coord::new(
                self.max.x().min(other.max.x()),
                self.max.y().min(other.max.y()),
            ),
        })
    }

    /// Smallest rect containing both rects, even when they are disjoint
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: Coord::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
            ),
            max: Coord::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
            ),
        }
    }

    /// Move and/or resize the rect; `None` keeps the current value
    pub fn transform(&self, coord: Option<Coord>, size: Option<Size>) -> TableResult<Rect> {
        Rect::with_size(coord.unwrap_or(self.min), size.unwrap_or_else(|| self.size()))
    }

    pub fn move_to(&self, coord: Coord) -> TableResult<Rect> {
        self.transform(Some(coord), None)
    }

    pub fn resize(&self, size: Size) -> TableResult<Rect> {
        self.transform(None, Some(size))
    }

    /// Every coordinate of the rect, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (min, max) = (self.min, self.max);
        (min.y()..=max.y()).flat_map(move |y| (min.x()..=max.x()).map(move |x| Coord::new(x, y)))
    }

    fn sort_key(&self) -> (u32, u32, u32, u32) {
        (self.min.y(), self.min.x(), self.max.y(), self.max.x())
    }
}

impl Ord for Rect {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Rect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 1×1 rect at `A1`
impl Default for Rect {
    fn default() -> Self {
        Rect::at(Coord::default())
    }
}

impl From<Coord> for Rect {
    fn from(coord: Coord) -> Self {
        Rect::at(coord)
    }
}

/// Only a 1×1 rect designates a single point
impl TryFrom<Rect> for Coord {
    type Error = TableError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        if rect.min == rect.max {
            Ok(rect.min)
        } else {
            Err(TableError::incompatible("point conversion", rect))
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}:{}", self.min, self.max)
        }
    }
}

impl FromStr for Rect {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RECT_RE
            .captures(s.trim())
            .ok_or_else(|| TableError::invalid_reference(s))?;
        let min: Coord = caps[1].parse()?;
        match caps.get(2) {
            Some(max) => Rect::new(min, max.as_str().parse()?),
            None => Ok(Rect::at(min)),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RectRepr {
    min: Coord,
    max: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<RectRepr> for Rect {
    type Error = TableError;

    fn try_from(repr: RectRepr) -> Result<Self, Self::Error> {
        Rect::new(repr.min, repr.max)
    }
}
