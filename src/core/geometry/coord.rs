//! Grid coordinates

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::size::Size;
use crate::utils::alphabet::{alphabet_to_int, int_to_alphabet};
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    /// Excel-style cell reference: column letters followed by a row number
    static ref COORD_RE: Regex = Regex::new(r"^([A-Z]+)([1-9][0-9]*)$").unwrap();
}

/// Position of a cell in a grid: `x` is the column, `y` is the row
///
/// Both are 1-indexed. A `Coord` is a position, not a displacement: it can be
/// moved by a [`Size`], but two coordinates cannot be added together.
///
/// ```compile_fail
/// use tablegrid::Coord;
///
/// let _ = Coord::new(2, 1) + Coord::new(3, 3);
/// ```
///
/// Coordinates order row-major: by `y`, then by `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordRepr"))]
pub struct Coord {
    x: u32,
    y: u32,
}

impl Coord {
    /// Create a coordinate
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is zero. Use [`Coord::try_new`] for unchecked input.
    pub fn new(x: u32, y: u32) -> Self {
        assert!(
            x >= 1 && y >= 1,
            "grid coordinates are 1-indexed, got ({}, {})",
            x,
            y
        );
        Coord { x, y }
    }

    /// Create a coordinate from signed values, rejecting anything outside `1..=u32::MAX`
    pub fn try_new(x: i64, y: i64) -> TableResult<Self> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(cx), Ok(cy)) if cx >= 1 && cy >= 1 => Ok(Coord { x: cx, y: cy }),
            _ => Err(TableError::InvalidCoordinate { x, y }),
        }
    }

    /// Column number (1-indexed)
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row number (1-indexed)
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Move the coordinate by `size`
    pub fn translate(self, size: Size) -> TableResult<Self> {
        let x = i64::from(self.x).checked_add(size.width);
        let y = i64::from(self.y).checked_add(size.height);
        match (x, y) {
            (Some(x), Some(y)) => Coord::try_new(x, y),
            _ => Err(TableError::InvalidCoordinate {
                x: i64::from(self.x).saturating_add(size.width),
                y: i64::from(self.y).saturating_add(size.height),
            }),
        }
    }

    /// Move the coordinate back by `size`
    pub fn translate_back(self, size: Size) -> TableResult<Self> {
        let width = size.width.checked_neg();
        let height = size.height.checked_neg();
        match (width, height) {
            (Some(width), Some(height)) => self.translate(Size::new(width, height)),
            _ => Err(TableError::InvalidCoordinate {
                x: i64::from(self.x).saturating_sub(size.width),
                y: i64::from(self.y).saturating_sub(size.height),
            }),
        }
    }

    /// Column letters of this coordinate (`1 → A`, `27 → AA`)
    pub fn column_name(&self) -> String {
        int_to_alphabet(self.x)
    }
}

impl Default for Coord {
    fn default() -> Self {
        Coord { x: 1, y: 1 }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_name(), self.y)
    }
}

impl FromStr for Coord {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = COORD_RE
            .captures(s.trim())
            .ok_or_else(|| TableError::invalid_reference(s))?;
        let x = alphabet_to_int(&caps[1]).ok_or_else(|| TableError::invalid_reference(s))?;
        let y: u32 = caps[2]
            .parse()
            .map_err(|_| TableError::invalid_reference(s))?;
        Coord::try_new(i64::from(x), i64::from(y))
    }
}

impl From<Coord> for (u32, u32) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

/// Point-like values accepted by containment tests
///
/// Implemented for [`Coord`] and raw `(x, y)` pairs. A [`Size`] has no frame
/// of reference and is deliberately not a point:
///
/// ```compile_fail
/// use tablegrid::{Coord, Rect, Size};
///
/// let rect = Rect::at(Coord::new(1, 1));
/// rect.contains(Size::new(1, 1));
/// ```
pub trait Point {
    /// `(x, y)` of the point
    fn xy(&self) -> (u32, u32);
}

impl Point for Coord {
    fn xy(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

impl Point for (u32, u32) {
    fn xy(&self) -> (u32, u32) {
        *self
    }
}

impl<P: Point> Point for &P {
    fn xy(&self) -> (u32, u32) {
        (**self).xy()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CoordRepr {
    x: i64,
    y: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordRepr> for Coord {
    type Error = TableError;

    fn try_from(repr: CoordRepr) -> Result<Self, Self::Error> {
        Coord::try_new(repr.x, repr.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(5, 3).to_string(), "E3");
        assert_eq!(Coord::new(27, 10).to_string(), "AA10");
    }

    #[test]
    fn test_parse() {
        assert_eq!("E3".parse::<Coord>().unwrap(), Coord::new(5, 3));
        assert_eq!(" AA10 ".parse::<Coord>().unwrap(), Coord::new(27, 10));
        assert!(matches!(
            "A0".parse::<Coord>(),
            Err(TableError::InvalidReference { .. })
        ));
        assert!("3E".parse::<Coord>().is_err());
        assert!("A2:B3".parse::<Coord>().is_err());
    }

    #[test]
    fn test_try_new() {
        assert!(Coord::try_new(1, 1).is_ok());
        assert_eq!(
            Coord::try_new(0, 4),
            Err(TableError::InvalidCoordinate { x: 0, y: 4 })
        );
        assert!(Coord::try_new(1, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    #[should_panic(expected = "1-indexed")]
    fn test_new_rejects_zero() {
        let _ = Coord::new(0, 1);
    }

    #[test]
    fn test_translate() {
        let coord = Coord::new(2, 1);
        assert_eq!(coord.translate(Size::new(3, 3)).unwrap(), Coord::new(5, 4));
        assert_eq!(
            Coord::new(5, 4).translate_back(Size::new(3, 3)).unwrap(),
            Coord::new(2, 1)
        );
        assert_eq!(
            coord.translate(Size::new(-2, 0)),
            Err(TableError::InvalidCoordinate { x: 0, y: 1 })
        );
    }

    #[test]
    fn test_translate_overflow() {
        let coord = Coord::new(1, 1);
        assert_eq!(
            coord.translate(Size::new(i64::MAX, 0)),
            Err(TableError::InvalidCoordinate { x: i64::MAX, y: 1 })
        );
        assert!(matches!(
            coord.translate_back(Size::new(i64::MIN, 0)),
            Err(TableError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coord::new(u32::MAX, 1).translate(Size::new(1, 0)),
            Err(TableError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_row_major_order() {
        let mut coords = vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(1, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(1, 1), Coord::new(2, 1), Coord::new(1, 2)]
        );
    }
}
