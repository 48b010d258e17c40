//! Cell size and displacement

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Width and height of a cell, or a displacement between coordinates
///
/// Cells never have a null or negative size, but intermediate values can be
/// negative (e.g. when shrinking). A `Size` combines with another `Size`, an
/// `(width, height)` pair or a scalar:
///
/// ```
/// use tablegrid::Size;
///
/// assert_eq!(Size::new(2, 1) + Size::new(3, 3), Size::new(5, 4));
/// assert_eq!(Size::new(5, 4) - (3, 3), Size::new(2, 1));
/// assert_eq!(Size::new(2, 1) * 2, Size::new(4, 2));
/// assert_eq!(-Size::new(3, 2), Size::new(-3, -2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Number of spanned columns
    pub width: i64,
    /// Number of spanned rows
    pub height: i64,
}

impl Size {
    /// Size of a single cell
    pub const UNIT: Size = Size {
        width: 1,
        height: 1,
    };

    pub const fn new(width: i64, height: i64) -> Self {
        Size { width, height }
    }

    /// `self + rhs`, or `None` on overflow
    pub fn checked_add(self, rhs: impl Into<Size>) -> Option<Size> {
        let rhs = rhs.into();
        Some(Size::new(
            self.width.checked_add(rhs.width)?,
            self.height.checked_add(rhs.height)?,
        ))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} x {})", self.width, self.height)
    }
}

impl From<(i64, i64)> for Size {
    fn from((width, height): (i64, i64)) -> Self {
        Size { width, height }
    }
}

impl From<i64> for Size {
    fn from(value: i64) -> Self {
        Size {
            width: value,
            height: value,
        }
    }
}

/// `Size ± rhs` for every right-hand side a size can be built from
macro_rules! impl_size_ops {
    ($($rhs:ty),*) => {
        $(
            impl Add<$rhs> for Size {
                type Output = Size;

                fn add(self, rhs: $rhs) -> Size {
                    let rhs = Size::from(rhs);
                    Size::new(self.width + rhs.width, self.height + rhs.height)
                }
            }

            impl Sub<$rhs> for Size {
                type Output = Size;

                fn sub(self, rhs: $rhs) -> Size {
                    let rhs = Size::from(rhs);
                    Size::new(self.width - rhs.width, self.height - rhs.height)
                }
            }
        )*
    };
}

impl_size_ops!(Size, (i64, i64), i64);

impl Mul<i64> for Size {
    type Output = Size;

    fn mul(self, factor: i64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

impl Neg for Size {
    type Output = Size;

    fn neg(self) -> Size {
        Size::new(-self.width, -self.height)
    }
}
