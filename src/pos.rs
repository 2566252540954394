//! 2D grid positions.
//!
//! Coordinates are signed so that positions to the left of or above the grid
//! can be expressed (and rejected) instead of wrapping around.

use std::convert::TryFrom;
use std::fmt;

use crate::errors::{GridError, GridResult};

/// Signed 2D position `[x, y]`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    /// X coordinate (column).
    pub x: isize,
    /// Y coordinate (row).
    pub y: isize,
}
impl Pos {
    /// Constructs a position from its coordinates.
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
    /// Returns the position `[0, 0]`.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(isize, isize)> for Pos {
    #[inline]
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}
impl From<[isize; 2]> for Pos {
    #[inline]
    fn from([x, y]: [isize; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<Pos> for (isize, isize) {
    #[inline]
    fn from(pos: Pos) -> Self {
        (pos.x, pos.y)
    }
}
impl TryFrom<&[isize]> for Pos {
    type Error = GridError;

    fn try_from(coords: &[isize]) -> GridResult<Self> {
        match coords {
            &[x, y] => Ok(Self::new(x, y)),
            _ => Err(GridError::InvalidArgument { len: coords.len() }),
        }
    }
}

/// Unsigned 2D position `[x, y]`, matching the coordinates reported by grid
/// iterators.
///
/// Coordinates too large for `isize` are clamped to `isize::MAX` on
/// conversion. No grid is that wide, so such a position is always out of
/// bounds.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UPos {
    /// X coordinate (column).
    pub x: usize,
    /// Y coordinate (row).
    pub y: usize,
}
impl UPos {
    /// Constructs a position from its coordinates.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
impl From<(usize, usize)> for UPos {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
impl From<[usize; 2]> for UPos {
    #[inline]
    fn from([x, y]: [usize; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<UPos> for Pos {
    #[inline]
    fn from(pos: UPos) -> Self {
        let clamp = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
        Self::new(clamp(pos.x), clamp(pos.y))
    }
}

/// Anything that can be used as a position argument to a grid operation.
///
/// Fixed-size forms always convert; sequences of the wrong length produce
/// `GridError::InvalidArgument`.
pub trait IntoPos {
    /// Converts `self` into a `Pos`.
    fn into_pos(self) -> GridResult<Pos>;
}
impl IntoPos for Pos {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Ok(self)
    }
}
impl IntoPos for UPos {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Ok(self.into())
    }
}
impl IntoPos for &Pos {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Ok(*self)
    }
}
impl IntoPos for (isize, isize) {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Ok(self.into())
    }
}
impl IntoPos for [isize; 2] {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Ok(self.into())
    }
}
impl IntoPos for &[isize] {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Pos::try_from(self)
    }
}
impl IntoPos for &Vec<isize> {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Pos::try_from(self.as_slice())
    }
}
impl IntoPos for Vec<isize> {
    #[inline]
    fn into_pos(self) -> GridResult<Pos> {
        Pos::try_from(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_conversions() {
        assert_eq!(Ok(Pos::new(1, 2)), (1_isize, 2).into_pos());
        assert_eq!(Ok(Pos::new(-1, 0)), [-1_isize, 0].into_pos());
        assert_eq!(Ok(Pos::new(4, 5)), vec![4_isize, 5].into_pos());
        assert_eq!(Ok(Pos::new(4, 5)), (&[4_isize, 5][..]).into_pos());
        assert_eq!((7, 8), <(isize, isize)>::from(Pos::new(7, 8)));
        assert_eq!(Ok(Pos::new(3, 9)), UPos::new(3, 9).into_pos());
        assert_eq!(UPos::new(3, 9), UPos::from([3, 9]));
        assert_eq!(UPos::new(3, 9), UPos::from((3, 9)));
    }

    #[test]
    fn test_upos_clamps_large_coords() {
        assert_eq!(
            Pos::new(isize::MAX, 4),
            Pos::from(UPos::new(usize::MAX, 4)),
        );
        assert_eq!(
            Pos::new(isize::MAX, isize::MAX),
            Pos::from(UPos::new(isize::MAX as usize + 1, usize::MAX)),
        );
    }

    #[test]
    fn test_pos_wrong_len() {
        assert_eq!(
            Err(GridError::InvalidArgument { len: 0 }),
            Vec::<isize>::new().into_pos(),
        );
        assert_eq!(
            Err(GridError::InvalidArgument { len: 1 }),
            (&[3_isize][..]).into_pos(),
        );
        assert_eq!(
            Err(GridError::InvalidArgument { len: 3 }),
            vec![1_isize, 2, 3].into_pos(),
        );
    }

    #[test]
    fn test_pos_display() {
        assert_eq!("[0, 0]", Pos::origin().to_string());
        assert_eq!("[-3, 12]", Pos::new(-3, 12).to_string());
    }
}
