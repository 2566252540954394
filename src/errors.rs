//! Errors produced by grid operations.

use std::error::Error;
use std::fmt;

use crate::pos::Pos;

/// Result of a fallible grid operation.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while accessing a `Grid2D`.
///
/// When an operation returns an error, the grid is left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The position argument was not a coordinate of the form `[x, y]`.
    InvalidArgument {
        /// Number of coordinates that were actually supplied.
        len: usize,
    },
    /// The position lies outside the grid.
    OutOfBounds {
        /// Position that was requested.
        pos: Pos,
        /// Width of the grid.
        width: usize,
        /// Height of the grid.
        height: usize,
    },
    /// `fill()` was called on a grid with no empty cells.
    Full,
}
impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidArgument { len } => write!(
                f,
                "Position must be a coordinate of the form [x, y]; got {} coordinate(s)",
                len,
            ),
            GridError::OutOfBounds { pos, width, height } => write!(
                f,
                "Position {} exceeds grid bounds ({}x{})",
                pos, width, height,
            ),
            GridError::Full => write!(f, "Grid is already filled to max capacity"),
        }
    }
}
impl Error for GridError {}
