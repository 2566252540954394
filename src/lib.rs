//! Fixed-size 2D grid backed by a single flat buffer.
//!
//! A `Grid2D<T>` holds `width * height` cells, each of which is either empty
//! or holds a `T`. Cells are addressed by `[x, y]` position and every
//! position-taking operation is bounds-checked, returning a `GridError`
//! instead of panicking.
//!
//! ```
//! use grid2d::prelude::*;
//!
//! let mut grid = Grid2D::new(2, 2);
//! grid.set([0, 0], 'a')?.set([1, 1], 'd')?;
//! grid.fill('b')?;
//! assert_eq!(Some(&'b'), grid.get([1, 0])?);
//! assert_eq!(Err(GridError::OutOfBounds { pos: Pos::new(2, 0), width: 2, height: 2 }), grid.get([2, 0]));
//! assert_eq!("a b\n  d", grid.to_string());
//! # Ok::<(), GridError>(())
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod errors;
mod grid;
mod pos;

pub use errors::{GridError, GridResult};
pub use grid::{CellMut, CellRef, Grid2D, Iter, IterMut, PrintOptions};
pub use pos::{IntoPos, Pos, UPos};

pub mod prelude {
    //! Everything needed to work with grids.

    pub use crate::errors::{GridError, GridResult};
    pub use crate::grid::{Grid2D, PrintOptions};
    pub use crate::pos::{IntoPos, Pos, UPos};
}

#[cfg(test)]
mod tests;
