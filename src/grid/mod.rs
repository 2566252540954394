//! Fixed-size 2D grid, implemented using a flat `Vec<Option<T>>`.

use log::{debug, trace};
use std::ops::{Index, IndexMut};

mod iter;
mod print;

pub use iter::{CellMut, CellRef, Iter, IterMut};
pub use print::PrintOptions;

use crate::errors::{GridError, GridResult};
use crate::pos::{IntoPos, Pos};

/// A fixed-size 2D grid of optional cells.
///
/// Position `[x, y]` is stored at index `y * width + x`, so iteration order is
/// row-major. Every cell starts empty (`None`), and the size never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid2D<T> {
    /// Constructs an empty grid with the given size. Zero-sized grids are
    /// allowed.
    ///
    /// # Panics
    ///
    /// This method panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .expect("Cannot make Grid2D with so many cells");
        debug!("Creating {}x{} grid", width, height);
        Self {
            width,
            height,
            cells: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the size of the grid as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Returns the total number of cells, whether empty or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Returns the number of cells that hold a value.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
    /// Returns `true` if no cell is empty, in which case `fill()` will fail.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the position is inside the grid. Positions that are
    /// not of the form `[x, y]` are never bounded.
    pub fn is_bounded(&self, pos: impl IntoPos) -> bool {
        pos.into_pos().map_or(false, |pos| self.contains(pos))
    }
    fn contains(&self, pos: Pos) -> bool {
        // Check the sign first so the casts can't wrap.
        0 <= pos.x
            && (pos.x as usize) < self.width
            && 0 <= pos.y
            && (pos.y as usize) < self.height
    }
    /// Validates a position argument and returns its index into `cells`.
    ///
    /// Every operation that takes a position goes through this.
    fn linear_index(&self, pos: impl IntoPos) -> GridResult<usize> {
        let pos = pos.into_pos()?;
        if self.contains(pos) {
            Ok(flatten_idx(self.width, pos.x as usize, pos.y as usize))
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the value of the cell at the given position, or `None` if the
    /// cell is empty.
    pub fn get(&self, pos: impl IntoPos) -> GridResult<Option<&T>> {
        let idx = self.linear_index(pos)?;
        Ok(self.cells[idx].as_ref())
    }
    /// Returns a mutable reference to the value of the cell at the given
    /// position, or `None` if the cell is empty.
    pub fn get_mut(&mut self, pos: impl IntoPos) -> GridResult<Option<&mut T>> {
        let idx = self.linear_index(pos)?;
        Ok(self.cells[idx].as_mut())
    }
    /// Sets the cell at the given position, overwriting any existing value.
    pub fn set(&mut self, pos: impl IntoPos, value: T) -> GridResult<&mut Self> {
        let idx = self.linear_index(pos)?;
        self.cells[idx] = Some(value);
        Ok(self)
    }
    /// Empties the cell at the given position and returns its old value.
    pub fn take(&mut self, pos: impl IntoPos) -> GridResult<Option<T>> {
        let idx = self.linear_index(pos)?;
        Ok(self.cells[idx].take())
    }

    /// Returns `true` if the cell at the given position holds no value.
    ///
    /// Present values are never considered empty, even if they are zero-like;
    /// use `is_empty_by()` for that.
    pub fn is_empty(&self, pos: impl IntoPos) -> GridResult<bool> {
        let idx = self.linear_index(pos)?;
        Ok(self.cells[idx].is_none())
    }
    /// Returns the result of `predicate` applied to the cell at the given
    /// position.
    pub fn is_empty_by(
        &self,
        pos: impl IntoPos,
        predicate: impl FnOnce(Option<&T>) -> bool,
    ) -> GridResult<bool> {
        Ok(predicate(self.get(pos)?))
    }

    /// Puts a value into the first empty cell in row-major order.
    pub fn fill(&mut self, value: T) -> GridResult<&mut Self> {
        let idx = self
            .cells
            .iter()
            .position(Option::is_none)
            .ok_or(GridError::Full)?;
        trace!("Filling cell #{} of {}x{} grid", idx, self.width, self.height);
        self.cells[idx] = Some(value);
        Ok(self)
    }
    /// Empties every cell.
    pub fn clear(&mut self) -> &mut Self {
        trace!("Clearing {}x{} grid", self.width, self.height);
        for cell in &mut self.cells {
            *cell = None;
        }
        self
    }

    /// Returns an iterator over the rows of the grid, from `y = 0` upwards.
    ///
    /// A grid with zero width has no rows.
    pub fn rows(&self) -> impl '_ + ExactSizeIterator<Item = &[Option<T>]> {
        let row_count = if self.width == 0 { 0 } else { self.height };
        self.cells.chunks(self.width.max(1)).take(row_count)
    }
    /// Returns all cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.cells
    }
}

impl<T, P: IntoPos> Index<P> for Grid2D<T> {
    type Output = Option<T>;

    /// Returns the cell at the given position.
    ///
    /// # Panics
    ///
    /// This method panics if the position is invalid or out of bounds.
    fn index(&self, pos: P) -> &Option<T> {
        match self.linear_index(pos) {
            Ok(idx) => &self.cells[idx],
            Err(e) => panic!("{}", e),
        }
    }
}
impl<T, P: IntoPos> IndexMut<P> for Grid2D<T> {
    fn index_mut(&mut self, pos: P) -> &mut Option<T> {
        match self.linear_index(pos) {
            Ok(idx) => &mut self.cells[idx],
            Err(e) => panic!("{}", e),
        }
    }
}

/// Converts an in-bounds `(x, y)` position into an index into a flat buffer.
#[inline]
fn flatten_idx(width: usize, x: usize, y: usize) -> usize {
    debug_assert!(x < width);
    y * width + x
}
/// Converts an index into a flat buffer into an `(x, y)` position.
#[inline]
fn unflatten_idx(width: usize, idx: usize) -> (usize, usize) {
    (idx % width, idx / width)
}
