//! Row-major iteration over the cells of a `Grid2D`.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::{unflatten_idx, Grid2D};
use crate::pos::Pos;

/// Read-only view of a single cell, as yielded by `Grid2D::iter()`.
#[derive(Debug)]
pub struct CellRef<'a, T> {
    /// Index of the cell in row-major order.
    pub index: usize,
    /// X coordinate of the cell.
    pub x: usize,
    /// Y coordinate of the cell.
    pub y: usize,
    /// Value of the cell, or `None` if it is empty.
    pub value: Option<&'a T>,
}
impl<T> Clone for CellRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for CellRef<'_, T> {}
impl<'a, T> CellRef<'a, T> {
    fn new(width: usize, index: usize, value: Option<&'a T>) -> Self {
        let (x, y) = unflatten_idx(width, index);
        Self { index, x, y, value }
    }
    /// Returns the position of the cell.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x as isize, self.y as isize)
    }
}

/// Mutable handle to a single cell, as yielded by `Grid2D::iter_mut()` and
/// passed to the callback of `Grid2D::for_each_cell()`.
///
/// The handle only ever touches the one cell it was created for.
#[derive(Debug)]
pub struct CellMut<'a, T> {
    /// Index of the cell in row-major order.
    pub index: usize,
    /// X coordinate of the cell.
    pub x: usize,
    /// Y coordinate of the cell.
    pub y: usize,
    cell: &'a mut Option<T>,
}
impl<'a, T> CellMut<'a, T> {
    fn new(width: usize, index: usize, cell: &'a mut Option<T>) -> Self {
        let (x, y) = unflatten_idx(width, index);
        Self { index, x, y, cell }
    }
    /// Returns the position of the cell.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x as isize, self.y as isize)
    }

    /// Returns the value of the cell, or `None` if it is empty.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.cell.as_ref()
    }
    /// Returns a mutable reference to the value of the cell, or `None` if it
    /// is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.cell.as_mut()
    }
    /// Returns `true` if the cell holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// Overwrites the cell with a new value.
    #[inline]
    pub fn set(&mut self, value: T) {
        *self.cell = Some(value);
    }
    /// Overwrites the cell with a new value and returns the old one.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.cell.replace(value)
    }
    /// Empties the cell and returns its old value.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.cell.take()
    }
    /// Empties the cell.
    #[inline]
    pub fn clear(&mut self) {
        *self.cell = None;
    }
}

/// Iterator over the cells of a grid in row-major order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    width: usize,
    inner: Enumerate<slice::Iter<'a, Option<T>>>,
}
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            inner: self.inner.clone(),
        }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = CellRef<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<CellRef<'a, T>> {
        let (idx, cell) = self.inner.next()?;
        Some(CellRef::new(self.width, idx, cell.as_ref()))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<CellRef<'a, T>> {
        let (idx, cell) = self.inner.next_back()?;
        Some(CellRef::new(self.width, idx, cell.as_ref()))
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable handles to the cells of a grid in row-major order.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    width: usize,
    inner: Enumerate<slice::IterMut<'a, Option<T>>>,
}
impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = CellMut<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<CellMut<'a, T>> {
        let (idx, cell) = self.inner.next()?;
        Some(CellMut::new(self.width, idx, cell))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<CellMut<'a, T>> {
        let (idx, cell) = self.inner.next_back()?;
        Some(CellMut::new(self.width, idx, cell))
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Grid2D<T> {
    /// Returns an iterator over all the cells in the grid, in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            width: self.width,
            inner: self.cells.iter().enumerate(),
        }
    }
    /// Returns an iterator over mutable handles to all the cells in the grid,
    /// in row-major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            width: self.width,
            inner: self.cells.iter_mut().enumerate(),
        }
    }
    /// Calls `f` once for every cell in the grid, in row-major order.
    ///
    /// The handle passed to `f` can read and overwrite its cell, but cannot
    /// outlive the call.
    pub fn for_each_cell(&mut self, mut f: impl FnMut(CellMut<'_, T>)) -> &mut Self {
        for cell in self.iter_mut() {
            f(cell);
        }
        self
    }
}

impl<'a, T> IntoIterator for &'a Grid2D<T> {
    type Item = CellRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Grid2D<T> {
    type Item = CellMut<'a, T>;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
