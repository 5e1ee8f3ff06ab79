// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Non-owning strided 2-D views.
//!
//! A grid view describes `height` rows of `width` elements in a row-major
//! buffer whose rows are `stride` elements apart. Row `i` is the
//! [`SeqView`] of length `width` at `base + i * stride`. This covers a whole
//! matrix, a sub-rectangle of a larger image, and a block of memory handed
//! over by foreign code, all without copying.
//!
//! ```text
//!   base
//!    │
//!    ▼      width        padding
//!   ┌───┬───┬───┬───┐┌───┬───┐
//!   │0,0│0,1│0,2│0,3││ · │ · │   row 0
//!   ├───┼───┼───┼───┤├───┼───┤
//!   │1,0│1,1│1,2│1,3││ · │ · │   row 1 = base + stride
//!   └───┴───┴───┴───┘└───┴───┘
//!   ◄──────────── stride ──────►
//! ```

use crate::{GridError, GridLayout, SeqView, SeqViewMut};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr;

/// A read-only strided view over a 2-D grid.
///
/// `GridView` is `Copy`; copies share the underlying elements.
///
/// # Examples
/// ```
/// use grid_core::GridView;
///
/// // A 2x3 grid stored with 5 elements per row.
/// let data = [0, 1, 2, 9, 9, 3, 4, 5];
/// let g = GridView::new(2, 3, 5, &data).unwrap();
/// assert_eq!(g[1][2], 5);
/// assert_eq!(g[(0, 1)], 1);
/// assert_eq!(*g.clamp_get(7, -3), 3);
/// ```
pub struct GridView<'a, T> {
    layout: GridLayout,
    ptr: *const T,
    _marker: PhantomData<&'a [T]>,
}

// SAFETY: a `GridView` grants the access of a `&[T]`.
unsafe impl<T: Sync> Send for GridView<'_, T> {}
unsafe impl<T: Sync> Sync for GridView<'_, T> {}

impl<T> Clone for GridView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridView<'_, T> {}

/// The empty `0x0` view with a null base.
impl<T> Default for GridView<'_, T> {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            ptr: ptr::null(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> GridView<'a, T> {
    /// Views `data` as a `height x width` grid with the given row stride.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidStride`] if `stride < width`, and
    /// [`GridError::BufferTooSmall`] if `data` cannot reach the last row.
    pub fn new(
        height: usize,
        width: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, GridError> {
        Self::from_layout(GridLayout::new(height, width, stride)?, data)
    }

    /// Views `data` with an existing layout.
    pub fn from_layout(layout: GridLayout, data: &'a [T]) -> Result<Self, GridError> {
        let required = layout.span();
        if data.len() < required {
            return Err(GridError::BufferTooSmall {
                layout,
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            layout,
            ptr: data.as_ptr(),
            _marker: PhantomData,
        })
    }

    /// Creates a view from a raw base pointer.
    ///
    /// This is the entry point for read-only buffers owned by foreign code.
    ///
    /// # Safety
    /// `stride >= width`, and for every row `i < height` the range
    /// `[ptr + i * stride, ptr + i * stride + width)` must hold initialised
    /// `T` that stay valid and unmutated for `'a`.
    pub unsafe fn from_raw_parts(height: usize, width: usize, stride: usize, ptr: *const T) -> Self {
        Self::from_layout_unchecked(GridLayout::new_unchecked(height, width, stride), ptr)
    }

    /// # Safety
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    pub(crate) unsafe fn from_layout_unchecked(layout: GridLayout, ptr: *const T) -> Self {
        debug_assert!(
            layout.is_empty() || !ptr.is_null(),
            "null base for non-empty grid {layout}"
        );
        Self {
            layout,
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Row stride in bytes, for byte-oriented pointer-and-pitch APIs.
    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.layout.stride() * std::mem::size_of::<T>()
    }

    /// Returns `true` if the view has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Returns `true` iff `(row, col)` lies inside the logical grid.
    pub fn is_inside(&self, row: isize, col: isize) -> bool {
        self.layout.is_inside(row, col)
    }

    /// Pointer to the element at row 0, column 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Reinterprets the origin pointer as a pointer to `U`.
    pub fn cast<U>(&self) -> *const U {
        self.ptr.cast()
    }

    /// Row `i` as a sequence view of length `width`.
    ///
    /// # Panics
    /// Panics if `i >= height`.
    pub fn row(&self, i: usize) -> SeqView<'a, T> {
        assert!(
            i < self.height(),
            "row {i} out of range for grid of height {}",
            self.height()
        );
        // SAFETY: bounds checked above.
        unsafe { self.row_unchecked(i) }
    }

    /// Row `i` without a release-mode bounds check.
    ///
    /// # Safety
    /// `i` must be less than [`height`](Self::height).
    pub unsafe fn row_unchecked(&self, i: usize) -> SeqView<'a, T> {
        debug_assert!(
            i < self.height(),
            "row {i} out of range for grid of height {}",
            self.height()
        );
        SeqView::from_raw_parts(
            self.width(),
            self.ptr.wrapping_add(self.layout.offset(i, 0)),
        )
    }

    /// Returns the element at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row < self.height() && col < self.width() {
            // SAFETY: both coordinates are in range.
            Some(unsafe { &*self.ptr.add(self.layout.offset(row, col)) })
        } else {
            None
        }
    }

    /// Returns the element at `(row, col)` after saturating both coordinates
    /// into the grid, as used for edge-replicating border reads.
    ///
    /// # Panics
    /// Panics if the grid is empty (`height == 0` or `width == 0`).
    pub fn clamp_get(&self, row: isize, col: isize) -> &'a T {
        let (r, c) = self.layout.clamp(row, col);
        // SAFETY: `clamp` only returns in-range coordinates.
        unsafe { &*self.ptr.add(self.layout.offset(r, c)) }
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> Rows<'a, T> {
        Rows {
            view: *self,
            next: 0,
            end: self.height(),
        }
    }

    /// A `height x width` sub-grid whose top-left corner is `(top, left)`.
    ///
    /// The window shares this view's stride and storage.
    ///
    /// # Errors
    /// Returns [`GridError::WindowOutOfBounds`] if the window does not fit.
    pub fn window(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Result<GridView<'a, T>, GridError> {
        let layout = self.layout.window(top, left, height, width)?;
        Ok(GridView {
            layout,
            ptr: self.ptr.wrapping_add(self.layout.offset(top, left)),
            _marker: PhantomData,
        })
    }
}

impl<T> Index<usize> for GridView<'_, T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        self.row(row).as_slice()
    }
}

impl<T> Index<(usize, usize)> for GridView<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row(row).as_slice()[col]
    }
}

impl<T> fmt::Debug for GridView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("layout", &self.layout)
            .field("ptr", &self.ptr)
            .finish()
    }
}

/// A mutable strided view over a 2-D grid.
///
/// Rows of a valid layout never overlap, so handing out one mutable row per
/// index (see [`rows_mut`](GridViewMut::rows_mut)) is sound.
pub struct GridViewMut<'a, T> {
    layout: GridLayout,
    ptr: *mut T,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a `GridViewMut` grants the access of a `&mut [T]`.
unsafe impl<T: Send> Send for GridViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for GridViewMut<'_, T> {}

impl<T> Default for GridViewMut<'_, T> {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            ptr: ptr::null_mut(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> GridViewMut<'a, T> {
    /// Mutable counterpart of [`GridView::new`].
    pub fn new(
        height: usize,
        width: usize,
        stride: usize,
        data: &'a mut [T],
    ) -> Result<Self, GridError> {
        Self::from_layout(GridLayout::new(height, width, stride)?, data)
    }

    /// Mutable counterpart of [`GridView::from_layout`].
    pub fn from_layout(layout: GridLayout, data: &'a mut [T]) -> Result<Self, GridError> {
        let required = layout.span();
        if data.len() < required {
            return Err(GridError::BufferTooSmall {
                layout,
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            layout,
            ptr: data.as_mut_ptr(),
            _marker: PhantomData,
        })
    }

    /// # Safety
    /// As [`GridView::from_raw_parts`], and nothing else may access the
    /// addressed rows for `'a`.
    pub unsafe fn from_raw_parts(height: usize, width: usize, stride: usize, ptr: *mut T) -> Self {
        Self::from_layout_unchecked(GridLayout::new_unchecked(height, width, stride), ptr)
    }

    /// # Safety
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    pub(crate) unsafe fn from_layout_unchecked(layout: GridLayout, ptr: *mut T) -> Self {
        debug_assert!(
            layout.is_empty() || !ptr.is_null(),
            "null base for non-empty grid {layout}"
        );
        Self {
            layout,
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.layout.stride() * std::mem::size_of::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn is_inside(&self, row: isize, col: isize) -> bool {
        self.layout.is_inside(row, col)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    pub fn cast<U>(&self) -> *const U {
        self.ptr.cast_const().cast()
    }

    pub fn cast_mut<U>(&mut self) -> *mut U {
        self.ptr.cast()
    }

    /// Read-only view of the same grid, borrowed from `self`.
    pub fn as_view(&self) -> GridView<'_, T> {
        // SAFETY: `self` upholds the read-only contract while borrowed.
        unsafe { GridView::from_layout_unchecked(self.layout, self.ptr) }
    }

    /// Converts into a read-only view with the full lifetime `'a`.
    pub fn into_view(self) -> GridView<'a, T> {
        // SAFETY: `self` is consumed, so no mutable access remains.
        unsafe { GridView::from_layout_unchecked(self.layout, self.ptr) }
    }

    /// Mutable view of the same grid for a shorter lifetime.
    pub fn reborrow(&mut self) -> GridViewMut<'_, T> {
        GridViewMut {
            layout: self.layout,
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }

    /// # Panics
    /// Panics if `i >= height`.
    pub fn row(&self, i: usize) -> SeqView<'_, T> {
        self.as_view().row(i)
    }

    /// # Panics
    /// Panics if `i >= height`.
    pub fn row_mut(&mut self, i: usize) -> SeqViewMut<'_, T> {
        self.reborrow().into_row_mut(i)
    }

    /// Consumes the view, returning row `i` with the full lifetime `'a`.
    ///
    /// # Panics
    /// Panics if `i >= height`.
    pub fn into_row_mut(self, i: usize) -> SeqViewMut<'a, T> {
        assert!(
            i < self.height(),
            "row {i} out of range for grid of height {}",
            self.height()
        );
        // SAFETY: bounds checked above; the row lies inside the view.
        unsafe {
            SeqViewMut::from_raw_parts(
                self.width(),
                self.ptr.wrapping_add(self.layout.offset(i, 0)),
            )
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.as_view().get(row, col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.height() && col < self.width() {
            // SAFETY: both coordinates are in range.
            Some(unsafe { &mut *self.ptr.add(self.layout.offset(row, col)) })
        } else {
            None
        }
    }

    /// See [`GridView::clamp_get`].
    ///
    /// # Panics
    /// Panics if the grid is empty.
    pub fn clamp_get(&self, row: isize, col: isize) -> &T {
        self.as_view().clamp_get(row, col)
    }

    pub fn rows(&self) -> Rows<'_, T> {
        self.as_view().rows()
    }

    /// Iterates over mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        self.reborrow().into_rows_mut()
    }

    pub fn into_rows_mut(self) -> RowsMut<'a, T> {
        RowsMut {
            layout: self.layout,
            ptr: self.ptr,
            next: 0,
            end: self.layout.height(),
            _marker: PhantomData,
        }
    }

    /// Read-only window; see [`GridView::window`].
    pub fn window(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Result<GridView<'_, T>, GridError> {
        self.as_view().window(top, left, height, width)
    }

    /// Mutable window sharing this view's stride and storage.
    pub fn window_mut(
        &mut self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Result<GridViewMut<'_, T>, GridError> {
        let layout = self.layout.window(top, left, height, width)?;
        Ok(GridViewMut {
            layout,
            ptr: self.ptr.wrapping_add(self.layout.offset(top, left)),
            _marker: PhantomData,
        })
    }

    /// Sets every logical element to `value`. Padding is left untouched.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for mut row in self.rows_mut() {
            row.fill(value.clone());
        }
    }

    /// Copies `src` into this view row by row, each side using its own stride.
    ///
    /// # Errors
    /// Returns [`GridError::ShapeMismatch`] if the logical dimensions differ.
    pub fn copy_from(&mut self, src: &GridView<'_, T>) -> Result<(), GridError>
    where
        T: Clone,
    {
        if self.height() != src.height() || self.width() != src.width() {
            return Err(GridError::ShapeMismatch {
                op: "copy_from",
                dst: self.layout,
                src: src.layout(),
            });
        }
        for (mut dst, src) in self.rows_mut().zip(src.rows()) {
            dst.clone_from_slice(src.as_slice());
        }
        Ok(())
    }
}

impl<T> Index<usize> for GridViewMut<'_, T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        self.row(row).as_slice()
    }
}

impl<T> IndexMut<usize> for GridViewMut<'_, T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        self.row_mut(row).into_slice()
    }
}

impl<T> Index<(usize, usize)> for GridViewMut<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for GridViewMut<'_, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self[row][col]
    }
}

impl<'a, T> From<GridViewMut<'a, T>> for GridView<'a, T> {
    fn from(view: GridViewMut<'a, T>) -> Self {
        view.into_view()
    }
}

impl<T> fmt::Debug for GridViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridViewMut")
            .field("layout", &self.layout)
            .field("ptr", &self.ptr)
            .finish()
    }
}

/// Iterator over the rows of a [`GridView`].
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    view: GridView<'a, T>,
    next: usize,
    end: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = SeqView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        // SAFETY: `next < end <= height`.
        let row = unsafe { self.view.row_unchecked(self.next) };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end < height`.
        Some(unsafe { self.view.row_unchecked(self.end) })
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
impl<T> FusedIterator for Rows<'_, T> {}

/// Iterator over the mutable rows of a [`GridViewMut`].
pub struct RowsMut<'a, T> {
    layout: GridLayout,
    ptr: *mut T,
    next: usize,
    end: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: yields disjoint `&mut [T]`-like rows.
unsafe impl<T: Send> Send for RowsMut<'_, T> {}
unsafe impl<T: Sync> Sync for RowsMut<'_, T> {}

impl<'a, T> RowsMut<'a, T> {
    fn row(&self, i: usize) -> SeqViewMut<'a, T> {
        // SAFETY: callers pass `i < height`, and each index is yielded once,
        // so the returned rows never alias.
        unsafe {
            SeqViewMut::from_raw_parts(
                self.layout.width(),
                self.ptr.wrapping_add(self.layout.offset(i, 0)),
            )
        }
    }
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = SeqViewMut<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let row = self.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for RowsMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.row(self.end))
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}
impl<T> FusedIterator for RowsMut<'_, T> {}

impl<T> fmt::Debug for RowsMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowsMut")
            .field("layout", &self.layout)
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 grid, stride 4, padding filled with -1.
    fn padded() -> Vec<i32> {
        vec![0, 1, -1, -1, 2, 3, -1, -1, 4, 5, -1, -1]
    }

    #[test]
    fn test_accessors() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 2);
        assert_eq!(g.stride(), 4);
        assert_eq!(g.stride_bytes(), 16);
        assert_eq!(g.as_ptr(), data.as_ptr());
        assert!(!g.is_empty());
    }

    #[test]
    fn test_rows_skip_padding() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        assert_eq!(g.row(1).as_slice(), &[2, 3]);
        assert_eq!(g[2], [4, 5]);
        let flat: Vec<i32> = g.rows().flat_map(|r| r.iter().copied()).collect();
        assert_eq!(flat, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(g.rows().rev().next().unwrap().as_slice(), &[4, 5]);
        assert_eq!(g.rows().len(), 3);
    }

    #[test]
    fn test_element_aliases_flat_offset() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        for i in 0..g.height() {
            for j in 0..g.width() {
                let via_row: *const i32 = &g[i][j];
                let via_ptr = g.as_ptr().wrapping_add(i * g.stride() + j);
                assert_eq!(via_row, via_ptr);
            }
        }
    }

    #[test]
    fn test_buffer_too_small() {
        let data = [0; 9];
        let err = GridView::new(3, 2, 4, &data).unwrap_err();
        assert!(matches!(
            err,
            GridError::BufferTooSmall {
                required: 10,
                actual: 9,
                ..
            }
        ));
        // The last row needs no padding.
        assert!(GridView::new(3, 2, 4, &[0; 10]).is_ok());
    }

    #[test]
    fn test_invalid_stride_rejected() {
        let data = [0; 16];
        assert!(matches!(
            GridView::new(2, 4, 3, &data),
            Err(GridError::InvalidStride { .. })
        ));
    }

    #[test]
    fn test_get_and_is_inside() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        assert_eq!(g.get(2, 1), Some(&5));
        assert_eq!(g.get(2, 2), None);
        assert_eq!(g.get(3, 0), None);
        assert!(g.is_inside(2, 1));
        assert!(!g.is_inside(-1, 1));
    }

    #[test]
    fn test_clamp_get_saturates() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        assert_eq!(*g.clamp_get(-4, -4), 0);
        assert_eq!(*g.clamp_get(-1, 7), 1);
        assert_eq!(*g.clamp_get(99, 0), 4);
        assert_eq!(*g.clamp_get(99, 99), 5);
        assert_eq!(*g.clamp_get(1, 1), 3);
    }

    #[test]
    #[should_panic(expected = "clamp on empty grid")]
    fn test_clamp_get_empty_panics() {
        let g: GridView<'_, i32> = GridView::default();
        g.clamp_get(0, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_out_of_range_panics() {
        let data = padded();
        let g = GridView::new(3, 2, 4, &data).unwrap();
        g.row(3);
    }

    #[test]
    fn test_window() {
        let data: Vec<i32> = (0..20).collect();
        let g = GridView::new(4, 5, 5, &data).unwrap();
        let w = g.window(1, 2, 2, 3).unwrap();
        assert_eq!(w.stride(), 5);
        assert_eq!(w[0], [7, 8, 9]);
        assert_eq!(w[1], [12, 13, 14]);
        assert!(g.window(3, 0, 2, 5).is_err());
    }

    #[test]
    fn test_raw_parts_read_only() {
        let data = padded();
        // SAFETY: `data` outlives the view and holds the addressed rows.
        let g = unsafe { GridView::from_raw_parts(2, 2, 4, data.as_ptr().add(4)) };
        assert_eq!(g[0], [2, 3]);
        assert_eq!(g[(1, 1)], 5);
        assert_eq!(g.cast::<u8>() as usize, data[4..].as_ptr() as usize);
    }

    #[test]
    fn test_raw_parts_mut_and_cast_mut() {
        let mut data = padded();
        let base = data.as_mut_ptr();
        // SAFETY: `data` outlives the view and nothing else touches it meanwhile.
        let mut g = unsafe { GridViewMut::from_raw_parts(3, 2, 4, base) };
        assert_eq!(g.layout(), GridLayout::new(3, 2, 4).unwrap());
        g[(2, 1)] = 50;

        let bytes = g.cast_mut::<u8>();
        assert_eq!(bytes as usize, base as usize);
        // SAFETY: row 1 starts one byte-stride in, inside the 48-byte buffer.
        unsafe { *bytes.add(g.stride_bytes()).cast::<i32>() = 20 };
        assert_eq!(g[1], [20, 3]);
        assert_eq!(g.cast::<u8>() as usize, base as usize);
        drop(g);
        assert_eq!(data, vec![0, 1, -1, -1, 20, 3, -1, -1, 4, 50, -1, -1]);
    }

    #[test]
    fn test_mut_view_writes_rows() {
        let mut data = padded();
        {
            let mut g = GridViewMut::new(3, 2, 4, &mut data).unwrap();
            g[(0, 0)] = 10;
            g.row_mut(1)[1] = 30;
            *g.get_mut(2, 0).unwrap() = 40;
            assert_eq!(g.get_mut(2, 2), None);
            assert_eq!(g.as_view()[1], [2, 30]);
        }
        assert_eq!(data, vec![10, 1, -1, -1, 2, 30, -1, -1, 40, 5, -1, -1]);
    }

    #[test]
    fn test_fill_leaves_padding() {
        let mut data = padded();
        GridViewMut::new(3, 2, 4, &mut data).unwrap().fill(7);
        assert_eq!(data, vec![7, 7, -1, -1, 7, 7, -1, -1, 7, 7, -1, -1]);
    }

    #[test]
    fn test_copy_from_between_strides() {
        let src_data: Vec<i32> = (0..15).collect();
        let src = GridView::new(3, 3, 5, &src_data).unwrap();

        let mut dst_data = vec![0; 9];
        let mut dst = GridViewMut::new(3, 3, 3, &mut dst_data).unwrap();
        dst.copy_from(&src).unwrap();
        drop(dst);
        assert_eq!(dst_data, vec![0, 1, 2, 5, 6, 7, 10, 11, 12]);
    }

    #[test]
    fn test_copy_from_shape_mismatch() {
        let src_data = [0; 6];
        let src = GridView::new(2, 3, 3, &src_data).unwrap();
        let mut dst_data = [0; 6];
        let mut dst = GridViewMut::new(3, 2, 2, &mut dst_data).unwrap();
        assert!(matches!(
            dst.copy_from(&src),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_window_mut_writes_into_parent() {
        let mut data = vec![0; 16];
        let mut g = GridViewMut::new(4, 4, 4, &mut data).unwrap();
        g.window_mut(1, 1, 2, 2).unwrap().fill(1);
        drop(g);
        assert_eq!(
            data,
            vec![0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_rows_mut_are_disjoint() {
        let mut data = padded();
        let mut g = GridViewMut::new(3, 2, 4, &mut data).unwrap();
        let mut rows: Vec<_> = g.rows_mut().collect();
        let (first, rest) = rows.split_at_mut(1);
        first[0][0] = rest[1][1];
        drop(rows);
        assert_eq!(g[0], [5, 1]);
    }

    #[test]
    fn test_into_view() {
        let mut data = [1, 2, 3, 4];
        let g = GridViewMut::new(2, 2, 2, &mut data).unwrap();
        let v: GridView<'_, i32> = g.into();
        assert_eq!(v[(1, 0)], 3);
    }
}
