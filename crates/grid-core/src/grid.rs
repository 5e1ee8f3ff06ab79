// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owning grid: contiguous storage plus a strided view over it.

use crate::{GridError, GridLayout, GridView, GridViewMut, Rows, RowsMut, SeqView, SeqViewMut};
use std::ops::{Index, IndexMut};

/// An owned 2-D grid stored row-major in a single `Vec<T>` of
/// `height * stride` elements.
///
/// `Grid` offers the same read interface as [`GridView`] and hands out views
/// through [`view`](Grid::view) and [`view_mut`](Grid::view_mut). Views borrow
/// the grid, so the borrow checker rejects any resize while one is alive.
///
/// # Memory Layout
/// Row `i` starts at element `i * stride`; elements `width..stride` of each
/// row are padding. New slots, padding included, start as `T::default()`.
///
/// # Examples
/// ```
/// use grid_core::Grid;
///
/// let mut g: Grid<u8> = Grid::with_stride(3, 2, 4);
/// g[1][1] = 9;
/// assert_eq!(g.as_slice()[5], 9);
/// assert_eq!(g.view().row(1).as_slice(), &[0, 9]);
///
/// g.clear_and_shrink();
/// assert_eq!((g.height(), g.width(), g.stride()), (0, 0, 0));
/// ```
#[derive(Debug)]
pub struct Grid<T> {
    layout: GridLayout,
    data: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Creates an empty `0x0` grid without allocating.
    pub fn new() -> Self {
        Self {
            layout: GridLayout::default(),
            data: Vec::new(),
        }
    }

    /// Wraps an existing buffer of exactly `layout.len()` elements.
    ///
    /// # Errors
    /// Returns [`GridError::BufferSizeMismatch`] if the length is wrong.
    pub fn from_vec(layout: GridLayout, data: Vec<T>) -> Result<Self, GridError> {
        let layout = layout.validate()?;
        let expected = layout.checked_len()?;
        if data.len() != expected {
            return Err(GridError::BufferSizeMismatch {
                layout,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { layout, data })
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

    /// Elements the backing store can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Pointer to row 0, column 0 of the backing store.
    ///
    /// Invalidated by any resize or shrink.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Reinterprets the base pointer as a pointer to `U`.
    pub fn cast<U>(&self) -> *const U {
        self.data.as_ptr().cast()
    }

    pub fn cast_mut<U>(&mut self) -> *mut U {
        self.data.as_mut_ptr().cast()
    }

    /// The whole backing store, padding included.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the grid, returning its backing store.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Read-only view over the owned storage.
    pub fn view(&self) -> GridView<'_, T> {
        // SAFETY: `data` holds `height * stride >= span` elements and is
        // borrowed for the lifetime of the view.
        unsafe { GridView::from_layout_unchecked(self.layout, self.data.as_ptr()) }
    }

    /// Mutable view over the owned storage.
    pub fn view_mut(&mut self) -> GridViewMut<'_, T> {
        // SAFETY: as in `view`, with exclusive access through `&mut self`.
        unsafe { GridViewMut::from_layout_unchecked(self.layout, self.data.as_mut_ptr()) }
    }

    /// # Panics
    /// Panics if `i >= height`.
    pub fn row(&self, i: usize) -> SeqView<'_, T> {
        SeqView::from_slice(&self[i])
    }

    /// # Panics
    /// Panics if `i >= height`.
    pub fn row_mut(&mut self, i: usize) -> SeqViewMut<'_, T> {
        SeqViewMut::from_slice(&mut self[i])
    }

    pub fn rows(&self) -> Rows<'_, T> {
        self.view().rows()
    }

    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        self.view_mut().into_rows_mut()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height() && col < self.width() {
            self.data.get(self.layout.offset(row, col))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.height() && col < self.width() {
            self.data.get_mut(self.layout.offset(row, col))
        } else {
            None
        }
    }

    /// See [`GridView::clamp_get`].
    ///
    /// # Panics
    /// Panics if the grid is empty.
    pub fn clamp_get(&self, row: isize, col: isize) -> &T {
        let (r, c) = self.layout.clamp(row, col);
        &self.data[self.layout.offset(r, c)]
    }

    /// Releases capacity beyond `height * stride`. Dimensions are unchanged.
    pub fn shrink_to_fit(&mut self) {
        let before = self.data.capacity();
        self.data.shrink_to_fit();
        if self.data.capacity() != before {
            tracing::debug!(
                "grid storage shrunk: capacity {} → {} elements",
                before,
                self.data.capacity()
            );
        }
    }

    /// Resets to the empty `0x0` grid and frees the backing store.
    pub fn clear_and_shrink(&mut self) {
        self.data.clear();
        self.layout = GridLayout::default();
        self.shrink_to_fit();
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Creates a tightly packed `height x width` grid.
    pub fn with_size(height: usize, width: usize) -> Self {
        Self::from_layout(GridLayout::packed(height, width))
    }

    /// Creates a `height x width` grid whose rows are `stride` elements apart.
    ///
    /// # Panics
    /// Panics if `stride < width` or if `height * stride` overflows.
    pub fn with_stride(height: usize, width: usize, stride: usize) -> Self {
        Self::from_layout(valid_layout(height, width, stride))
    }

    /// Creates a grid with the given layout, every slot `T::default()`.
    ///
    /// # Panics
    /// Panics if `stride < width` or if `height * stride` overflows.
    pub fn from_layout(layout: GridLayout) -> Self {
        let layout = checked(layout);
        Self {
            layout,
            data: vec![T::default(); layout.len()],
        }
    }

    /// Like [`with_stride`](Self::with_stride), reporting invalid layouts and
    /// allocation failure instead of panicking or aborting.
    pub fn try_with_stride(height: usize, width: usize, stride: usize) -> Result<Self, GridError> {
        let mut grid = Self::new();
        grid.try_resize_to(GridLayout::new(height, width, stride)?)?;
        Ok(grid)
    }

    /// Resizes to a tightly packed `height x width` grid.
    ///
    /// Resizing is a destructive reallocation, see [`resize_to`](Self::resize_to).
    pub fn resize(&mut self, height: usize, width: usize) {
        self.resize_to(GridLayout::packed(height, width));
    }

    /// # Panics
    /// Panics if `stride < width` or if `height * stride` overflows.
    pub fn resize_with_stride(&mut self, height: usize, width: usize, stride: usize) {
        self.resize_to(valid_layout(height, width, stride));
    }

    /// Adopts the dimensions of any view, whatever its element type.
    /// Only the layout is taken; no elements are copied.
    ///
    /// # Panics
    /// Panics if the view's stride is smaller than its width, which only a
    /// view built with [`GridView::from_raw_parts`] can carry.
    pub fn resize_like<U>(&mut self, other: &GridView<'_, U>) {
        self.resize_to(valid_layout(other.height(), other.width(), other.stride()));
    }

    /// Resizes the backing store to exactly `layout.len()` elements.
    ///
    /// Old values are **not** remapped to their new row positions: the store
    /// is resized as a flat buffer, keeping a prefix of the old elements and
    /// filling new slots with `T::default()`. Callers that need the content
    /// must copy it out first.
    ///
    /// # Panics
    /// Panics if `stride < width` or if `height * stride` overflows `usize`.
    pub fn resize_to(&mut self, layout: GridLayout) {
        let layout = checked(layout);
        let len = layout.len();
        let before = self.data.capacity();
        self.data.resize(len, T::default());
        self.layout = layout;
        if self.data.capacity() != before {
            tracing::debug!(
                "grid storage reallocated for {}: capacity {} → {} elements",
                layout,
                before,
                self.data.capacity()
            );
        }
    }

    /// Fallible [`resize_to`](Self::resize_to).
    ///
    /// # Errors
    /// Returns [`GridError::InvalidStride`] if `stride < width`,
    /// [`GridError::SizeOverflow`] if `height * stride` overflows and
    /// [`GridError::AllocationFailed`] if the allocator refuses the request.
    /// On error the grid is left unchanged.
    pub fn try_resize_to(&mut self, layout: GridLayout) -> Result<(), GridError> {
        let layout = layout.validate()?;
        let len = layout.checked_len()?;
        if let Some(additional) = len.checked_sub(self.data.len()) {
            if let Err(source) = self.data.try_reserve_exact(additional) {
                tracing::warn!("grid allocation for {} failed: {}", layout, source);
                return Err(GridError::AllocationFailed {
                    elements: len,
                    source,
                });
            }
        }
        self.resize_to(layout);
        Ok(())
    }

    /// Replaces the contents with a copy of `src`.
    ///
    /// The result is always tightly packed (`stride == width`), whatever the
    /// stride of `src`; rows are copied one at a time so each side keeps its
    /// own stride.
    pub fn assign_from_view(&mut self, src: &GridView<'_, T>) {
        self.resize(src.height(), src.width());
        for (mut dst, src) in self.rows_mut().zip(src.rows()) {
            dst.clone_from_slice(src.as_slice());
        }
    }
}

fn valid_layout(height: usize, width: usize, stride: usize) -> GridLayout {
    match GridLayout::new(height, width, stride) {
        Ok(layout) => layout,
        Err(e) => panic!("{e}"),
    }
}

fn checked(layout: GridLayout) -> GridLayout {
    valid_layout(layout.height(), layout.width(), layout.stride())
}

/// Deep copy with the same `(height, width, stride)`.
///
/// The store is copied in bulk, padding included, since both sides share
/// one layout. `clone_from` reuses the destination's allocation.
impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.layout = source.layout;
        self.data.clone_from(&source.data);
    }
}

/// Packed deep copy of a view.
impl<T: Clone + Default> From<GridView<'_, T>> for Grid<T> {
    fn from(src: GridView<'_, T>) -> Self {
        let mut grid = Self::new();
        grid.assign_from_view(&src);
        grid
    }
}

impl<T: Clone + Default> From<&GridViewMut<'_, T>> for Grid<T> {
    fn from(src: &GridViewMut<'_, T>) -> Self {
        Self::from(src.as_view())
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        assert!(
            row < self.height(),
            "row {row} out of range for grid of height {}",
            self.height()
        );
        let start = self.layout.offset(row, 0);
        &self.data[start..start + self.width()]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.height(),
            "row {row} out of range for grid of height {}",
            self.height()
        );
        let start = self.layout.offset(row, 0);
        let end = start + self.width();
        &mut self.data[start..end]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self[row][col]
    }
}
