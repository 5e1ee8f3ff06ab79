// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Grid layout descriptors and row-offset arithmetic.

use crate::GridError;
use std::fmt;

/// Describes how a 2-D grid sits in a flat, row-major buffer.
///
/// A layout is `height` rows of `width` logical elements, with consecutive
/// rows `stride` elements apart. `stride >= width` always holds for a layout
/// built through [`GridLayout::new`] or [`GridLayout::packed`]; the gap
/// `stride - width` is per-row padding that no view ever reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridLayout {
    height: usize,
    width: usize,
    stride: usize,
}

impl GridLayout {
    /// Creates a layout, rejecting strides narrower than the width.
    ///
    /// # Examples
    /// ```
    /// use grid_core::GridLayout;
    /// let l = GridLayout::new(3, 2, 4).unwrap();
    /// assert_eq!(l.len(), 12);
    /// assert_eq!(l.span(), 10);
    /// assert!(GridLayout::new(3, 4, 2).is_err());
    /// ```
    pub fn new(height: usize, width: usize, stride: usize) -> Result<Self, GridError> {
        if stride < width {
            return Err(GridError::InvalidStride { width, stride });
        }
        Ok(Self {
            height,
            width,
            stride,
        })
    }

    /// Builds a layout without checking `stride >= width`.
    pub(crate) fn new_unchecked(height: usize, width: usize, stride: usize) -> Self {
        debug_assert!(
            stride >= width,
            "invalid stride: stride {stride} is smaller than width {width}"
        );
        Self {
            height,
            width,
            stride,
        }
    }

    /// Re-checks `stride >= width` on a layout that may have come from
    /// [`new_unchecked`](Self::new_unchecked).
    pub(crate) fn validate(self) -> Result<Self, GridError> {
        Self::new(self.height, self.width, self.stride)
    }

    /// Creates a tightly packed layout (`stride == width`).
    pub fn packed(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            stride: width,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of logical elements per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Elements between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `true` if the layout addresses no elements.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Returns `true` if rows follow each other without padding.
    pub fn is_packed(&self) -> bool {
        self.stride == self.width
    }

    /// Size of an owning store for this layout: `height * stride`.
    ///
    /// # Panics
    /// Panics if the product overflows `usize`.
    pub fn len(&self) -> usize {
        match self.checked_len() {
            Ok(len) => len,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`len`](Self::len), reporting overflow instead of panicking.
    pub fn checked_len(&self) -> Result<usize, GridError> {
        self.height
            .checked_mul(self.stride)
            .ok_or(GridError::SizeOverflow {
                height: self.height,
                stride: self.stride,
            })
    }

    /// Elements a borrowed buffer must hold for every row to be addressable.
    ///
    /// The last row does not need its padding, so this is
    /// `(height - 1) * stride + width`, or 0 for an empty layout.
    pub fn span(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.height - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.width))
            .unwrap_or(usize::MAX)
    }

    /// Flat offset of `(row, col)`. No bounds check.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.stride + col
    }

    /// Returns `true` iff `0 <= row < height` and `0 <= col < width`.
    #[inline]
    pub fn is_inside(&self, row: isize, col: isize) -> bool {
        0 <= row && (row as usize) < self.height && 0 <= col && (col as usize) < self.width
    }

    /// Saturates `(row, col)` onto the nearest in-range coordinates.
    ///
    /// # Panics
    /// Panics if the layout is empty, since there is nothing to clamp to.
    pub fn clamp(&self, row: isize, col: isize) -> (usize, usize) {
        assert!(
            !self.is_empty(),
            "clamp on empty grid {self}: height and width must be non-zero"
        );
        (clamp_index(row, self.height), clamp_index(col, self.width))
    }

    /// Layout of a `height x width` window starting at `(top, left)`.
    ///
    /// The window keeps this layout's stride.
    pub fn window(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Result<Self, GridError> {
        let fits_rows = top.checked_add(height).is_some_and(|end| end <= self.height);
        let fits_cols = left.checked_add(width).is_some_and(|end| end <= self.width);
        if !fits_rows || !fits_cols {
            return Err(GridError::WindowOutOfBounds {
                top,
                left,
                height,
                width,
                parent: *self,
            });
        }
        Ok(Self {
            height,
            width,
            stride: self.stride,
        })
    }
}

fn clamp_index(i: isize, len: usize) -> usize {
    if i <= 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} (stride {})", self.height, self.width, self.stride)
    }
}
