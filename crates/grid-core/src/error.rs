// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for checked grid construction.

use crate::GridLayout;

/// Errors reported by the checked constructors and fallible allocation paths.
///
/// Index-out-of-range is not represented here: indexing with a bad row or
/// column is a caller bug and panics.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The row stride is smaller than the logical width, so rows would overlap.
    #[error("invalid stride: stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },

    /// A borrowed buffer cannot hold every row the layout addresses.
    #[error("buffer too small for {layout}: need {required} elements, got {actual}")]
    BufferTooSmall {
        layout: GridLayout,
        required: usize,
        actual: usize,
    },

    /// An owned buffer does not have exactly `height * stride` elements.
    #[error("buffer size mismatch for {layout}: expected {expected} elements, got {actual}")]
    BufferSizeMismatch {
        layout: GridLayout,
        expected: usize,
        actual: usize,
    },

    /// A requested window extends past the parent grid.
    #[error("window at ({top}, {left}) of size {height}x{width} does not fit in {parent}")]
    WindowOutOfBounds {
        top: usize,
        left: usize,
        height: usize,
        width: usize,
        parent: GridLayout,
    },

    /// Two grids have different logical dimensions for a copy.
    #[error("shape mismatch for {op}: {dst} vs {src}")]
    ShapeMismatch {
        op: &'static str,
        dst: GridLayout,
        src: GridLayout,
    },

    /// `height * stride` does not fit in `usize`.
    #[error("size overflow: {height} rows of stride {stride}")]
    SizeOverflow { height: usize, stride: usize },

    /// The allocator refused to provide the backing store.
    #[error("allocation of {elements} elements failed: {source}")]
    AllocationFailed {
        elements: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}
