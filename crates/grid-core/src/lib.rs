// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # grid-core
//!
//! Strided 1-D and 2-D buffer views, plus an owning grid with the same
//! indexing interface.
//!
//! This crate provides:
//! - [`SeqView`] / [`SeqViewMut`] — non-owning views of a contiguous run of
//!   elements (a slice, a `Vec`, a grid row, or a foreign buffer).
//! - [`GridView`] / [`GridViewMut`] — non-owning views of `height` rows of
//!   `width` elements placed `stride` elements apart.
//! - [`Grid`] — owns a `height * stride` buffer and exposes it as a grid view.
//! - [`GridLayout`] — the `(height, width, stride)` triple shared by all three.
//!
//! # Ownership Model
//!
//! ```text
//!   Grid<T>  ── owns Vec<T> (height * stride)
//!      │
//!      │  view() / view_mut()          borrows the grid
//!      ▼
//!   GridView<'a, T>  ── row(i) ──►  SeqView<'a, T>  ── [j] ──►  &T
//! ```
//!
//! Views carry the lifetime of the storage they borrow, so a view taken from
//! a [`Grid`] cannot outlive it or survive a resize. Views built with
//! `from_raw_parts` are `unsafe` to create; the caller promises the buffer
//! outlives them.
//!
//! # Error Policy
//! - Out-of-range rows and columns panic: they are caller bugs.
//! - Checked constructors ([`GridView::new`], [`Grid::from_vec`],
//!   [`Grid::try_with_stride`], ...) return [`GridError`].
//! - Allocation failure in the infallible paths aborts, as with `Vec`.
//!
//! # Example
//! ```
//! use grid_core::{Grid, GridView};
//!
//! // A 2x3 region inside a buffer with 4 elements per row.
//! let image = [1, 2, 3, 0, 4, 5, 6, 0];
//! let region = GridView::new(2, 3, 4, &image).unwrap();
//!
//! // Copying packs the rows.
//! let owned = Grid::from(region);
//! assert_eq!(owned.stride(), 3);
//! assert_eq!(owned.as_slice(), &[1, 2, 3, 4, 5, 6]);
//! assert_eq!(owned[1][2], region[1][2]);
//! ```

mod error;
mod grid;
mod layout;
mod seq;
mod view;

pub use error::GridError;
pub use grid::Grid;
pub use layout::GridLayout;
pub use seq::{SeqView, SeqViewMut};
pub use view::{GridView, GridViewMut, Rows, RowsMut};
