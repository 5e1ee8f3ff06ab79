// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Non-owning views over a contiguous run of elements.
//!
//! [`SeqView`] and [`SeqViewMut`] are `(len, ptr)` pairs that borrow storage
//! owned elsewhere: a slice, a `Vec`, a row of a grid, or a caller buffer
//! handed over as a raw pointer. Copying a view never copies elements.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Range};
use std::ptr;

/// A read-only view of `len` contiguous elements.
///
/// The view is tied to the lifetime `'a` of the storage it borrows. It is
/// `Copy`, like `&[T]`.
///
/// # Examples
/// ```
/// use grid_core::SeqView;
/// let v = vec![1, 2, 3];
/// let s = SeqView::from(&v);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s[1], 2);
/// assert_eq!(s.iter().sum::<i32>(), 6);
/// ```
pub struct SeqView<'a, T> {
    len: usize,
    ptr: *const T,
    _marker: PhantomData<&'a [T]>,
}

// SAFETY: a `SeqView` grants exactly the access of a `&[T]`.
unsafe impl<T: Sync> Send for SeqView<'_, T> {}
unsafe impl<T: Sync> Sync for SeqView<'_, T> {}

impl<T> Clone for SeqView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SeqView<'_, T> {}

/// The empty view: zero length and a null base pointer.
impl<T> Default for SeqView<'_, T> {
    fn default() -> Self {
        Self {
            len: 0,
            ptr: ptr::null(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> SeqView<'a, T> {
    /// Creates a view from a raw base pointer and a length.
    ///
    /// This is also the way to expose a `*const T` from foreign code through
    /// the same indexing interface as a borrowed slice.
    ///
    /// # Safety
    /// If `len > 0`, `ptr` must be non-null, aligned, and point at `len`
    /// initialised `T` that stay valid and unmutated for `'a`.
    pub unsafe fn from_raw_parts(len: usize, ptr: *const T) -> Self {
        debug_assert!(len == 0 || !ptr.is_null(), "null base for a view of {len} elements");
        Self {
            len,
            ptr,
            _marker: PhantomData,
        }
    }

    /// Borrows a slice as a view.
    pub fn from_slice(data: &'a [T]) -> Self {
        Self {
            len: data.len(),
            ptr: data.as_ptr(),
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base pointer. Null for a default-constructed view.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// The half-open pointer range `[begin, end)` covered by the view.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.ptr..self.ptr.wrapping_add(self.len)
    }

    /// Reinterprets the base pointer as a pointer to `U`.
    ///
    /// Nothing about `U` is checked; the caller owns the reinterpretation.
    pub fn cast<U>(&self) -> *const U {
        self.ptr.cast()
    }

    /// The viewed elements as a slice with the view's own lifetime.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        if self.len == 0 {
            return &[];
        }
        // SAFETY: non-empty views point at `len` valid elements for `'a`.
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Returns the element at `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<&'a T> {
        self.as_slice().get(i)
    }

    /// Returns the element at `i` without a release-mode bounds check.
    ///
    /// # Safety
    /// `i` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        debug_assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        &*self.ptr.add(i)
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T> Deref for SeqView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for SeqView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> From<&'a [T]> for SeqView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<'a, T> From<&'a Vec<T>> for SeqView<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        Self::from_slice(data.as_slice())
    }
}

impl<'a, T> From<SeqViewMut<'a, T>> for SeqView<'a, T> {
    fn from(view: SeqViewMut<'a, T>) -> Self {
        Self::from_slice(view.into_slice())
    }
}

impl<T: PartialEq> PartialEq for SeqView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for SeqView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A mutable view of `len` contiguous elements.
///
/// Behaves like `&'a mut [T]`: not `Copy`, but it can be
/// [reborrowed](SeqViewMut::reborrow) for a shorter lifetime or turned into a
/// read-only [`SeqView`].
pub struct SeqViewMut<'a, T> {
    len: usize,
    ptr: *mut T,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a `SeqViewMut` grants exactly the access of a `&mut [T]`.
unsafe impl<T: Send> Send for SeqViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for SeqViewMut<'_, T> {}

impl<T> Default for SeqViewMut<'_, T> {
    fn default() -> Self {
        Self {
            len: 0,
            ptr: ptr::null_mut(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> SeqViewMut<'a, T> {
    /// Creates a mutable view from a raw base pointer and a length.
    ///
    /// # Safety
    /// If `len > 0`, `ptr` must be non-null, aligned, and point at `len`
    /// initialised `T` that nothing else accesses for `'a`.
    pub unsafe fn from_raw_parts(len: usize, ptr: *mut T) -> Self {
        debug_assert!(len == 0 || !ptr.is_null(), "null base for a view of {len} elements");
        Self {
            len,
            ptr,
            _marker: PhantomData,
        }
    }

    /// Borrows a mutable slice as a view.
    pub fn from_slice(data: &'a mut [T]) -> Self {
        Self {
            len: data.len(),
            ptr: data.as_mut_ptr(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_ptr()..self.as_ptr().wrapping_add(self.len)
    }

    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.ptr..self.ptr.wrapping_add(self.len)
    }

    /// Reinterprets the base pointer as a pointer to `U`.
    pub fn cast<U>(&self) -> *const U {
        self.ptr.cast_const().cast()
    }

    /// Mutable counterpart of [`cast`](Self::cast).
    pub fn cast_mut<U>(&mut self) -> *mut U {
        self.ptr.cast()
    }

    /// Read-only view of the same elements, borrowed from `self`.
    pub fn as_view(&self) -> SeqView<'_, T> {
        SeqView::from_slice(self.as_slice())
    }

    /// Mutable view of the same elements for a shorter lifetime.
    pub fn reborrow(&mut self) -> SeqViewMut<'_, T> {
        SeqViewMut {
            len: self.len,
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            return &[];
        }
        // SAFETY: non-empty views point at `len` valid elements.
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            return &mut [];
        }
        // SAFETY: non-empty views point at `len` valid elements, exclusively.
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    /// Consumes the view, returning a slice with the full lifetime `'a`.
    pub fn into_slice(self) -> &'a mut [T] {
        if self.len == 0 {
            return &mut [];
        }
        // SAFETY: as above; `self` is consumed so the borrow is not duplicated.
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// # Safety
    /// `i` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        &*self.ptr.add(i)
    }

    /// # Safety
    /// `i` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        &mut *self.ptr.add(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Deref for SeqViewMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SeqViewMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for SeqViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for SeqViewMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for SeqViewMut<'a, T> {
    fn from(data: &'a mut Vec<T>) -> Self {
        Self::from_slice(data.as_mut_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_null() {
        let v: SeqView<'_, f32> = SeqView::default();
        assert!(v.is_empty());
        assert!(v.as_ptr().is_null());
        assert!(v.as_slice().is_empty());
        assert_eq!(v.iter().count(), 0);

        let m: SeqViewMut<'_, f32> = SeqViewMut::default();
        assert!(m.as_ptr().is_null());
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn test_from_vec_borrows_storage() {
        let data = vec![1.0f32, 2.0, 3.0];
        let v = SeqView::from(&data);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_ptr(), data.as_ptr());
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_copy_is_shallow() {
        let data = [5u8, 6, 7];
        let a = SeqView::from_slice(&data);
        let b = a;
        assert_eq!(a.as_ptr(), b.as_ptr());
        assert_eq!(a, b);
    }

    #[test]
    fn test_ptr_range() {
        let data = [1u16, 2, 3, 4];
        let v = SeqView::from_slice(&data[1..]);
        let range = v.as_ptr_range();
        assert_eq!(range, data[1..].as_ptr_range());
    }

    #[test]
    fn test_raw_parts_read_only() {
        let data = [10i32, 20, 30, 40];
        // SAFETY: `data` outlives the view and holds 3 elements from index 1.
        let v = unsafe { SeqView::from_raw_parts(3, data.as_ptr().add(1)) };
        assert_eq!(v.as_slice(), &[20, 30, 40]);
        assert_eq!(unsafe { *v.get_unchecked(2) }, 40);
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let data = [1, 2];
        let v = SeqView::from_slice(&data);
        let _ = v[2];
    }

    #[test]
    fn test_cast_reinterprets_pointer() {
        let data = [0x0102_0304u32];
        let v = SeqView::from_slice(&data);
        let bytes = v.cast::<u8>();
        assert_eq!(bytes as usize, data.as_ptr() as usize);
    }

    #[test]
    fn test_mut_view_writes_through() {
        let mut data = vec![0; 4];
        {
            let mut m = SeqViewMut::from(&mut data);
            m[1] = 7;
            *m.get_mut(3).unwrap() = 9;
            for x in m.reborrow() {
                *x += 1;
            }
            assert_eq!(m.as_view().as_slice(), &[1, 8, 1, 10]);
        }
        assert_eq!(data, vec![1, 8, 1, 10]);
    }

    #[test]
    fn test_unchecked_mut_access() {
        let mut data = [1, 2, 3];
        let mut m = SeqViewMut::from_slice(&mut data);
        // SAFETY: both indices are below `len() == 3`.
        unsafe {
            *m.get_unchecked_mut(0) = 10;
            *m.get_unchecked_mut(2) += 5;
        }
        assert_eq!(m.as_slice(), &[10, 2, 8]);
    }

    #[test]
    fn test_mut_into_read_only() {
        let mut data = [3, 4];
        let m = SeqViewMut::from_slice(&mut data);
        let v: SeqView<'_, i32> = m.into();
        assert_eq!(v.as_slice(), &[3, 4]);
    }

    #[test]
    fn test_debug_format() {
        let data = [1, 2];
        let v = SeqView::from_slice(&data);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }
}
