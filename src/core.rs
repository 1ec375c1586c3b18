use std::fmt;
use std::mem;
use std::ptr;
use std::slice;

use crate::cursor::Cursor;
use crate::error::GrowVecError;
use crate::iter::GrowVecIter;
use crate::raw::RawBuf;

/// A growable contiguous container with index-addressable elements.
///
/// `GrowVec` owns its buffer exclusively. Appending is amortized O(1): when
/// a mutation needs more room than is allocated, the buffer grows to
/// `max(required, capacity * 3 / 2)`. Every reallocation moves the live
/// elements into a fresh allocation and releases the old one in a single
/// step, so no intermediate state is ever observable.
///
/// Positions inside the container are addressed either by plain index or by
/// a [`Cursor`] obtained from [`begin`](GrowVec::begin)/[`end`](GrowVec::end).
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty container with capacity 0 and no allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::dangling(),
            len: 0,
        }
    }

    /// Creates a container of `len` copies of `value`, with capacity `len`.
    #[must_use]
    pub fn with_value(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self {
            buf: RawBuf::allocate(len),
            len: 0,
        };
        for _ in 0..len {
            // SAFETY: capacity is `len`; `vec.len` tracks the initialized
            // prefix so a panicking clone drops only live elements.
            unsafe { ptr::write(vec.buf.ptr().add(vec.len), value.clone()) };
            vec.len += 1;
        }
        vec
    }

    /// Creates a container by cloning the elements of `values`, with
    /// capacity equal to their count.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut vec = Self {
            buf: RawBuf::allocate(values.len()),
            len: 0,
        };
        for value in values {
            // SAFETY: capacity covers every element of `values`.
            unsafe { ptr::write(vec.buf.ptr().add(vec.len), value.clone()) };
            vec.len += 1;
        }
        vec
    }

    /// Count of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Count of allocated slots. Always at least [`len`](GrowVec::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Theoretical upper bound of the element count, a constant of the
    /// count type rather than of the current allocation.
    #[must_use]
    pub fn max_len(&self) -> usize {
        usize::MAX
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every allocated slot is occupied; the next append grows.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.cap()
    }

    /// Reallocates to exactly `new_cap` slots. Does nothing when `new_cap`
    /// does not exceed the current capacity; `reserve` never applies the
    /// growth factor.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.buf.cap() {
            return;
        }
        self.realloc_exact(new_cap);
    }

    /// Drops excess capacity so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) {
        if self.buf.cap() == self.len {
            return;
        }
        self.realloc_exact(self.len);
    }

    /// Appends `value` and returns a reference to the stored element.
    ///
    /// Grows by the 1.5x policy when full.
    pub fn push(&mut self, value: T) -> &T {
        if self.is_full() {
            let new_cap = self.grown_capacity(self.len + 1);
            self.realloc_exact(new_cap);
        }
        // SAFETY: slot `len` is allocated and unoccupied.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        // SAFETY: slot `len - 1` was just initialized.
        unsafe { &*self.buf.ptr().add(self.len - 1) }
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the container is empty. Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held the last live element; it is moved out
        // and no longer counted.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::Empty` if the container is empty.
    pub fn try_pop(&mut self) -> Result<T, GrowVecError> {
        self.pop().ok_or(GrowVecError::Empty)
    }

    /// Resizes to exactly `new_len` elements, filling new slots with
    /// `T::default()`.
    ///
    /// Both length and capacity become `new_len`. Shrinking drops the
    /// excluded elements.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Clone + Default,
    {
        self.resize_with(new_len, T::default());
    }

    /// Resizes to exactly `new_len` elements, filling new slots with
    /// clones of `value`.
    pub fn resize_with(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len < self.len {
            let excluded = self.len - new_len;
            self.len = new_len;
            // SAFETY: slots [new_len, old len) are initialized and now
            // outside the live range; drop them before giving up the slots.
            unsafe {
                let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(new_len), excluded);
                ptr::drop_in_place(tail);
            }
        }
        if new_len != self.buf.cap() {
            self.realloc_exact(new_len);
        }
        while self.len < new_len {
            // SAFETY: capacity is `new_len`; `len` tracks the initialized prefix.
            unsafe { ptr::write(self.buf.ptr().add(self.len), value.clone()) };
            self.len += 1;
        }
    }

    /// Exchanges contents with `other` in O(1) by swapping buffer
    /// ownership; no element is copied.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Drops all live elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        let live = self.len;
        self.len = 0;
        // SAFETY: the first `live` slots were initialized; `len` is zeroed
        // first so a panicking element drop cannot expose them again.
        unsafe {
            let elements = ptr::slice_from_raw_parts_mut(self.buf.ptr(), live);
            ptr::drop_in_place(elements);
        }
    }

    /// Removes the element at `index`, shifting the tail left by one, and
    /// returns it.
    ///
    /// Returns `None` without mutating when `index` is out of range.
    /// O(len - index); capacity is unchanged.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index` is in the live range; the value is moved out and
        // the gap closed before the length shrinks.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Removes the element the cursor points at, as [`remove`](GrowVec::remove).
    ///
    /// A detached or out-of-range cursor is a no-op returning `None`.
    pub fn erase(&mut self, at: Cursor) -> Option<T> {
        self.remove(at.position()?)
    }

    /// Removes the elements in `[first, last)` and returns how many were
    /// removed.
    ///
    /// The end of the range is clamped to the current length. An empty
    /// range, a detached cursor, or a start past the end is a no-op
    /// returning 0.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> usize {
        let (Some(start), Some(end)) = (first.position(), last.position()) else {
            return 0;
        };
        if start >= self.len || end <= start {
            return 0;
        }
        let end = end.min(self.len);
        let count = end - start;
        // SAFETY: [start, end) is within the live range; the erased run is
        // dropped, then the tail closes the gap.
        unsafe {
            let run = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(start), count);
            ptr::drop_in_place(run);
            ptr::copy(
                self.buf.ptr().add(end),
                self.buf.ptr().add(start),
                self.len - end,
            );
        }
        self.len -= count;
        count
    }

    /// Inserts `value` at `index`, shifting the tail right by one, and
    /// returns a reference to the stored element.
    ///
    /// `index == len()` appends. Grows by the 1.5x policy when full.
    /// O(len - index).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` when `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&T, GrowVecError> {
        if index > self.len {
            return Err(GrowVecError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.is_full() {
            let new_cap = self.grown_capacity(self.len + 1);
            self.realloc_exact(new_cap);
        }
        // SAFETY: the tail fits after growth; the gap at `index` is opened
        // before the new value is written into it.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        // SAFETY: slot `index` was just initialized.
        Ok(unsafe { &*self.buf.ptr().add(index) })
    }

    /// Inserts `value` at the cursor's position, as [`insert`](GrowVec::insert).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::DetachedCursor` for a sentinel cursor and
    /// `GrowVecError::IndexOutOfBounds` when the position is past the end.
    pub fn insert_at(&mut self, at: Cursor, value: T) -> Result<&T, GrowVecError> {
        let index = at.position().ok_or(GrowVecError::DetachedCursor)?;
        self.insert(index, value)
    }

    /// Inserts clones of `values` starting at the cursor's position,
    /// shifting the tail right by their count.
    ///
    /// Grows to `max(policy growth, required)` when the capacity is
    /// insufficient. O(len - start + inserted count).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::DetachedCursor` for a sentinel cursor and
    /// `GrowVecError::IndexOutOfBounds` when the start is past the end.
    pub fn insert_slice(&mut self, at: Cursor, values: &[T]) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        let start = at.position().ok_or(GrowVecError::DetachedCursor)?;
        if start > self.len {
            return Err(GrowVecError::IndexOutOfBounds {
                index: start,
                len: self.len,
            });
        }
        if values.is_empty() {
            return Ok(());
        }
        let old_len = self.len;
        let new_len = old_len + values.len();
        if new_len > self.buf.cap() {
            let new_cap = self.grown_capacity(new_len);
            self.realloc_exact(new_cap);
        }
        // If a clone panics mid-fill the elements past `start` leak rather
        // than double-drop: the length stays at `start` until the gap is
        // fully initialized.
        self.len = start;
        // SAFETY: capacity covers `new_len`; the tail moves back-to-front
        // into [start + count, new_len) so nothing is overwritten.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(
                base.add(start),
                base.add(start + values.len()),
                old_len - start,
            );
            for (offset, value) in values.iter().enumerate() {
                ptr::write(base.add(start + offset), value.clone());
            }
        }
        self.len = new_len;
        Ok(())
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        self.get(index).ok_or(GrowVecError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, len })
    }

    /// Element at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index` is within the initialized prefix.
        Some(unsafe { &*self.buf.ptr().add(index) })
    }

    /// Mutable element at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index` is within the initialized prefix.
        Some(unsafe { &mut *self.buf.ptr().add(index) })
    }

    /// First live element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::Empty` if the container is empty.
    pub fn front(&self) -> Result<&T, GrowVecError> {
        self.get(0).ok_or(GrowVecError::Empty)
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::Empty` if the container is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, GrowVecError> {
        self.get_mut(0).ok_or(GrowVecError::Empty)
    }

    /// Last live element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::Empty` if the container is empty.
    pub fn back(&self) -> Result<&T, GrowVecError> {
        match self.len.checked_sub(1) {
            Some(last) => self.get(last).ok_or(GrowVecError::Empty),
            None => Err(GrowVecError::Empty),
        }
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::Empty` if the container is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, GrowVecError> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last).ok_or(GrowVecError::Empty),
            None => Err(GrowVecError::Empty),
        }
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; for `len == 0` the
        // dangling pointer is valid for a zero-length slice.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Raw pointer to the buffer. The caller must not read past
    /// [`len`](GrowVec::len) slots, and any reallocation invalidates it.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Cursor at the first slot.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    /// Cursor one past the last live element.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::at(self.len)
    }

    /// Element the cursor points at, or `None` for a detached or
    /// out-of-range cursor.
    #[must_use]
    pub fn cursor_get(&self, at: Cursor) -> Option<&T> {
        self.get(at.position()?)
    }

    /// Returns a forward iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> GrowVecIter<'_, T> {
        self.into_iter()
    }

    /// Moves the live elements into a fresh allocation of exactly `new_cap`
    /// slots and releases the old one. `new_cap` must cover `len`.
    fn realloc_exact(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let new_buf = RawBuf::allocate(new_cap);
        // SAFETY: both buffers hold at least `len` slots and do not overlap;
        // the move is bitwise, so releasing the old buffer drops no element.
        unsafe { ptr::copy_nonoverlapping(self.buf.ptr(), new_buf.ptr(), self.len) };
        self.buf = new_buf;
    }

    /// Growth policy: 1.5x the current capacity, floored at what the
    /// mutation actually requires. Escapes capacity 0 via the floor.
    fn grown_capacity(&self, required: usize) -> usize {
        let cap = self.buf.cap();
        required.max(cap + cap / 2)
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
        // RawBuf releases the allocation
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep copy into an independent buffer, preserving the source's
    /// capacity rather than shrinking to its length.
    fn clone(&self) -> Self {
        let mut vec = Self {
            buf: RawBuf::allocate(self.buf.cap()),
            len: 0,
        };
        for value in self.as_slice() {
            // SAFETY: capacity covers every live element of the source.
            unsafe { ptr::write(vec.buf.ptr().add(vec.len), value.clone()) };
            vec.len += 1;
        }
        vec
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// The buffer is owned exclusively, so thread capabilities follow the payload.
unsafe impl<T: Send> Send for GrowVec<T> {}
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut vec = Self {
            buf: RawBuf::allocate(N),
            len: 0,
        };
        for value in values {
            // SAFETY: capacity is `N`; elements move in one by one.
            unsafe { ptr::write(vec.buf.ptr().add(vec.len), value) };
            vec.len += 1;
        }
        vec
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::new();
        vec.reserve(iter.size_hint().0);
        for value in iter {
            vec.push(value);
        }
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> std::ops::Index<usize> for GrowVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the out-of-bounds message when `index >= len()`; use
    /// [`at`](GrowVec::at) or [`get`](GrowVec::get) for non-panicking access.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for GrowVec<T> {
    /// # Panics
    ///
    /// Panics with the out-of-bounds message when `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", GrowVecError::IndexOutOfBounds { index, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_policy_applies_factor_with_required_floor() {
        let mut vec: GrowVec<u32> = GrowVec::new();
        assert_eq!(vec.grown_capacity(1), 1); // factor alone cannot escape zero
        vec.reserve(4);
        assert_eq!(vec.grown_capacity(5), 6); // 4 + 4/2
        assert_eq!(vec.grown_capacity(10), 10); // floor wins over the factor
    }

    #[test]
    fn realloc_preserves_element_order() {
        let mut vec = GrowVec::from([1, 2, 3]);
        vec.reserve(100);
        assert_eq!(vec.capacity(), 100);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn zero_sized_payloads_need_no_allocation() {
        let mut vec: GrowVec<()> = GrowVec::new();
        for _ in 0..1000 {
            vec.push(());
        }
        assert_eq!(vec.len(), 1000);
        assert_eq!(vec.pop(), Some(()));
    }
}
