//! The [`Vector`] type: construction, growth, and positional mutation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{AddAssign, Deref, DerefMut};
use std::ptr;
use std::slice;

use keel_core::alloc::infallible;
use keel_core::{ContainerError, GrowthPolicy, RawBuf};

/// A contiguous, growable array of `T`.
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are allocated
/// but uninitialised. The buffer pointer is null exactly when the capacity
/// is zero.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector without allocating.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Create an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::try_with_capacity(capacity))
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the buffer holds before it must reallocate.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Pointer to the buffer, or null when nothing is allocated.
    ///
    /// Unlike `as_slice().as_ptr()`, this reports the allocation itself and
    /// is null for a vector that has never allocated or was moved from.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr_or_null()
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialised; the pointer is aligned and
        // non-null even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with unique access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// The first element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable access to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// The last element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable access to the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // ── Growth ──────────────────────────────────────────────────

    /// Ensure the capacity is at least `capacity`, growing to exactly that.
    ///
    /// Never shrinks: a smaller request leaves the capacity unchanged.
    pub fn reserve(&mut self, capacity: usize) {
        infallible(self.try_reserve(capacity))
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ContainerError> {
        if capacity > self.buf.capacity() {
            self.buf.try_reallocate(capacity)?;
        }
        Ok(())
    }

    /// Reallocate so that the capacity equals the length.
    ///
    /// An empty vector releases its buffer entirely.
    pub fn shrink(&mut self) {
        infallible(self.buf.try_reallocate(self.len))
    }

    /// Make room for one more element using the doubling policy.
    fn try_grow_for_one(&mut self) -> Result<(), ContainerError> {
        if self.len == self.buf.capacity() {
            let new_capacity = GrowthPolicy::grown_capacity(self.buf.capacity())
                .ok_or(ContainerError::CapacityOverflow)?;
            self.buf.try_reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Make room for `additional` more elements, growing exactly.
    fn try_reserve_additional(&mut self, additional: usize) -> Result<(), ContainerError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.try_reserve(needed)
    }

    // ── Single-element mutation ─────────────────────────────────

    /// Append `value`, doubling the capacity when full.
    pub fn push_back(&mut self, value: T) {
        infallible(self.try_grow_for_one());
        // SAFETY: len < capacity after growth; the slot is uninitialised.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Fallible form of [`push_back`](Self::push_back).
    ///
    /// On error the vector is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.try_grow_for_one()?;
        // SAFETY: as for push_back.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot len was live and is now outside the live range.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Insert `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// Requires `index <= len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        ContainerError::check_position(index, self.len)?;
        infallible(self.try_grow_for_one());
        // SAFETY: index <= len < capacity. The shifted range stays inside
        // the allocation and the vacated slot is overwritten without drop.
        unsafe {
            let at = self.buf.ptr().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// Requires `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        ContainerError::check_index(index, self.len)?;
        // SAFETY: index < len. The value is read out before the tail
        // overwrites its slot, so it is moved exactly once.
        let value = unsafe {
            let at = self.buf.ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Shorten the vector to `len` elements, dropping the rest.
    ///
    /// Does nothing if `len >= self.len()`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = len;
        // SAFETY: [len, old_len) was live and is now outside the live range.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(len),
                old_len - len,
            ));
        }
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop every element and release the buffer.
    ///
    /// Leaves the vector in the same state as [`Vector::new`]. Calling it
    /// again, or dropping the vector afterwards, is harmless.
    pub fn destroy(&mut self) {
        self.clear();
        self.buf.release();
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    // ── Range mutation ──────────────────────────────────────────

    /// Remove the half-open range `[start, end)`, dropping its elements.
    ///
    /// Requires `start <= end <= len`.
    pub fn erase(&mut self, start: usize, end: usize) -> Result<(), ContainerError> {
        ContainerError::check_range(start, end, self.len)?;
        let old_len = self.len;
        self.len = start;
        // SAFETY: [start, end) is live; it is dropped once, then the live
        // tail [end, old_len) is moved down over it.
        unsafe {
            let base = self.buf.ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - (end - start);
        Ok(())
    }

    /// Remove `[start, end)` and move those elements into `other`.
    ///
    /// `other`'s previous elements are dropped; afterwards it holds exactly
    /// the removed range, in order.
    pub fn erase_into(
        &mut self,
        start: usize,
        end: usize,
        other: &mut Vector<T>,
    ) -> Result<(), ContainerError> {
        ContainerError::check_range(start, end, self.len)?;
        let count = end - start;
        other.clear();
        infallible(other.try_reserve(count));
        // SAFETY: other has room for count elements and no live ones. The
        // range is moved out bitwise, then the tail closes the gap.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy_nonoverlapping(base.add(start), other.buf.ptr(), count);
            other.len = count;
            ptr::copy(base.add(end), base.add(start), self.len - end);
        }
        self.len -= count;
        Ok(())
    }

    /// Move `[index, len)` into `other` and truncate `self` to `index`.
    ///
    /// `other`'s previous elements are dropped and its buffer is resized to
    /// exactly the number of moved elements.
    pub fn split_off_into(
        &mut self,
        index: usize,
        other: &mut Vector<T>,
    ) -> Result<(), ContainerError> {
        ContainerError::check_position(index, self.len)?;
        let count = self.len - index;
        other.clear();
        infallible(other.buf.try_reallocate(count));
        // SAFETY: other holds no live values and has exactly count slots.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr().add(index), other.buf.ptr(), count);
        }
        other.len = count;
        self.len = index;
        Ok(())
    }

    /// Move every element of `other` into `self` at `index`.
    ///
    /// Requires `index <= len`. `other` is left empty with its buffer
    /// released.
    pub fn insert_from(
        &mut self,
        index: usize,
        other: &mut Vector<T>,
    ) -> Result<(), ContainerError> {
        ContainerError::check_position(index, self.len)?;
        let count = other.len;
        infallible(self.try_reserve_additional(count));
        // SAFETY: capacity >= len + count. The tail moves right into
        // allocated slots, then other's values are moved into the gap.
        unsafe {
            let at = self.buf.ptr().add(index);
            ptr::copy(at, at.add(count), self.len - index);
            ptr::copy_nonoverlapping(other.buf.ptr(), at, count);
        }
        self.len += count;
        other.len = 0;
        other.buf.release();
        Ok(())
    }

    /// Move every element of `other` onto the end of `self`.
    ///
    /// `other` is left empty with its buffer released.
    pub fn merge_from(&mut self, other: &mut Vector<T>) {
        let count = other.len;
        infallible(self.try_reserve_additional(count));
        // SAFETY: capacity >= len + count; the values move exactly once.
        unsafe {
            ptr::copy_nonoverlapping(other.buf.ptr(), self.buf.ptr().add(self.len), count);
        }
        self.len += count;
        other.len = 0;
        other.buf.release();
    }

    /// Resize to `len` elements, growing the capacity to exactly `len` if
    /// it is smaller. New slots are filled with `T::default()`.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        if len <= self.len {
            self.truncate(len);
            return;
        }
        self.reserve(len);
        while self.len < len {
            // SAFETY: len <= capacity; slot self.len is uninitialised.
            unsafe { self.buf.ptr().add(self.len).write(T::default()) };
            self.len += 1;
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector of `len` clones of `value`, with capacity `len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut vector = Self::with_capacity(len);
        vector.fill_to(len, &value);
        vector
    }

    /// Resize to `len` elements, all of them clones of `value`.
    ///
    /// Existing elements are overwritten too, not only the new slots.
    /// Capacity grows to exactly `len` if it is smaller.
    pub fn resize_filled(&mut self, len: usize, value: T) {
        self.truncate(len);
        self.reserve(len);
        for slot in self.as_mut_slice() {
            slot.clone_from(&value);
        }
        self.fill_to(len, &value);
    }

    /// Append clones of every element of `other`.
    ///
    /// Grows to exactly `len + other.len()` when needed; `other` is unchanged.
    pub fn merge(&mut self, other: &Vector<T>) {
        self.reserve_and_extend(other.as_slice());
    }

    /// Insert clones of every element of `other` at `index`.
    ///
    /// Requires `index <= len`. `other` is unchanged.
    pub fn insert_all(&mut self, index: usize, other: &Vector<T>) -> Result<(), ContainerError> {
        ContainerError::check_position(index, self.len)?;
        // Clone into a staging buffer first so a panicking clone cannot
        // leave a half-filled gap in self.
        let mut staged = Vector::from(other.as_slice());
        self.insert_from(index, &mut staged)
    }

    fn reserve_and_extend(&mut self, items: &[T]) {
        infallible(self.try_reserve_additional(items.len()));
        for item in items {
            // SAFETY: capacity was reserved for every item; len is bumped
            // after each write so a panicking clone leaves no hole.
            unsafe { self.buf.ptr().add(self.len).write(item.clone()) };
            self.len += 1;
        }
    }

    fn fill_to(&mut self, len: usize, value: &T) {
        debug_assert!(len <= self.capacity());
        while self.len < len {
            // SAFETY: len <= capacity; slot self.len is uninitialised.
            unsafe { self.buf.ptr().add(self.len).write(value.clone()) };
            self.len += 1;
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is live; RawBuf frees the memory afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies keep the source's capacity; only the live elements are cloned.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        out.reserve_and_extend(self.as_slice());
        out
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, other: &Vector<T>) {
        self.merge(other);
    }
}

impl<T> AddAssign<Vector<T>> for Vector<T> {
    fn add_assign(&mut self, mut other: Vector<T>) {
        self.merge_from(&mut other);
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        let mut out = Self::with_capacity(items.len());
        out.reserve_and_extend(items);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for item in items {
            out.push_back(item);
        }
        out
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        infallible(self.try_reserve_additional(lower));
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for Vector<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: i32) -> Vector<i32> {
        (0..n).collect()
    }

    #[test]
    fn new_vector_is_null() {
        let v = Vector::<i32>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.as_ptr().is_null());
    }

    #[test]
    fn failed_reserve_reports_allocation_failure() {
        let mut v = Vector::<u8>::new();
        let err = v.try_reserve(isize::MAX as usize).unwrap_err();
        assert!(matches!(
            err,
            ContainerError::AllocationFailed { bytes, align: 1 } if bytes == isize::MAX as usize
        ));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.as_ptr().is_null());

        let mut w = Vector::from([1u8, 2, 3]);
        let cap = w.capacity();
        assert!(w.try_reserve(isize::MAX as usize).is_err());
        assert_eq!(w, [1, 2, 3]);
        assert_eq!(w.capacity(), cap);
        w.try_push_back(4).unwrap();
        assert_eq!(w, [1, 2, 3, 4]);
    }

    #[test]
    fn oversized_requests_overflow() {
        assert_eq!(
            Vector::<u64>::try_with_capacity(usize::MAX).err(),
            Some(ContainerError::CapacityOverflow)
        );
        let mut v = Vector::<u64>::new();
        assert_eq!(
            v.try_reserve(usize::MAX / 4),
            Err(ContainerError::CapacityOverflow)
        );
        assert!(v.as_ptr().is_null());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let v = Vector::<u8>::with_capacity(13);
        assert_eq!(v.capacity(), 13);
        assert!(v.is_empty());
        assert!(!v.as_ptr().is_null());
    }

    #[test]
    fn from_elem_fills_and_matches_capacity() {
        let v = Vector::from_elem(10, 1);
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 10);
        assert!(v.iter().all(|&x| x == 1));
    }

    #[test]
    fn push_back_follows_doubling_policy() {
        let mut v = Vector::new();
        let mut seen = Vec::new();
        for i in 0..20 {
            v.push_back(i);
            if seen.last() != Some(&v.capacity()) {
                seen.push(v.capacity());
            }
        }
        assert_eq!(seen, vec![2, 6, 14, 30]);
        assert_eq!(v.as_slice(), (0..20).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn pop_back_on_empty_is_none() {
        let mut v = Vector::<i32>::new();
        assert_eq!(v.pop_back(), None);
        v.push_back(4);
        assert_eq!(v.pop_back(), Some(4));
        assert_eq!(v.pop_back(), None);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn front_and_back_on_empty_are_none() {
        let mut v = Vector::<i32>::new();
        assert_eq!(v.front(), None);
        assert_eq!(v.back(), None);
        v.push_back(1);
        v.push_back(2);
        assert_eq!(v.front(), Some(&1));
        assert_eq!(v.back(), Some(&2));
        *v.back_mut().unwrap() = 9;
        assert_eq!(v, [1, 9]);
    }

    #[test]
    fn insert_into_middle_shifts_tail() {
        let mut v = Vector::from_elem(10, 1);
        v.insert(5, 2).unwrap();
        assert_eq!(v.len(), 11);
        assert_eq!(v[5], 2);
        assert!(v[..5].iter().all(|&x| x == 1));
        assert!(v[6..].iter().all(|&x| x == 1));
    }

    #[test]
    fn insert_at_len_appends() {
        let mut v = seq(3);
        v.insert(3, 7).unwrap();
        assert_eq!(v, [0, 1, 2, 7]);
    }

    #[test]
    fn insert_past_len_is_rejected() {
        let mut v = seq(3);
        assert_eq!(
            v.insert(4, 9),
            Err(ContainerError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn remove_returns_value_and_shifts() {
        let mut v = seq(5);
        assert_eq!(v.remove(1), Ok(1));
        assert_eq!(v, [0, 2, 3, 4]);
        assert_eq!(v.remove(3), Ok(4));
        assert!(v.remove(3).is_err());
    }

    #[test]
    fn erase_removes_half_open_range() {
        let mut v = seq(10);
        v.erase(2, 5).unwrap();
        assert_eq!(v, [0, 1, 5, 6, 7, 8, 9]);
        v.erase(3, 3).unwrap();
        assert_eq!(v.len(), 7);
        assert!(matches!(
            v.erase(5, 4),
            Err(ContainerError::InvalidRange { .. })
        ));
        assert!(v.erase(0, 8).is_err());
    }

    #[test]
    fn erase_into_replaces_destination() {
        let mut v = seq(6);
        let mut out = Vector::from([100, 200, 300, 400]);
        v.erase_into(1, 3, &mut out).unwrap();
        assert_eq!(v, [0, 3, 4, 5]);
        assert_eq!(out, [1, 2]);
        assert_eq!(out.capacity(), 4);
    }

    #[test]
    fn split_off_into_sizes_destination_exactly() {
        let mut v = seq(10);
        let mut tail = Vector::with_capacity(64);
        tail.push_back(-1);
        v.split_off_into(4, &mut tail).unwrap();
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(tail, [4, 5, 6, 7, 8, 9]);
        assert_eq!(tail.capacity(), 6);
    }

    #[test]
    fn split_at_len_leaves_empty_destination() {
        let mut v = seq(3);
        let mut tail = seq(2);
        v.split_off_into(3, &mut tail).unwrap();
        assert_eq!(v.len(), 3);
        assert!(tail.is_empty());
        assert!(tail.as_ptr().is_null());
    }

    #[test]
    fn merge_copy_leaves_source_intact() {
        let mut v0 = Vector::from_elem(10, 1);
        let v1 = Vector::from_elem(10, 2);
        v0.merge(&v1);
        assert_eq!(v0.len(), 20);
        assert_eq!(v0.capacity(), 20);
        assert!(v0[..10].iter().all(|&x| x == 1));
        assert!(v0[10..].iter().all(|&x| x == 2));
        assert_eq!(v1.len(), 10);
    }

    #[test]
    fn merge_from_empties_source() {
        let mut v0 = Vector::from_elem(10, 1);
        let mut v1 = Vector::from_elem(10, 2);
        v0.merge_from(&mut v1);
        assert_eq!(v0.len(), 20);
        assert!(v0[10..].iter().all(|&x| x == 2));
        assert_eq!(v1.len(), 0);
        assert_eq!(v1.capacity(), 0);
        assert!(v1.as_ptr().is_null());
    }

    #[test]
    fn add_assign_forms() {
        let mut v = seq(2);
        let other = seq(2);
        v += &other;
        v += Vector::from([9]);
        assert_eq!(v, [0, 1, 0, 1, 9]);
    }

    #[test]
    fn insert_all_and_insert_from() {
        let mut v = Vector::from([1, 5]);
        let mid = Vector::from([2, 3, 4]);
        v.insert_all(1, &mid).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(mid.len(), 3);

        let mut head = Vector::from([-1, 0]);
        v.insert_from(0, &mut head).unwrap();
        assert_eq!(v, [-1, 0, 1, 2, 3, 4, 5]);
        assert!(head.as_ptr().is_null());

        assert!(v.insert_all(100, &mid).is_err());
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut v = Vector::<u32>::with_capacity(16);
        v.reserve(4);
        assert_eq!(v.capacity(), 16);
        v.reserve(40);
        assert_eq!(v.capacity(), 40);
    }

    #[test]
    fn resize_grows_exactly_and_defaults() {
        let mut v = seq(3);
        v.resize(8);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v, [0, 1, 2, 0, 0, 0, 0, 0]);
        v.resize(2);
        assert_eq!(v, [0, 1]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn resize_filled_overwrites_every_slot() {
        let mut v = seq(4);
        v.resize_filled(6, 7);
        assert_eq!(v, [7, 7, 7, 7, 7, 7]);
        assert_eq!(v.capacity(), 6);
        v.resize_filled(2, 3);
        assert_eq!(v, [3, 3]);
    }

    #[test]
    fn shrink_matches_len() {
        let mut v = Vector::with_capacity(32);
        v.push_back(1u8);
        v.shrink();
        assert_eq!(v.capacity(), 1);
        v.clear();
        v.shrink();
        assert!(v.as_ptr().is_null());
    }

    #[test]
    fn clone_preserves_capacity_with_new_buffer() {
        let mut v = Vector::with_capacity(10);
        v.push_back(String::from("a"));
        v.push_back(String::from("b"));
        let c = v.clone();
        assert_eq!(c, v);
        assert_eq!(c.capacity(), 10);
        assert_ne!(c.as_ptr(), v.as_ptr());
    }

    #[test]
    fn take_resets_source() {
        let mut a = seq(4);
        let b = a.take();
        assert_eq!(b, [0, 1, 2, 3]);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert!(a.as_ptr().is_null());
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut v = seq(4);
        v.destroy();
        v.destroy();
        assert!(v.as_ptr().is_null());
        v.push_back(3);
        assert_eq!(v, [3]);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..100 {
            v.push_back(());
        }
        assert_eq!(v.len(), 100);
        assert_eq!(v.remove(50), Ok(()));
        assert_eq!(v.len(), 99);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn push_back_capacity_never_decreases(n in 0usize..500) {
                let mut v = Vector::new();
                let mut last = 0;
                for i in 0..n {
                    v.push_back(i);
                    prop_assert!(v.capacity() >= last);
                    prop_assert!(v.len() <= v.capacity());
                    last = v.capacity();
                }
            }

            #[test]
            fn insert_then_remove_is_identity(
                items in proptest::collection::vec(any::<i32>(), 0..64),
                at in any::<prop::sample::Index>(),
                value in any::<i32>(),
            ) {
                let mut v: Vector<i32> = items.iter().copied().collect();
                let index = at.index(items.len() + 1);
                v.insert(index, value).unwrap();
                prop_assert_eq!(v[index], value);
                prop_assert_eq!(v.remove(index).unwrap(), value);
                prop_assert_eq!(v.as_slice(), items.as_slice());
            }

            #[test]
            fn split_then_merge_is_identity(
                items in proptest::collection::vec(any::<u16>(), 0..64),
                at in any::<prop::sample::Index>(),
            ) {
                let mut v: Vector<u16> = items.iter().copied().collect();
                let index = at.index(items.len() + 1);
                let mut tail = Vector::new();
                v.split_off_into(index, &mut tail).unwrap();
                prop_assert_eq!(tail.capacity(), items.len() - index);
                v.merge_from(&mut tail);
                prop_assert_eq!(v.as_slice(), items.as_slice());
                prop_assert!(tail.as_ptr().is_null());
            }

            #[test]
            fn erase_matches_vec_drain(
                items in proptest::collection::vec(any::<u8>(), 0..64),
                a in any::<prop::sample::Index>(),
                b in any::<prop::sample::Index>(),
            ) {
                let mut v: Vector<u8> = items.iter().copied().collect();
                let (mut start, mut end) = (a.index(items.len() + 1), b.index(items.len() + 1));
                if start > end {
                    mem::swap(&mut start, &mut end);
                }
                let mut removed = Vector::new();
                v.erase_into(start, end, &mut removed).unwrap();
                let mut expected = items.clone();
                let drained: Vec<u8> = expected.drain(start..end).collect();
                prop_assert_eq!(v.as_slice(), expected.as_slice());
                prop_assert_eq!(removed.as_slice(), drained.as_slice());
            }
        }
    }
}
