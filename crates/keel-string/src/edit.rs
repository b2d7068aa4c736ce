//! Substring, concatenation, search, and in-place transforms.

use std::ptr;

use keel_core::alloc::infallible;
use keel_core::ContainerError;

use crate::unit::CharUnit;
use crate::StringBase;

/// Length argument meaning "through the end of the string".
pub const END: usize = usize::MAX;

impl<C: CharUnit> StringBase<C> {
    /// Resolve `(start, count)` to a half-open range clamped to the length.
    fn span(&self, start: usize, count: usize) -> Result<(usize, usize), ContainerError> {
        ContainerError::check_position(start, self.len)?;
        let end = start + count.min(self.len - start);
        Ok((start, end))
    }

    /// A new string holding `count` units from `start`, or through the end
    /// when `count` is [`END`] or runs past it.
    ///
    /// Requires `start <= len`. `self` is not modified.
    pub fn substring(&self, start: usize, count: usize) -> Result<Self, ContainerError> {
        let (start, end) = self.span(start, count)?;
        Ok(infallible(Self::try_from_units_with(
            &self.as_units()[start..end],
            self.config(),
        )))
    }

    /// Keep only `count` units from `start` (or through the end), in place.
    ///
    /// Requires `start <= len`. Capacity is unchanged.
    pub fn shave(&mut self, start: usize, count: usize) -> Result<(), ContainerError> {
        let (start, end) = self.span(start, count)?;
        if start != 0 {
            // SAFETY: [start, end) lies inside the live range.
            unsafe {
                let base = self.buf.ptr();
                ptr::copy(base.add(start), base, end - start);
            }
        }
        self.len = end - start;
        self.terminate();
        Ok(())
    }

    /// Insert `units` at `at` (which is `0` or `len`), growing as needed.
    fn splice(&mut self, at: usize, units: &[C]) {
        debug_assert!(at <= self.len);
        let new_len = self
            .len
            .checked_add(units.len())
            .ok_or(ContainerError::CapacityOverflow);
        infallible(new_len.and_then(|n| self.try_reserve_units(n)));
        // SAFETY: capacity >= len + units.len() + 1. `units` cannot alias
        // the buffer because `self` is borrowed mutably.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base.add(at), base.add(at + units.len()), self.len - at);
            ptr::copy_nonoverlapping(units.as_ptr(), base.add(at), units.len());
        }
        self.len += units.len();
        self.terminate();
    }

    /// Append one unit.
    pub fn push(&mut self, unit: C) {
        self.splice(self.len, &[unit]);
    }

    /// Append `suffix` in place.
    pub fn append(&mut self, suffix: impl AsRef<[C]>) -> &mut Self {
        self.splice(self.len, suffix.as_ref());
        self
    }

    /// Prepend `prefix` in place.
    pub fn prepend(&mut self, prefix: impl AsRef<[C]>) -> &mut Self {
        self.splice(0, prefix.as_ref());
        self
    }

    /// Wrap the string in `prefix` and `suffix` in place.
    pub fn surround(&mut self, prefix: impl AsRef<[C]>, suffix: impl AsRef<[C]>) -> &mut Self {
        let (prefix, suffix) = (prefix.as_ref(), suffix.as_ref());
        let total = self
            .len
            .checked_add(prefix.len())
            .and_then(|n| n.checked_add(suffix.len()))
            .ok_or(ContainerError::CapacityOverflow);
        infallible(total.and_then(|n| self.try_reserve_units(n)));
        self.splice(0, prefix);
        self.splice(self.len, suffix);
        self
    }

    /// A new string equal to `self` followed by `suffix`.
    pub fn appended(&self, suffix: impl AsRef<[C]>) -> Self {
        let mut out = self.clone();
        out.append(suffix);
        out
    }

    /// A new string equal to `prefix` followed by `self`.
    pub fn prepended(&self, prefix: impl AsRef<[C]>) -> Self {
        let mut out = self.clone();
        out.prepend(prefix);
        out
    }

    /// A new string equal to `prefix`, then `self`, then `suffix`.
    pub fn surrounded(&self, prefix: impl AsRef<[C]>, suffix: impl AsRef<[C]>) -> Self {
        let mut out = self.clone();
        out.surround(prefix, suffix);
        out
    }

    /// Whether the string is null, empty, or made only of blank units.
    pub fn is_blank(&self) -> bool {
        self.as_units().iter().all(|u| u.is_blank())
    }

    /// Offset of the first `unit` at or after `start`.
    pub fn index_of(&self, unit: C, start: usize) -> Option<usize> {
        let pos = self.as_units().get(start..)?.iter().position(|&u| u == unit)?;
        Some(start + pos)
    }

    /// Offset of the last `unit` at or after `start`.
    ///
    /// `start` is a lower bound, not where the scan begins: the search runs
    /// backward from the end of the string and stops at `start` inclusive.
    /// Returns `None` when `start > len`.
    pub fn last_index_of(&self, unit: C, start: usize) -> Option<usize> {
        let pos = self.as_units().get(start..)?.iter().rposition(|&u| u == unit)?;
        Some(start + pos)
    }

    /// Strip leading and trailing blank units in place.
    pub fn trim(&mut self) -> &mut Self {
        let units = self.as_units();
        let start = units.iter().position(|u| !u.is_blank()).unwrap_or(units.len());
        let end = units
            .iter()
            .rposition(|u| !u.is_blank())
            .map_or(start, |i| i + 1);
        // start <= len always holds, so this cannot fail.
        let _ = self.shave(start, end - start);
        self
    }

    /// Map ASCII lowercase letters to uppercase in place.
    pub fn to_upper(&mut self) -> &mut Self {
        self.map_units(C::to_ascii_upper)
    }

    /// Map ASCII uppercase letters to lowercase in place.
    pub fn to_lower(&mut self) -> &mut Self {
        self.map_units(C::to_ascii_lower)
    }

    fn map_units(&mut self, f: fn(C) -> C) -> &mut Self {
        let len = self.len;
        for unit in &mut self.buffer_mut()[..len] {
            *unit = f(*unit);
        }
        self
    }
}
