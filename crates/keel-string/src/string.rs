//! The [`StringBase`] type: storage, construction, and the terminator
//! invariant.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Deref;
use std::ptr;
use std::slice;

use keel_core::alloc::infallible;
use keel_core::{ContainerError, RawBuf, StringConfig};

use crate::unit::CharUnit;

/// A growable, terminator-backed buffer of character units.
///
/// Two empty states exist. The *null* state (from [`new`](Self::new),
/// [`take`](Self::take), or [`destroy`](Self::destroy)) has no allocation.
/// The *allocated empty* state holds a buffer whose first unit is the
/// terminator. Both have length zero and are blank.
///
/// Whenever a buffer exists, `capacity >= len + 1` and the unit at `len` is
/// [`CharUnit::NUL`]. Buffers are zero-filled on allocation and growth, so
/// every unit up to the capacity is initialised; [`buffer_mut`] exposes all
/// of it for external writes.
///
/// [`buffer_mut`]: Self::buffer_mut
pub struct StringBase<C: CharUnit> {
    pub(crate) buf: RawBuf<C>,
    pub(crate) len: usize,
    config: StringConfig,
}

impl<C: CharUnit> StringBase<C> {
    /// Create a null string with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(StringConfig::new())
    }

    /// Create a null string whose allocations follow `config`.
    pub const fn with_config(config: StringConfig) -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            config,
        }
    }

    /// Copy `units` into a new allocated string.
    ///
    /// An empty slice still allocates, giving the allocated empty state.
    pub fn from_units(units: &[C]) -> Self {
        infallible(Self::try_from_units_with(units, StringConfig::new()))
    }

    /// Copy `units` up to (not including) the first terminator, or all of
    /// them if none is present.
    pub fn from_nul_terminated(units: &[C]) -> Self {
        let len = units.iter().position(|&u| u == C::NUL).unwrap_or(units.len());
        Self::from_units(&units[..len])
    }

    /// Copy a terminated sequence from raw memory. A null pointer gives the
    /// null string.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a readable sequence of `C` that ends
    /// with [`CharUnit::NUL`].
    pub unsafe fn from_ptr(ptr: *const C) -> Self {
        if ptr.is_null() {
            return Self::new();
        }
        let mut len = 0;
        // SAFETY: the caller guarantees a terminator before unreadable memory.
        unsafe {
            while *ptr.add(len) != C::NUL {
                len += 1;
            }
            Self::from_units(slice::from_raw_parts(ptr, len))
        }
    }

    pub(crate) fn try_from_units_with(
        units: &[C],
        config: StringConfig,
    ) -> Result<Self, ContainerError> {
        let mut out = Self::with_config(config);
        out.try_reserve_units(units.len())?;
        // SAFETY: capacity > units.len(); the fresh buffer is zeroed, so the
        // terminator after the copied run is already in place.
        unsafe { ptr::copy_nonoverlapping(units.as_ptr(), out.buf.ptr(), units.len()) };
        out.len = units.len();
        Ok(out)
    }

    /// Number of units before the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the string has no units (null or allocated empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated units, terminator slot included. Zero for the null string.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether this is the null string.
    #[inline]
    pub fn is_null(&self) -> bool {
        !self.buf.is_allocated()
    }

    /// The configuration this string allocates with.
    pub fn config(&self) -> StringConfig {
        self.config
    }

    /// Pointer to the first unit, or null for the null string.
    ///
    /// When non-null the sequence is terminated.
    #[inline]
    pub fn as_ptr(&self) -> *const C {
        self.buf.as_ptr_or_null()
    }

    /// The units before the terminator.
    #[inline]
    pub fn as_units(&self) -> &[C] {
        // SAFETY: [0, len) is initialised (the whole buffer is), and the
        // dangling pointer of the null state is valid for a zero-length slice.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The units including the terminator. Empty for the null string.
    pub fn as_units_with_nul(&self) -> &[C] {
        if self.is_null() {
            return &[];
        }
        // SAFETY: capacity >= len + 1 while allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len + 1) }
    }

    /// The whole allocation, for writing through external APIs.
    ///
    /// After writing, call [`recompute_len`](Self::recompute_len) so the
    /// length matches the new terminator position.
    pub fn buffer_mut(&mut self) -> &mut [C] {
        // SAFETY: every slot up to capacity is initialised (zero-filled on
        // allocation), and C is a plain integer so any value is valid.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.buf.capacity()) }
    }

    /// Recompute the length by scanning for the first terminator.
    ///
    /// If the buffer holds no terminator at all, the last unit is
    /// overwritten with one and the length becomes `capacity - 1`.
    pub fn recompute_len(&mut self) {
        if self.is_null() {
            return;
        }
        let cap = self.buf.capacity();
        let found = self.buffer_mut().iter().position(|&u| u == C::NUL);
        self.len = found.unwrap_or(cap - 1);
        self.terminate();
    }

    /// Ensure the capacity is at least `capacity` units, terminator included.
    ///
    /// Grows to the configured power-of-two size for `capacity`; never
    /// shrinks. Reserving on the null string allocates it.
    pub fn reserve(&mut self, capacity: usize) {
        infallible(self.try_reserve(capacity))
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ContainerError> {
        if capacity == 0 || capacity <= self.buf.capacity() {
            return Ok(());
        }
        let new_capacity = self
            .config
            .capacity_for(capacity)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.buf.try_reallocate_zeroed(new_capacity)
    }

    /// Make room for `units` units plus the terminator.
    pub(crate) fn try_reserve_units(&mut self, units: usize) -> Result<(), ContainerError> {
        let needed = units.checked_add(1).ok_or(ContainerError::CapacityOverflow)?;
        self.try_reserve(needed)
    }

    /// Write the terminator at `len`, if a buffer exists.
    pub(crate) fn terminate(&mut self) {
        if !self.is_null() {
            // SAFETY: capacity >= len + 1 while allocated.
            unsafe { self.buf.ptr().add(self.len).write(C::NUL) };
        }
    }

    /// Set the length to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Free the buffer and return to the null state.
    ///
    /// The configuration is kept. Idempotent.
    pub fn destroy(&mut self) {
        self.buf.release();
        self.len = 0;
    }

    /// Move the contents out, leaving `self` null with the same
    /// configuration.
    pub fn take(&mut self) -> Self {
        let empty = Self::with_config(self.config);
        mem::replace(self, empty)
    }

    /// Decode into a Rust string, replacing invalid sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        C::decode_lossy(self.as_units())
    }
}

impl<C: CharUnit> Default for StringBase<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with the same capacity and configuration. The null string
/// clones to the null string.
impl<C: CharUnit> Clone for StringBase<C> {
    fn clone(&self) -> Self {
        let mut out = Self::with_config(self.config);
        if !self.is_null() {
            out.buf = infallible(RawBuf::try_with_capacity_zeroed(self.capacity()));
            // SAFETY: both buffers hold at least len + 1 units; the copy's
            // terminator comes from the zero fill.
            unsafe { ptr::copy_nonoverlapping(self.buf.ptr(), out.buf.ptr(), self.len) };
            out.len = self.len;
        }
        out
    }
}

impl<C: CharUnit> Deref for StringBase<C> {
    type Target = [C];

    fn deref(&self) -> &[C] {
        self.as_units()
    }
}

impl<C: CharUnit> AsRef<[C]> for StringBase<C> {
    fn as_ref(&self) -> &[C] {
        self.as_units()
    }
}

impl<C: CharUnit> PartialEq for StringBase<C> {
    fn eq(&self, other: &Self) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<C: CharUnit> Eq for StringBase<C> {}

impl<C: CharUnit> PartialOrd for StringBase<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CharUnit> Ord for StringBase<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_units().cmp(other.as_units())
    }
}

impl<C: CharUnit> Hash for StringBase<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_units().hash(state);
    }
}

impl<C: CharUnit> fmt::Display for StringBase<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<C: CharUnit> fmt::Debug for StringBase<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            fmt::Debug::fmt(&self.to_string_lossy(), f)
        }
    }
}

impl From<&str> for StringBase<u8> {
    fn from(s: &str) -> Self {
        Self::from_units(s.as_bytes())
    }
}

impl From<&str> for StringBase<u16> {
    fn from(s: &str) -> Self {
        let units: Vec<u16> = s.encode_utf16().collect();
        Self::from_units(&units)
    }
}

impl From<&str> for StringBase<u32> {
    fn from(s: &str) -> Self {
        let units: Vec<u32> = s.chars().map(u32::from).collect();
        Self::from_units(&units)
    }
}

impl PartialEq<str> for StringBase<u8> {
    fn eq(&self, other: &str) -> bool {
        self.as_units() == other.as_bytes()
    }
}

impl PartialEq<&str> for StringBase<u8> {
    fn eq(&self, other: &&str) -> bool {
        self.as_units() == other.as_bytes()
    }
}
