//! Owned raw buffers.
//!
//! [`RawBuf<T>`] is the single place where container memory is allocated,
//! resized, and freed. It records the capacity of its allocation and frees
//! it on drop, so containers never repeat the allocate/free bookkeeping at
//! each call site. It knows nothing about which slots hold live values:
//! dropping those is the owning container's job.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::alloc;
use crate::error::ContainerError;

/// An exclusively owned heap allocation of `capacity` slots of `T`.
///
/// The empty state (`capacity == 0`) holds no allocation and reports a null
/// pointer from [`as_ptr_or_null`](Self::as_ptr_or_null). Zero-sized `T`
/// never allocates; its capacity is tracked logically.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf is a unique owner of its allocation, like Box<[T]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out raw pointers; see Send.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Create an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate exactly `capacity` uninitialised slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        let mut buf = Self::new();
        buf.try_reallocate(capacity)?;
        Ok(buf)
    }

    /// Allocate exactly `capacity` slots with every byte set to zero.
    pub fn try_with_capacity_zeroed(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _owns: PhantomData,
            });
        }
        let layout = alloc::array_layout::<T>(capacity)?;
        // SAFETY: capacity > 0 and T is not zero-sized, so the size is non-zero.
        let ptr = unsafe { alloc::allocate_zeroed(layout)? };
        log::trace!(
            "raw buffer allocated (zeroed): 0 -> {capacity} x {} bytes",
            mem::size_of::<T>()
        );
        Ok(Self {
            ptr: ptr.cast(),
            cap: capacity,
            _owns: PhantomData,
        })
    }

    /// Number of slots in the allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the buffer currently owns memory (or, for zero-sized `T`,
    /// has a non-zero logical capacity).
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.cap != 0
    }

    /// Pointer to slot 0. Dangling (but aligned) when the capacity is zero.
    #[inline]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot 0, or null when nothing is allocated.
    #[inline]
    pub fn as_ptr_or_null(&self) -> *const T {
        if self.cap == 0 {
            ptr::null()
        } else {
            self.ptr.as_ptr()
        }
    }

    /// Resize the allocation to exactly `new_capacity` slots.
    ///
    /// Grows or shrinks; `0` releases the allocation. The first
    /// `min(old, new)` slots keep their bytes. On error the buffer is
    /// unchanged. Callers must have dropped any live values in slots
    /// `>= new_capacity` beforehand.
    pub fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), ContainerError> {
        if new_capacity == self.cap {
            return Ok(());
        }
        if Self::IS_ZST {
            self.cap = new_capacity;
            return Ok(());
        }
        if new_capacity == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = alloc::array_layout::<T>(new_capacity)?;
        let ptr = if self.cap == 0 {
            // SAFETY: new_capacity > 0 and T is not zero-sized.
            unsafe { alloc::allocate(new_layout)? }
        } else {
            let old_layout = alloc::array_layout::<T>(self.cap)?;
            // SAFETY: self.ptr was allocated for old_layout by this module;
            // new_layout proves the new size is valid for T's alignment.
            unsafe { alloc::reallocate(self.ptr.cast(), old_layout, new_layout.size())? }
        };
        log::trace!(
            "raw buffer reallocated: {} -> {new_capacity} x {} bytes",
            self.cap,
            mem::size_of::<T>()
        );
        self.ptr = ptr.cast();
        self.cap = new_capacity;
        Ok(())
    }

    /// Like [`try_reallocate`](Self::try_reallocate), but any slots added by
    /// growth are zero-filled.
    pub fn try_reallocate_zeroed(&mut self, new_capacity: usize) -> Result<(), ContainerError> {
        let old = self.cap;
        self.try_reallocate(new_capacity)?;
        if new_capacity > old && !Self::IS_ZST {
            // SAFETY: slots [old, new_capacity) lie inside the fresh allocation.
            unsafe { self.ptr().add(old).write_bytes(0, new_capacity - old) };
        }
        Ok(())
    }

    /// Free the allocation and return to the empty state.
    ///
    /// Idempotent: releasing an empty buffer does nothing.
    pub fn release(&mut self) {
        if self.cap != 0 && !Self::IS_ZST {
            if let Ok(layout) = alloc::array_layout::<T>(self.cap) {
                // SAFETY: the block was allocated for exactly this layout.
                unsafe { alloc::deallocate(self.ptr.cast(), layout) };
                log::trace!("raw buffer released: {} slots", self.cap);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Take the allocation, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("ptr", &self.as_ptr_or_null())
            .field("capacity", &self.cap)
            .finish()
    }
}
