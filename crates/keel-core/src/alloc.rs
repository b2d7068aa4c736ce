//! Global allocation collaborator.
//!
//! Thin wrappers over [`std::alloc`] that report a null result as
//! [`ContainerError::AllocationFailed`] instead of handing back a pointer
//! the caller would later dereference. All containers bind to the global
//! allocator; there is no allocator parameter.

use std::alloc::{self as sys, Layout};
use std::ptr::NonNull;

use crate::error::ContainerError;

/// Layout of an array of `n` values of `T`.
///
/// Returns [`ContainerError::CapacityOverflow`] when `n * size_of::<T>()`
/// does not fit in `isize::MAX` bytes.
pub fn array_layout<T>(n: usize) -> Result<Layout, ContainerError> {
    Layout::array::<T>(n).map_err(|_| ContainerError::CapacityOverflow)
}

/// Allocate uninitialised memory for `layout`.
///
/// # Safety
///
/// `layout.size()` must be non-zero.
pub unsafe fn allocate(layout: Layout) -> Result<NonNull<u8>, ContainerError> {
    debug_assert!(layout.size() != 0);
    // SAFETY: caller guarantees a non-zero size.
    let ptr = unsafe { sys::alloc(layout) };
    NonNull::new(ptr).ok_or_else(|| failed(layout))
}

/// Allocate zero-filled memory for `layout`.
///
/// # Safety
///
/// `layout.size()` must be non-zero.
pub unsafe fn allocate_zeroed(layout: Layout) -> Result<NonNull<u8>, ContainerError> {
    debug_assert!(layout.size() != 0);
    // SAFETY: caller guarantees a non-zero size.
    let ptr = unsafe { sys::alloc_zeroed(layout) };
    NonNull::new(ptr).ok_or_else(|| failed(layout))
}

/// Resize the block at `ptr` from `old` to `new_size` bytes.
///
/// On failure the original block is untouched and still owned by the caller.
///
/// # Safety
///
/// `ptr` must have been returned by this module for `old`, and `new_size`
/// must be non-zero and not overflow `isize` when rounded to `old.align()`.
pub unsafe fn reallocate(
    ptr: NonNull<u8>,
    old: Layout,
    new_size: usize,
) -> Result<NonNull<u8>, ContainerError> {
    debug_assert!(new_size != 0);
    // SAFETY: forwarded from the caller's contract.
    let new_ptr = unsafe { sys::realloc(ptr.as_ptr(), old, new_size) };
    NonNull::new(new_ptr).ok_or_else(|| {
        // SAFETY: realloc only accepts sizes that form a valid layout.
        failed(unsafe { Layout::from_size_align_unchecked(new_size, old.align()) })
    })
}

/// Return the block at `ptr` to the allocator.
///
/// # Safety
///
/// `ptr` must have been returned by this module for `layout` and not freed.
pub unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
    // SAFETY: forwarded from the caller's contract.
    unsafe { sys::dealloc(ptr.as_ptr(), layout) }
}

/// Terminate on an error from an infallible growth path.
///
/// Allocation failures go to [`std::alloc::handle_alloc_error`] (abort by
/// default), capacity overflow panics. This is the policy std collections
/// apply; callers who want to recover use the `try_*` methods.
#[cold]
#[track_caller]
pub fn handle_failure(err: ContainerError) -> ! {
    match err {
        ContainerError::AllocationFailed { bytes, align } => {
            match Layout::from_size_align(bytes, align) {
                Ok(layout) => sys::handle_alloc_error(layout),
                Err(_) => panic!("allocation failed: {bytes} bytes"),
            }
        }
        ContainerError::CapacityOverflow => panic!("capacity overflow"),
        other => panic!("{other}"),
    }
}

/// Unwrap the result of an internal growth step, terminating on failure.
#[inline]
#[track_caller]
pub fn infallible<T>(result: Result<T, ContainerError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => handle_failure(err),
    }
}

fn failed(layout: Layout) -> ContainerError {
    log::warn!(
        "allocator returned null for {} bytes (align {})",
        layout.size(),
        layout.align()
    );
    ContainerError::AllocationFailed {
        bytes: layout.size(),
        align: layout.align(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_layout_overflow_is_reported() {
        assert_eq!(
            array_layout::<u64>(usize::MAX),
            Err(ContainerError::CapacityOverflow)
        );
        assert_eq!(array_layout::<u64>(4).unwrap().size(), 32);
    }

    #[test]
    fn allocate_and_free_round_trip() {
        let layout = array_layout::<u32>(16).unwrap();
        unsafe {
            let ptr = allocate_zeroed(layout).unwrap();
            let words = std::slice::from_raw_parts(ptr.as_ptr() as *const u32, 16);
            assert!(words.iter().all(|&w| w == 0));
            let ptr = reallocate(ptr, layout, 64 * 4).unwrap();
            deallocate(ptr, array_layout::<u32>(64).unwrap());
        }
    }

    #[test]
    fn infallible_passes_values_through() {
        assert_eq!(infallible(Ok::<_, ContainerError>(5)), 5);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_panics_on_overflow() {
        infallible::<()>(Err(ContainerError::CapacityOverflow));
    }
}
