//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every index-taking mutator validates its arguments and reports a bad
/// index through this type rather than touching memory outside the live
/// range. Allocation failures surface here from the `try_*` family; the
/// infallible wrappers hand them to [`crate::alloc::handle_failure`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// An index was outside the valid range for the operation.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A half-open range `[start, end)` was reversed or exceeded the length.
    InvalidRange {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The global allocator returned null.
    AllocationFailed {
        /// Size of the rejected request in bytes.
        bytes: usize,
        /// Alignment of the rejected request.
        align: usize,
    },
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// A list node handle refers to a freed or reused slot.
    StaleNode {
        /// Pool slot the handle points at.
        slot: u32,
        /// Generation recorded in the handle.
        generation: u32,
    },
}

impl ContainerError {
    /// Check `index < len`, the precondition for reading or removing.
    pub fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }

    /// Check `index <= len`, the precondition for inserting or splitting.
    pub fn check_position(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }

    /// Check `start <= end <= len`.
    pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), Self> {
        if start <= end && end <= len {
            Ok(())
        } else {
            Err(Self::InvalidRange { start, end, len })
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "range {start}..{end} invalid for length {len}")
            }
            Self::AllocationFailed { bytes, align } => {
                write!(
                    f,
                    "allocation failed: {bytes} bytes with alignment {align}"
                )
            }
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::StaleNode { slot, generation } => {
                write!(f, "stale node handle: slot {slot}, generation {generation}")
            }
        }
    }
}

impl Error for ContainerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_rejects_len() {
        assert!(ContainerError::check_index(2, 3).is_ok());
        assert_eq!(
            ContainerError::check_index(3, 3),
            Err(ContainerError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn check_position_accepts_len() {
        assert!(ContainerError::check_position(3, 3).is_ok());
        assert!(ContainerError::check_position(4, 3).is_err());
    }

    #[test]
    fn check_range_rejects_reversed_and_overlong() {
        assert!(ContainerError::check_range(0, 0, 0).is_ok());
        assert!(ContainerError::check_range(1, 3, 3).is_ok());
        assert!(matches!(
            ContainerError::check_range(2, 1, 3),
            Err(ContainerError::InvalidRange { start: 2, end: 1, len: 3 })
        ));
        assert!(ContainerError::check_range(1, 4, 3).is_err());
    }

    #[test]
    fn display_mentions_values() {
        let msg = ContainerError::IndexOutOfRange { index: 7, len: 2 }.to_string();
        assert!(msg.contains('7') && msg.contains('2'));
        assert_eq!(ContainerError::CapacityOverflow.to_string(), "capacity overflow");
    }
}
