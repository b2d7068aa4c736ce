//! Keel: owned-buffer container primitives.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Keel sub-crates. For most users, adding `keel` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // Growable array with explicit ownership transfer.
//! let mut a = vector![1, 1, 1];
//! let mut b = Vector::from_elem(2, 2);
//! a.merge_from(&mut b);
//! assert_eq!(a, [1, 1, 1, 2, 2]);
//! assert!(b.as_ptr().is_null());
//!
//! // Terminated character buffer.
//! let greeting = String8::from("Hello").appended(", World!");
//! assert_eq!(greeting, "Hello, World!");
//! assert_eq!(greeting.as_units_with_nul().last(), Some(&0));
//!
//! // Linked list with stable node handles.
//! let mut list = List::new();
//! let mid = list.push_back('b');
//! list.insert_before(mid, 'a')?;
//! list.insert_after(mid, 'c')?;
//! assert_eq!(list.iter().collect::<String>(), "abc");
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `keel-core` | `ContainerError`, growth and string configuration, `RawBuf` |
//! | [`vector`] | `keel-vector` | `Vector<T>` and its owning iterator |
//! | [`string`] | `keel-string` | `StringBase<C>`, `CharUnit`, width aliases |
//! | [`list`] | `keel-list` | `List<T>`, `NodeId`, list iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration, and raw buffers (`keel-core`).
///
/// Most users only need [`core::ContainerError`] from this module; it is
/// also available in the [`prelude`].
pub use keel_core as core;

/// Growable contiguous arrays (`keel-vector`).
pub use keel_vector as vector;

/// Character buffers generic over unit width (`keel-string`).
///
/// [`string::StringBase`] is the single implementation; [`string::String8`],
/// [`string::String16`], [`string::String32`], [`string::WString`], and
/// [`string::NarrowString`] fix the unit type.
pub use keel_string as string;

/// Pooled doubly linked lists (`keel-list`).
pub use keel_list as list;

pub use keel_vector::vector;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    // Errors and configuration
    pub use keel_core::{ContainerError, StringConfig};

    // Vector
    pub use keel_vector::{vector, Vector};

    // Strings
    pub use keel_string::{
        CharUnit, NarrowString, String16, String32, String8, StringBase, WString, END,
    };

    // List
    pub use keel_list::{List, NodeId};
}
