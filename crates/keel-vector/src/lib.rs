//! Growable contiguous arrays for Keel.
//!
//! [`Vector<T>`] owns a single heap buffer through [`keel_core::RawBuf`] and
//! tracks how many leading slots hold live values. Beyond the usual
//! push/pop/insert/remove it offers bulk transfers between instances:
//!
//! | Operation | Source afterwards |
//! |-----------|-------------------|
//! | [`Vector::merge`], `+= &other` | unchanged (elements cloned) |
//! | [`Vector::merge_from`], `+= other` | empty, buffer released |
//! | [`Vector::insert_from`] | empty, buffer released |
//! | [`Vector::split_off_into`] | truncated at the split point |
//! | [`Vector::erase_into`] | range removed |
//!
//! # Growth
//!
//! Single-element appends grow to `(capacity + 1) * 2`. Bulk operations and
//! explicit [`Vector::reserve`] / [`Vector::resize`] grow to exactly the
//! size they need. Capacity only shrinks through [`Vector::shrink`] and
//! [`Vector::destroy`], when [`Vector::insert_from`] or
//! [`Vector::merge_from`] release their source, or when
//! [`Vector::split_off_into`] sizes its destination to exactly the moved
//! elements. [`Vector::erase_into`] only ever grows its destination.
//!
//! # Bounds
//!
//! Every index-taking mutator returns `Result<_, ContainerError>` and leaves
//! the vector untouched on a bad index. Subscripting (`v[i]`) goes through
//! slice indexing and panics; `get_unchecked` (via deref) is the unchecked
//! escape hatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod array;
mod iter;
mod macros;
mod search;

pub use array::Vector;
pub use iter::IntoIter;

pub use keel_core::ContainerError;
