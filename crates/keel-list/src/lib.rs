//! Doubly linked list for Keel.
//!
//! [`List<T>`] keeps its nodes in a pool of slots addressed by index rather
//! than in individually allocated boxes:
//!
//! ```text
//!  slot:   0     1     2     3
//!        [ A ] [ · ] [ C ] [ B ]      free: [1]
//!
//!  head = 0   A.next = 3   B.next = 2   C.next = -
//!  tail = 2   C.prev = 3   B.prev = 0   A.prev = -
//! ```
//!
//! Links are `u32` slot indices, removal pushes the slot onto a free list,
//! and insertion pops from it before growing the pool. Each slot carries a
//! generation counter that is bumped on removal, which lets [`NodeId`]
//! handles detect that their node is gone.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod iter;
mod list;
mod node;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::List;
pub use node::NodeId;

pub use keel_core::ContainerError;
