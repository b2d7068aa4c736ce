//! Node handles and pool slots.

use std::fmt;

/// Handle to one node of a [`List`](crate::List).
///
/// A handle stays valid until its node is removed. Every removal bumps the
/// slot's generation, so a handle kept past that point is reported as
/// [`ContainerError::StaleNode`](keel_core::ContainerError::StaleNode)
/// instead of silently reaching whichever value reused the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Pool slot this handle refers to.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Generation of the slot when the handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(slot={}, gen={})", self.slot, self.generation)
    }
}

/// A linked value with its neighbours' slot indices.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<u32>,
    pub(crate) next: Option<u32>,
}

/// One pool entry. `node` is `None` while the slot sits on the free list.
pub(crate) struct Slot<T> {
    pub(crate) generation: u32,
    pub(crate) node: Option<Node<T>>,
}
