//! The [`List`] type and its positional and handle-based operations.

use std::fmt;
use std::mem;

use keel_core::alloc::infallible;
use keel_core::ContainerError;
use keel_vector::Vector;

use crate::iter::{Iter, IterMut};
use crate::node::{Node, NodeId, Slot};

/// A doubly linked list stored in an index-addressed node pool.
///
/// Nodes live in a [`Vector`] of slots and link to each other by slot
/// index. Removing a node puts its slot on a free list; the next insertion
/// reuses the most recently freed slot before the pool grows.
///
/// Positional operations (`insert`, `remove`, `get`) walk from whichever
/// end is closer. Handle operations (`insert_before`, `remove_node`,
/// `node`) are O(1) and reject handles whose node has been removed.
pub struct List<T> {
    slots: Vector<Slot<T>>,
    free: Vector<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
    /// Generation given to slots appended to the pool. Raised past every
    /// retired generation when the pool is reset, so handles issued before
    /// a `clear` or `take` stay stale.
    fresh_generation: u32,
}

impl<T> List<T> {
    /// Create an empty list without allocating.
    pub const fn new() -> Self {
        Self {
            slots: Vector::new(),
            free: Vector::new(),
            head: None,
            tail: None,
            len: 0,
            fresh_generation: 0,
        }
    }

    /// Number of linked values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ── Pool plumbing ───────────────────────────────────────────

    pub(crate) fn linked(&self, slot: u32) -> &Node<T> {
        match &self.slots[slot as usize].node {
            Some(node) => node,
            None => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    fn linked_mut(&mut self, slot: u32) -> &mut Node<T> {
        match &mut self.slots[slot as usize].node {
            Some(node) => node,
            None => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    pub(crate) fn slots_mut_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    pub(crate) fn ends(&self) -> (Option<u32>, Option<u32>) {
        (self.head, self.tail)
    }

    fn id_of(&self, slot: u32) -> NodeId {
        NodeId {
            slot,
            generation: self.slots[slot as usize].generation,
        }
    }

    /// Map a handle to its slot if the node it names is still linked.
    fn resolve(&self, id: NodeId) -> Result<u32, ContainerError> {
        match self.slots.get(id.slot as usize) {
            Some(s) if s.generation == id.generation && s.node.is_some() => Ok(id.slot),
            _ => Err(ContainerError::StaleNode {
                slot: id.slot,
                generation: id.generation,
            }),
        }
    }

    /// Place `value` in a free slot (or a new one) without linking it.
    fn alloc(&mut self, value: T) -> u32 {
        let node = Some(Node {
            value,
            prev: None,
            next: None,
        });
        if let Some(slot) = self.free.pop_back() {
            self.slots[slot as usize].node = node;
            return slot;
        }
        let slot = infallible(
            u32::try_from(self.slots.len()).map_err(|_| ContainerError::CapacityOverflow),
        );
        self.slots.push_back(Slot {
            generation: self.fresh_generation,
            node,
        });
        slot
    }

    /// Link an allocated `slot` between `prev` and `next`.
    fn link(&mut self, slot: u32, prev: Option<u32>, next: Option<u32>) {
        let node = self.linked_mut(slot);
        node.prev = prev;
        node.next = next;
        match prev {
            Some(p) => self.linked_mut(p).next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(n) => self.linked_mut(n).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.len += 1;
    }

    /// Unlink `slot`, retire it to the free list, and return its value.
    fn detach(&mut self, slot: u32) -> T {
        let (prev, next) = {
            let node = self.linked(slot);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.linked_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.linked_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        let entry = &mut self.slots[slot as usize];
        let node = entry.node.take();
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push_back(slot);
        match node {
            Some(node) => node.value,
            None => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    /// Raise the generation for new slots past every slot in the pool, so
    /// no handle into the current pool can match a slot issued later.
    fn retire_generations(&mut self) {
        let retired = self
            .slots
            .iter()
            .map(|s| s.generation.wrapping_add(1))
            .max()
            .unwrap_or(0);
        self.fresh_generation = self.fresh_generation.max(retired);
    }

    /// Slot of the value at `index`, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cur = self.head?;
            for _ in 0..index {
                cur = self.linked(cur).next?;
            }
            Some(cur)
        } else {
            let mut cur = self.tail?;
            for _ in 0..self.len - 1 - index {
                cur = self.linked(cur).prev?;
            }
            Some(cur)
        }
    }

    /// Link a fresh node in front of `next` (or at the tail when `None`).
    fn insert_before_slot(&mut self, next: Option<u32>, value: T) -> u32 {
        let prev = match next {
            Some(n) => self.linked(n).prev,
            None => self.tail,
        };
        let slot = self.alloc(value);
        self.link(slot, prev, next);
        slot
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Append `value`, returning a handle to its node.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let slot = self.insert_before_slot(None, value);
        self.id_of(slot)
    }

    /// Prepend `value`, returning a handle to its node.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let slot = self.insert_before_slot(self.head, value);
        self.id_of(slot)
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// Requires `index <= len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<NodeId, ContainerError> {
        ContainerError::check_position(index, self.len)?;
        let next = self.slot_at(index);
        let slot = self.insert_before_slot(next, value);
        Ok(self.id_of(slot))
    }

    /// Insert `value` immediately before the node `at`.
    pub fn insert_before(&mut self, at: NodeId, value: T) -> Result<NodeId, ContainerError> {
        let next = self.resolve(at)?;
        let slot = self.insert_before_slot(Some(next), value);
        Ok(self.id_of(slot))
    }

    /// Insert `value` immediately after the node `at`.
    pub fn insert_after(&mut self, at: NodeId, value: T) -> Result<NodeId, ContainerError> {
        let prev = self.resolve(at)?;
        let next = self.linked(prev).next;
        let slot = self.insert_before_slot(next, value);
        Ok(self.id_of(slot))
    }

    /// Insert clones of every value of `other`, in order, starting at
    /// position `index`.
    ///
    /// Requires `index <= len`. `other` is unchanged.
    pub fn insert_list(&mut self, index: usize, other: &List<T>) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        ContainerError::check_position(index, self.len)?;
        let next = self.slot_at(index);
        for value in other {
            self.insert_before_slot(next, value.clone());
        }
        Ok(())
    }

    // ── Removal ─────────────────────────────────────────────────

    /// Remove and return the last value.
    pub fn pop_back(&mut self) -> Option<T> {
        let slot = self.tail?;
        Some(self.detach(slot))
    }

    /// Remove and return the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head?;
        Some(self.detach(slot))
    }

    /// Remove and return the value at `index`.
    ///
    /// Requires `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        let slot = self.slot_at(index).ok_or(ContainerError::IndexOutOfRange {
            index,
            len: self.len,
        })?;
        Ok(self.detach(slot))
    }

    /// Remove and return the value of node `id`.
    pub fn remove_node(&mut self, id: NodeId) -> Result<T, ContainerError> {
        let slot = self.resolve(id)?;
        Ok(self.detach(slot))
    }

    /// Remove the values at positions `[start, end)`.
    ///
    /// Requires `start <= end <= len`.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), ContainerError> {
        ContainerError::check_range(start, end, self.len)?;
        let mut cur = self.slot_at(start);
        for _ in start..end {
            let Some(slot) = cur else { break };
            cur = self.linked(slot).next;
            drop(self.detach(slot));
        }
        Ok(())
    }

    /// Remove every value equal to `value`, returning how many went.
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|item| item == value)
    }

    /// Remove every value matching `pred`, returning how many went.
    ///
    /// Visits values front to back; survivors keep their order.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cur = self.head;
        while let Some(slot) = cur {
            let node = self.linked(slot);
            cur = node.next;
            if pred(&node.value) {
                drop(self.detach(slot));
                removed += 1;
            }
        }
        removed
    }

    /// Drop every value and reset the pool, keeping its allocation.
    ///
    /// Handles issued before the call are stale afterwards.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        self.retire_generations();
        log::debug!(
            "list pool reset: {} slots ({} free)",
            self.slots.len(),
            self.free.len()
        );
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Drop every value and free the pool.
    ///
    /// Idempotent; the list stays usable.
    pub fn destroy(&mut self) {
        self.clear();
        self.slots.destroy();
        self.free.destroy();
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// Handles stay valid for the returned list and are stale for `self`.
    pub fn take(&mut self) -> Self {
        self.retire_generations();
        let empty = Self {
            fresh_generation: self.fresh_generation,
            ..Self::new()
        };
        mem::replace(self, empty)
    }

    // ── Access ──────────────────────────────────────────────────

    /// The first value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.linked(slot).value)
    }

    /// The last value.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.linked(slot).value)
    }

    /// Mutable access to the first value.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.head?;
        Some(&mut self.linked_mut(slot).value)
    }

    /// Mutable access to the last value.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.tail?;
        Some(&mut self.linked_mut(slot).value)
    }

    /// The value at position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_at(index)?;
        Some(&self.linked(slot).value)
    }

    /// Mutable access to the value at position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        Some(&mut self.linked_mut(slot).value)
    }

    /// The value of node `id`.
    pub fn node(&self, id: NodeId) -> Result<&T, ContainerError> {
        let slot = self.resolve(id)?;
        Ok(&self.linked(slot).value)
    }

    /// Mutable access to the value of node `id`.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut T, ContainerError> {
        let slot = self.resolve(id)?;
        Ok(&mut self.linked_mut(slot).value)
    }

    /// Whether any value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    // ── Cursor-style navigation ─────────────────────────────────

    /// Handle to the first node.
    pub fn head_node(&self) -> Option<NodeId> {
        self.head.map(|slot| self.id_of(slot))
    }

    /// Handle to the last node.
    pub fn tail_node(&self) -> Option<NodeId> {
        self.tail.map(|slot| self.id_of(slot))
    }

    /// Handle to the node after `id`, or `None` at the tail.
    pub fn next_node(&self, id: NodeId) -> Result<Option<NodeId>, ContainerError> {
        let slot = self.resolve(id)?;
        Ok(self.linked(slot).next.map(|n| self.id_of(n)))
    }

    /// Handle to the node before `id`, or `None` at the head.
    pub fn prev_node(&self, id: NodeId) -> Result<Option<NodeId>, ContainerError> {
        let slot = self.resolve(id)?;
        Ok(self.linked(slot).prev.map(|p| self.id_of(p)))
    }

    // ── Iteration ───────────────────────────────────────────────

    /// Front-to-back iterator; also iterates back-to-front via `rev()`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Front-to-back iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones into a compact pool: the copy's slots follow list order.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
