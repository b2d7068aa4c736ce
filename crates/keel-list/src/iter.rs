//! Borrowing and owning iterators over a [`List`].

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::node::Slot;
use crate::List;

/// Borrowing iterator over a [`List`], front to back.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let (front, back) = list.ends();
        Self {
            list,
            front,
            back,
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.linked(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.linked(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`List`], front to back.
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _list: PhantomData<&'a mut List<T>>,
}

// SAFETY: IterMut hands out &mut T from a uniquely borrowed list, like
// slice::IterMut.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: see Send.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let (front, back) = list.ends();
        let remaining = list.len();
        Self {
            slots: list.slots_mut_ptr(),
            front,
            back,
            remaining,
            _list: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `slot` must be a linked slot not yet yielded by this iterator.
    unsafe fn node_at(&mut self, slot: u32) -> Option<&'a mut crate::node::Node<T>> {
        // SAFETY: the list is mutably borrowed for 'a, so the pool cannot
        // move, and the caller guarantees no other reference to this slot.
        unsafe { (*self.slots.add(slot as usize)).node.as_mut() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front?;
        // SAFETY: `remaining` counts the nodes between `front` and `back`
        // inclusive, so each linked slot is yielded at most once.
        let node = unsafe { self.node_at(slot) }?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back?;
        // SAFETY: as for next.
        let node = unsafe { self.node_at(slot) }?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`List`], front to back.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward_agree() {
        let list: List<i32> = (1..=5).collect();
        let fwd: Vec<_> = list.iter().copied().collect();
        let mut bwd: Vec<_> = list.iter().rev().copied().collect();
        bwd.reverse();
        assert_eq!(fwd, bwd);
        assert_eq!(list.iter().len(), 5);
    }

    #[test]
    fn meeting_in_the_middle_stops() {
        let list: List<i32> = (1..=4).collect();
        let mut it = list.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list: List<i32> = (1..=3).collect();
        for v in &mut list {
            *v *= 10;
        }
        let mut it = list.iter_mut();
        if let Some(last) = it.next_back() {
            *last += 1;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 31]);
    }

    #[test]
    fn owned_iteration_drains_from_both_ends() {
        let list: List<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut it = list.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().as_deref(), Some("c"));
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.collect::<Vec<_>>(), vec!["b".to_string()]);
    }
}
