//! Value and predicate queries, and predicate-driven removal.

use crate::Vector;

impl<T: PartialEq> Vector<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    /// Index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Vector<T> {
    /// Number of elements matching `pred`.
    pub fn search_count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| pred(*item)).count()
    }

    /// Replace the contents of `indices` with the positions of every
    /// element matching `pred`, in ascending order.
    pub fn search_for_indices<F>(&self, mut pred: F, indices: &mut Vector<usize>)
    where
        F: FnMut(&T) -> bool,
    {
        indices.clear();
        for (i, item) in self.iter().enumerate() {
            if pred(item) {
                indices.push_back(i);
            }
        }
    }

    /// Remove every element matching `pred`, returning how many were removed.
    ///
    /// Runs as a single forward pass; survivors keep their relative order.
    pub fn remove_all<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.drain_matching(pred, drop)
    }

    /// Move every element matching `pred` into `removed`, in encounter
    /// order, replacing whatever `removed` held before.
    pub fn remove_all_into<F>(&mut self, pred: F, removed: &mut Vector<T>) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        removed.clear();
        self.drain_matching(pred, |item| removed.push_back(item))
    }

    /// Compact the survivors of `pred` to the front, handing each match to
    /// `sink`.
    ///
    /// `len` is zero while the pass runs, so a panic in `pred` or `sink`
    /// leaks the unprocessed elements instead of dropping them twice.
    fn drain_matching<F, S>(&mut self, mut pred: F, mut sink: S) -> usize
    where
        F: FnMut(&T) -> bool,
        S: FnMut(T),
    {
        let len = self.len;
        self.len = 0;
        let base = self.buf.ptr();
        let mut kept = 0;
        for i in 0..len {
            // SAFETY: i < len, and slot i is still live: earlier iterations
            // only wrote to slots below `kept <= i`.
            unsafe {
                let current = base.add(i);
                if pred(&*current) {
                    sink(current.read());
                } else {
                    if kept != i {
                        std::ptr::copy_nonoverlapping(current, base.add(kept), 1);
                    }
                    kept += 1;
                }
            }
        }
        self.len = kept;
        len - kept
    }
}

impl<T: Clone> Vector<T> {
    /// Replace the contents of `found` with clones of every element
    /// matching `pred`.
    pub fn search_for<F>(&self, mut pred: F, found: &mut Vector<T>)
    where
        F: FnMut(&T) -> bool,
    {
        found.clear();
        for item in self.iter().filter(|item| pred(*item)) {
            found.push_back(item.clone());
        }
    }
}
