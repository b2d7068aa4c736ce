//! Drop accounting.
//!
//! A [`DropTracker`] hands out [`Tracked`] values and counts how many were
//! created (including clones) and how many were dropped. After a container
//! is dropped, `live() == 0` proves nothing leaked; a double drop shows up
//! as `dropped() > created()`.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    created: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared drop counter for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropTracker {
    counters: Arc<Counters>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drops are counted by this tracker.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> usize {
        self.counters.dropped.load(Ordering::Relaxed)
    }

    /// Values created but not yet dropped.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created.
    pub fn live(&self) -> usize {
        let (created, dropped) = (self.created(), self.dropped());
        assert!(
            dropped <= created,
            "double drop: {dropped} drops for {created} values"
        );
        created - dropped
    }
}

/// A value whose clones and drops are reported to a [`DropTracker`].
pub struct Tracked<T> {
    pub value: T,
    counters: Arc<Counters>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value.clone(),
            counters: Arc::clone(&self.counters),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counters.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
