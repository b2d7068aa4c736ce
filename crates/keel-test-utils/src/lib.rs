//! Test fixtures for Keel development.
//!
//! Provides a drop-counting element type ([`DropTracker`] / [`Tracked`]) for
//! proving that containers neither leak nor double-drop, plus small sequence
//! builders that work with any `FromIterator` container and a seeded
//! [`IndexStream`] for randomised operation sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod drops;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub use drops::{DropTracker, Tracked};

/// Collect `0..n` into any container.
pub fn seq<C: FromIterator<i32>>(n: i32) -> C {
    (0..n).collect()
}

/// Collect `n` clones of `value` into any container.
pub fn filled<T: Clone, C: FromIterator<T>>(n: usize, value: T) -> C {
    std::iter::repeat_n(value, n).collect()
}

/// Seeded stream of indices for randomised churn tests.
///
/// The same seed always yields the same sequence.
pub struct IndexStream {
    rng: ChaCha8Rng,
}

impl IndexStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// An index in `0..bound`, or `0` when `bound` is zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.random_range(0..bound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_and_filled_collect() {
        let v: Vec<i32> = seq(4);
        assert_eq!(v, vec![0, 1, 2, 3]);
        let f: Vec<char> = filled(3, 'q');
        assert_eq!(f, vec!['q'; 3]);
    }

    #[test]
    fn index_stream_stays_in_bounds() {
        let mut s = IndexStream::new(7);
        for bound in 1..100 {
            assert!(s.next_below(bound) < bound);
        }
        assert_eq!(s.next_below(0), 0);
    }

    #[test]
    fn index_stream_covers_small_ranges() {
        let mut s = IndexStream::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[s.next_below(4)] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn index_stream_is_deterministic() {
        let mut a = IndexStream::new(42);
        let mut b = IndexStream::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_below(1000), b.next_below(1000));
        }
    }
}
