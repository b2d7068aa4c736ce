//! Benchmark workloads for the Keel containers.
//!
//! Every workload is generated from a seed with [`ChaCha8Rng`], so runs are
//! reproducible across machines:
//!
//! - [`insertion_positions`]: valid insert indices for a container that
//!   grows by one per step
//! - [`removal_mask`]: which elements a filter pass should drop
//! - [`words`]: short lowercase ASCII words for string building

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Element count of the append-through-insert workload.
pub const INSERT_COUNT: usize = 100_000;

/// `n` insert positions where the `i`-th lies in `0..=i`.
pub fn insertion_positions(seed: u64, n: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|i| rng.random_range(0..=i)).collect()
}

/// `n` flags, each `true` with probability `percent / 100`.
pub fn removal_mask(seed: u64, n: usize, percent: u32) -> Vec<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..100) < percent).collect()
}

/// `n` lowercase words of 1 to `max_len` letters.
pub fn words(seed: u64, n: usize, max_len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.random_range(1..=max_len.max(1));
            (0..len)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect()
        })
        .collect()
}
