//! Shared helpers for integration tests.

#![allow(dead_code)]

use burn::backend::ndarray::{NdArray, NdArrayDevice};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub type TestBackend = NdArray;

pub fn test_device() -> NdArrayDevice {
    NdArrayDevice::Cpu
}

/// Random corpus of `n` reviews drawn from a small word pool, with a
/// few punctuation-only lines mixed in. Returns (reviews, labels).
pub fn random_corpus(seed: u64, n: usize) -> (String, String) {
    const WORDS: &[&str] = &[
        "good", "bad", "movie", "film", "plot", "actor", "great", "boring",
        "the", "a", "and", "was", "not", "very", "fun", "slow",
    ];

    let mut rng     = StdRng::seed_from_u64(seed);
    let mut reviews = Vec::with_capacity(n);
    let mut labels  = Vec::with_capacity(n);

    for _ in 0..n {
        let review = if rng.gen_ratio(1, 10) {
            "...!?".to_string()
        } else {
            let len = rng.gen_range(1..40);
            (0..len)
                .map(|_| {
                    let w = WORDS[rng.gen_range(0..WORDS.len())];
                    if rng.gen_ratio(1, 8) { format!("{w},") } else { w.to_string() }
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        reviews.push(review);
        labels.push(if rng.gen_bool(0.5) { "positive" } else { "negative" });
    }

    (reviews.join("\n"), labels.join("\n"))
}
