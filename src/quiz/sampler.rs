// SPDX-License-Identifier: MPL-2.0
//! Unbiased sampling helpers over an injected RNG.
//!
//! Callers pass `&mut impl Rng` so production code can run on entropy while
//! tests seed a `SmallRng` for deterministic draws.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly random permutation of `items` as a new vector.
///
/// The input is never mutated; `shuffle` on the copy is the Fisher–Yates
/// walk, so every permutation is equally likely.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Draws `n` distinct items from `items` uniformly at random, without
/// replacement.
///
/// Returns fewer than `n` items when the input is shorter than `n`; callers
/// are expected to guarantee `n <= items.len()`.
#[must_use]
pub fn pick_random<T: Clone>(items: &[T], n: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut copy = shuffle(items, rng);
    copy.truncate(n);
    copy
}
