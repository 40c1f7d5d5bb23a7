//! Random, size-bounded sampling for "refresh for different results" views

use rand::Rng;
use rand::seq::SliceRandom;

/// Return up to `k` elements of `items` in uniformly random order.
///
/// The input is copied before shuffling and never mutated. `k == 0` or an
/// empty input yields an empty vector; `k >= items.len()` yields a full
/// shuffled copy.
pub fn sample<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    sample_with(items, k, &mut rand::rng())
}

/// [`sample`] with a caller-provided RNG.
pub fn sample_with<T, R>(items: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if k == 0 || items.is_empty() {
        return Vec::new();
    }

    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(k.min(items.len()));
    shuffled
}
