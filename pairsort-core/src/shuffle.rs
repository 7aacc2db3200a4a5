/// Uniform in-place permutation.
use rand::Rng;

/// Fisher–Yates: for `i` from the last index down to 1, swap with a uniform
/// index in `[0, i]`.
pub fn shuffle<T>(values: &mut [T], rng: &mut impl Rng) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}
