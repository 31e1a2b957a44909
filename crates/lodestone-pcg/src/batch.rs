//! Batch draws.
//!
//! Plain batches repeat the scalar draw `count` times. Bounded and candidate
//! batches take a [`Sampling`] mode; in [`Sampling::Unique`] mode duplicates
//! are rejected and redrawn until `count` distinct values are collected, in
//! draw order.

use lodestone_core::error::GeneratorError;
use lodestone_core::rng::{Enumerable, Sampling};
use tracing::warn;

use crate::draws::{double_in, float_in};
use crate::generator::PcgRng;

/// Number of raw outputs a floating-point draw can map from.
const RAW_DOMAIN: u64 = 1 << 32;

/// Distinct values a `[min, max)` draw can produce. A degenerate range only
/// ever produces the zero sentinel.
fn range_width(min: i64, max: i64) -> u64 {
    if max > min { max.abs_diff(min) } else { 1 }
}

/// Distinct values `map` produces over every raw output, counting no further
/// than `limit`.
///
/// `map` must be non-decreasing in the raw value, so each distinct value
/// covers one contiguous run of raw outputs; the end of each run is found by
/// bisection.
#[allow(clippy::cast_possible_truncation)]
fn reachable_values<T, F>(limit: u64, map: F) -> u64
where
    T: PartialEq,
    F: Fn(u32) -> T,
{
    let mut found = 0;
    let mut start = 0_u64;
    while start < RAW_DOMAIN && found < limit {
        let value = map(start as u32);
        found += 1;

        // map(low) == value; high is past the run or the end of the domain.
        let (mut low, mut high) = (start, RAW_DOMAIN);
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if map(mid as u32) == value {
                low = mid;
            } else {
                high = mid;
            }
        }
        start = high;
    }
    found
}

/// Distinct values available to a floating-point batch. Only unique batches
/// need the exact count; any float range yields at least one value.
fn float_available<T, F>(count: usize, sampling: Sampling, map: F) -> u64
where
    T: PartialEq,
    F: Fn(u32) -> T,
{
    match sampling {
        Sampling::Repeat => 1,
        Sampling::Unique => reachable_values(count as u64, map),
    }
}

/// Number of distinct elements in `candidates`, by value.
fn distinct_count<T: PartialEq>(candidates: &[T]) -> u64 {
    candidates
        .iter()
        .enumerate()
        .filter(|(i, candidate)| !candidates[..*i].contains(candidate))
        .count() as u64
}

impl PcgRng {
    /// Collects `count` values from `draw`, honouring `sampling`.
    ///
    /// Fails without consuming any draw when the request cannot be
    /// satisfied: a unique batch larger than `available`, or a non-empty
    /// batch over an empty domain.
    fn draw_batch<T, F>(
        &mut self,
        count: usize,
        available: u64,
        sampling: Sampling,
        mut draw: F,
    ) -> Result<Vec<T>, GeneratorError>
    where
        T: PartialEq,
        F: FnMut(&mut Self) -> T,
    {
        let requested = count as u64;
        let impossible = match sampling {
            Sampling::Repeat => requested > 0 && available == 0,
            Sampling::Unique => requested > available,
        };
        if impossible {
            warn!(
                requested,
                available,
                ?sampling,
                "not enough distinct values for batch draw"
            );
            return Err(GeneratorError::InsufficientDistinctValues {
                requested,
                available,
            });
        }

        let mut items = Vec::with_capacity(count);
        while items.len() < count {
            let value = draw(self);
            if sampling == Sampling::Repeat || !items.contains(&value) {
                items.push(value);
            }
        }
        Ok(items)
    }

    // --- plain batches ---

    pub fn next_uints(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.next_uint()).collect()
    }

    pub fn next_ints(&mut self, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.next_int()).collect()
    }

    pub fn next_floats(&mut self, count: usize) -> Vec<f32> {
        (0..count).map(|_| self.next_float()).collect()
    }

    pub fn next_doubles(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_double()).collect()
    }

    pub fn next_bytes(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.next_byte()).collect()
    }

    pub fn next_bools(&mut self, count: usize) -> Vec<bool> {
        (0..count).map(|_| self.next_bool()).collect()
    }

    // --- candidate batches ---

    /// Draws `count` elements of `candidates`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InsufficientDistinctValues` when `sampling`
    /// is unique and `candidates` holds fewer than `count` distinct values,
    /// or when `candidates` is empty and `count > 0`.
    pub fn next_choices<T>(
        &mut self,
        candidates: &[T],
        count: usize,
        sampling: Sampling,
    ) -> Result<Vec<T>, GeneratorError>
    where
        T: Clone + PartialEq,
    {
        let available = match sampling {
            Sampling::Repeat => candidates.len() as u64,
            Sampling::Unique => distinct_count(candidates),
        };
        self.draw_batch(count, available, sampling, |rng| {
            rng.next_choice(candidates).cloned()
        })
        .map(|items| items.into_iter().flatten().collect())
    }

    /// Draws `count` variants of `E`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InsufficientDistinctValues` when `sampling`
    /// is unique and `E` has fewer than `count` variants.
    pub fn next_variants<E: Enumerable>(
        &mut self,
        count: usize,
        sampling: Sampling,
    ) -> Result<Vec<E>, GeneratorError> {
        self.next_choices(E::VARIANTS, count, sampling)
    }

    // --- bounded batches ---

    /// Draws `count` values in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InsufficientDistinctValues` when `sampling`
    /// is unique and the range holds fewer than `count` values.
    pub fn next_uints_below(
        &mut self,
        count: usize,
        max: u32,
        sampling: Sampling,
    ) -> Result<Vec<u32>, GeneratorError> {
        self.next_uints_in(count, 0, max, sampling)
    }

    /// Draws `count` values in `[0, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_below`](Self::next_uints_below).
    pub fn next_ints_below(
        &mut self,
        count: usize,
        max: i32,
        sampling: Sampling,
    ) -> Result<Vec<i32>, GeneratorError> {
        self.next_ints_in(count, 0, max, sampling)
    }

    /// Draws `count` values in `[0.0, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_below`](Self::next_uints_below).
    pub fn next_floats_below(
        &mut self,
        count: usize,
        max: f32,
        sampling: Sampling,
    ) -> Result<Vec<f32>, GeneratorError> {
        self.next_floats_in(count, 0.0, max, sampling)
    }

    /// Draws `count` values in `[0.0, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_below`](Self::next_uints_below).
    pub fn next_doubles_below(
        &mut self,
        count: usize,
        max: f64,
        sampling: Sampling,
    ) -> Result<Vec<f64>, GeneratorError> {
        self.next_doubles_in(count, 0.0, max, sampling)
    }

    /// Draws `count` values in `[0, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_below`](Self::next_uints_below).
    pub fn next_bytes_below(
        &mut self,
        count: usize,
        max: u8,
        sampling: Sampling,
    ) -> Result<Vec<u8>, GeneratorError> {
        self.next_bytes_in(count, 0, max, sampling)
    }

    // --- ranged batches ---

    /// Draws `count` values in `[min, max)`. A degenerate range yields zeros
    /// and counts as a domain of one value.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InsufficientDistinctValues` when `sampling`
    /// is unique and the range holds fewer than `count` values.
    pub fn next_uints_in(
        &mut self,
        count: usize,
        min: u32,
        max: u32,
        sampling: Sampling,
    ) -> Result<Vec<u32>, GeneratorError> {
        let available = range_width(i64::from(min), i64::from(max));
        self.draw_batch(count, available, sampling, |rng| rng.next_uint_in(min, max))
    }

    /// Draws `count` values in `[min, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_in`](Self::next_uints_in).
    pub fn next_ints_in(
        &mut self,
        count: usize,
        min: i32,
        max: i32,
        sampling: Sampling,
    ) -> Result<Vec<i32>, GeneratorError> {
        let available = range_width(i64::from(min), i64::from(max));
        self.draw_batch(count, available, sampling, |rng| rng.next_int_in(min, max))
    }

    /// Draws `count` values in `[min, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_in`](Self::next_uints_in).
    pub fn next_floats_in(
        &mut self,
        count: usize,
        min: f32,
        max: f32,
        sampling: Sampling,
    ) -> Result<Vec<f32>, GeneratorError> {
        let available = float_available(count, sampling, |raw| float_in(raw, min, max));
        self.draw_batch(count, available, sampling, |rng| rng.next_float_in(min, max))
    }

    /// Draws `count` values in `[min, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_in`](Self::next_uints_in).
    pub fn next_doubles_in(
        &mut self,
        count: usize,
        min: f64,
        max: f64,
        sampling: Sampling,
    ) -> Result<Vec<f64>, GeneratorError> {
        let available = float_available(count, sampling, |raw| double_in(raw, min, max));
        self.draw_batch(count, available, sampling, |rng| rng.next_double_in(min, max))
    }

    /// Draws `count` values in `[min, max)`.
    ///
    /// # Errors
    ///
    /// See [`next_uints_in`](Self::next_uints_in).
    pub fn next_bytes_in(
        &mut self,
        count: usize,
        min: u8,
        max: u8,
        sampling: Sampling,
    ) -> Result<Vec<u8>, GeneratorError> {
        let available = range_width(i64::from(min), i64::from(max));
        self.draw_batch(count, available, sampling, |rng| rng.next_byte_in(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Suit {
        Clubs,
        Diamonds,
        Hearts,
        Spades,
    }

    impl Enumerable for Suit {
        const VARIANTS: &'static [Self] = &[Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
    }

    fn assert_distinct<T: PartialEq + std::fmt::Debug>(items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            assert!(!items[..i].contains(item), "duplicate {item:?} in {items:?}");
        }
    }

    #[test]
    fn test_plain_batches_match_repeated_scalar_draws() {
        let mut batch = PcgRng::seeded(3);
        let mut scalar = PcgRng::seeded(3);

        let values = batch.next_uints(8);
        let expected: Vec<u32> = (0..8).map(|_| scalar.next_uint()).collect();

        assert_eq!(values, expected);
        assert_eq!(batch, scalar);
    }

    #[test]
    fn test_plain_batch_lengths() {
        let mut rng = PcgRng::seeded(3);

        assert_eq!(rng.next_ints(5).len(), 5);
        assert_eq!(rng.next_floats(6).len(), 6);
        assert_eq!(rng.next_doubles(7).len(), 7);
        assert_eq!(rng.next_bytes(8).len(), 8);
        assert_eq!(rng.next_bools(9).len(), 9);
        assert!(rng.next_uints(0).is_empty());
    }

    #[test]
    fn test_unique_choices_exceeding_candidates_is_rejected() {
        let mut rng = PcgRng::seeded(1);
        let before = rng.clone();
        let candidates = [1, 2, 3, 4, 5];

        let result = rng.next_choices(&candidates, 10, Sampling::Unique);

        assert_eq!(
            result,
            Err(GeneratorError::InsufficientDistinctValues {
                requested: 10,
                available: 5,
            })
        );
        assert_eq!(rng, before, "a rejected batch consumes nothing");
    }

    #[test]
    fn test_unique_choices_exhaust_candidates() {
        let mut rng = PcgRng::seeded(1);
        let candidates = ["north", "east", "south", "west"];

        let mut picked = rng.next_choices(&candidates, 4, Sampling::Unique).unwrap();

        assert_distinct(&picked);
        picked.sort_unstable();
        let mut all = candidates.to_vec();
        all.sort_unstable();
        assert_eq!(picked, all);
    }

    #[test]
    fn test_duplicate_candidates_count_once() {
        let mut rng = PcgRng::seeded(1);
        let candidates = [7, 7, 8];

        let result = rng.next_choices(&candidates, 3, Sampling::Unique);

        assert!(matches!(
            result,
            Err(GeneratorError::InsufficientDistinctValues { available: 2, .. })
        ));
    }

    #[test]
    fn test_repeat_choices_may_exceed_candidates() {
        let mut rng = PcgRng::seeded(1);

        let picked = rng.next_choices(&['a', 'b'], 50, Sampling::Repeat).unwrap();

        assert_eq!(picked.len(), 50);
        assert!(picked.iter().all(|c| ['a', 'b'].contains(c)));
    }

    #[test]
    fn test_choices_from_empty_candidates() {
        let mut rng = PcgRng::seeded(1);
        let empty: [u8; 0] = [];

        assert_eq!(rng.next_choices(&empty, 0, Sampling::Repeat), Ok(vec![]));
        assert!(rng.next_choices(&empty, 1, Sampling::Repeat).is_err());
    }

    #[test]
    fn test_unique_variants() {
        let mut rng = PcgRng::seeded(12);

        let suits = rng.next_variants::<Suit>(4, Sampling::Unique).unwrap();
        assert_eq!(suits.len(), 4);
        assert_distinct(&suits);

        assert!(rng.next_variants::<Suit>(5, Sampling::Unique).is_err());
    }

    #[test]
    fn test_unique_ranged_ints() {
        let mut rng = PcgRng::seeded(12);

        let values = rng.next_ints_in(20, -10, 10, Sampling::Unique).unwrap();

        assert_eq!(values.len(), 20);
        assert_distinct(&values);
        assert!(values.iter().all(|v| (-10..10).contains(v)));
    }

    #[test]
    fn test_unique_ranged_width_is_checked() {
        let mut rng = PcgRng::seeded(12);

        assert_eq!(
            rng.next_uints_in(6, 10, 15, Sampling::Unique),
            Err(GeneratorError::InsufficientDistinctValues {
                requested: 6,
                available: 5,
            })
        );
        assert!(rng.next_bytes_below(4, 3, Sampling::Unique).is_err());
        assert!(rng.next_ints_below(3, 3, Sampling::Unique).is_ok());
    }

    #[test]
    fn test_degenerate_range_is_a_single_value_domain() {
        let mut rng = PcgRng::seeded(12);

        assert_eq!(rng.next_uints_in(1, 5, 5, Sampling::Unique), Ok(vec![0]));
        assert!(rng.next_uints_in(2, 5, 5, Sampling::Unique).is_err());
        assert!(rng.next_floats_in(2, 1.0, 0.5, Sampling::Unique).is_err());
        assert_eq!(rng.next_ints_in(3, 4, 2, Sampling::Repeat), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn test_unique_floats_are_distinct_and_bounded() {
        let mut rng = PcgRng::seeded(40);

        let values = rng.next_doubles_in(100, -1.0, 1.0, Sampling::Unique).unwrap();
        assert_distinct(&values);
        assert!(values.iter().all(|v| (-1.0..1.0).contains(v)));

        let values = rng.next_floats_below(50, 3.0, Sampling::Repeat).unwrap();
        assert!(values.iter().all(|v| (0.0..3.0).contains(v)));

        let values = rng.next_doubles_below(10, 1.0, Sampling::Unique).unwrap();
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn test_unique_floats_in_one_value_range_fail_without_drawing() {
        let mut rng = PcgRng::seeded(3);
        let before = rng.clone();

        assert_eq!(
            rng.next_floats_in(2, 0.0, f32::from_bits(1), Sampling::Unique),
            Err(GeneratorError::InsufficientDistinctValues {
                requested: 2,
                available: 1,
            })
        );
        assert_eq!(
            rng.next_floats_in(2, 16_777_216.0, 16_777_218.0, Sampling::Unique),
            Err(GeneratorError::InsufficientDistinctValues {
                requested: 2,
                available: 1,
            })
        );
        let one_ulp = f64::from_bits(1.0_f64.to_bits() + 1);
        assert!(rng.next_doubles_in(3, 1.0, one_ulp, Sampling::Unique).is_err());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_unique_floats_exhaust_a_four_value_range() {
        let mut rng = PcgRng::seeded(3);
        let steps: Vec<f32> = (0..=4).map(|i| f32::from_bits(1.0_f32.to_bits() + i)).collect();

        let mut values = rng
            .next_floats_in(4, steps[0], steps[4], Sampling::Unique)
            .unwrap();
        values.sort_by(f32::total_cmp);

        assert_eq!(values, steps[..4]);
        assert_eq!(
            rng.next_floats_in(5, steps[0], steps[4], Sampling::Unique),
            Err(GeneratorError::InsufficientDistinctValues {
                requested: 5,
                available: 4,
            })
        );
    }

    #[test]
    fn test_reachable_values_counts_runs_up_to_limit() {
        assert_eq!(reachable_values(10, |raw| raw >> 30), 4);
        assert_eq!(reachable_values(2, |raw| raw >> 30), 2);
        assert_eq!(reachable_values(10, |_| 0.0_f32), 1);
    }

    #[test]
    fn test_unique_uints_below_full_domain() {
        let mut rng = PcgRng::seeded(40);

        let mut values = rng.next_uints_below(16, 16, Sampling::Unique).unwrap();
        values.sort_unstable();

        assert_eq!(values, (0..16).collect::<Vec<u32>>());
    }
}
