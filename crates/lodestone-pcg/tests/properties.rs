//! Algebraic and determinism laws of the PCG generator.

use lodestone_pcg::{GeneratorError, PcgRng, Sampling};
use proptest::prelude::*;

proptest! {
    /// Same seed, same sequence.
    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u64>()) {
        let mut first = PcgRng::seeded(seed);
        let mut second = PcgRng::seeded(seed);

        for _ in 0..64 {
            prop_assert_eq!(first.next_uint(), second.next_uint());
            prop_assert_eq!(first.next_int_in(-9, 9), second.next_int_in(-9, 9));
        }
    }

    /// jump(k) followed by jump(-k) restores the exact state.
    #[test]
    fn prop_jump_then_back_is_identity(seed in any::<u64>(), steps in (i64::MIN + 1)..=i64::MAX) {
        let mut rng = PcgRng::seeded(seed);
        let before = rng.state();

        rng.jump(steps);
        rng.jump(-steps);

        prop_assert_eq!(rng.state(), before);
    }

    /// skip() k times lands on the same state as a single jump(k).
    #[test]
    fn prop_skip_repeated_equals_jump(seed in any::<u64>(), steps in 0_i64..2_000) {
        let mut stepped = PcgRng::seeded(seed);
        let mut jumped = stepped.clone();

        for _ in 0..steps {
            stepped.skip();
        }
        jumped.jump(steps);

        prop_assert_eq!(stepped.state(), jumped.state());
    }

    /// Jumping ahead k is the same as drawing k values.
    #[test]
    fn prop_jump_equals_drawing(seed in any::<u64>(), steps in 0_usize..500) {
        let mut drawn = PcgRng::seeded(seed);
        let mut jumped = drawn.clone();

        drawn.next_uints(steps);
        jumped.jump(i64::try_from(steps).unwrap());

        prop_assert_eq!(drawn.next_uint(), jumped.next_uint());
    }

    /// Jumps compose additively, including across zero.
    #[test]
    fn prop_jumps_compose(seed in any::<u64>(), a in -100_000_i64..100_000, b in -100_000_i64..100_000) {
        let mut split = PcgRng::seeded(seed);
        let mut whole = split.clone();

        split.jump(a);
        split.jump(b);
        whole.jump(a + b);

        prop_assert_eq!(split, whole);
    }

    /// Peeking never mutates and predicts the next real draw.
    #[test]
    fn prop_peek_predicts_draw(seed in any::<u64>(), steps in 1_u32..200) {
        let mut rng = PcgRng::seeded(seed);
        let before = rng.state();

        let peeked = rng.peek_uint(steps);
        prop_assert_eq!(rng.peek_uint(steps), peeked);
        prop_assert_eq!(rng.state(), before);

        rng.jump(i64::from(steps) - 1);
        prop_assert_eq!(rng.next_uint(), peeked);
    }

    /// Ranged draws stay in bounds; degenerate ranges give zero.
    #[test]
    fn prop_ranged_int_containment(seed in any::<u64>(), min in any::<i32>(), max in any::<i32>()) {
        let mut rng = PcgRng::seeded(seed);

        for _ in 0..32 {
            let value = rng.next_int_in(min, max);
            if min < max {
                prop_assert!(min <= value && value < max);
            } else {
                prop_assert_eq!(value, 0);
            }
        }
    }

    /// Float ranges stay half-open for any finite bounds, however narrow or
    /// far from zero.
    #[test]
    fn prop_ranged_float_containment(
        seed in any::<u64>(),
        a in any::<f32>().prop_filter("finite", |v| v.is_finite()),
        b in any::<f32>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(min < max);
        let mut rng = PcgRng::seeded(seed);

        for _ in 0..64 {
            let value = rng.next_float_in(min, max);
            prop_assert!(min <= value && value < max, "{} outside [{}, {})", value, min, max);
        }
    }

    #[test]
    fn prop_ranged_double_containment(
        seed in any::<u64>(),
        a in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        b in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(min < max);
        let mut rng = PcgRng::seeded(seed);

        for _ in 0..64 {
            let value = rng.next_double_in(min, max);
            prop_assert!(min <= value && value < max, "{} outside [{}, {})", value, min, max);
        }
    }

    /// One-ulp ranges hold exactly one value: the lower bound.
    #[test]
    fn prop_one_ulp_float_range_yields_min(seed in any::<u64>(), bits in 0_u32..0x7f7f_ffff) {
        let min = f32::from_bits(bits);
        let max = f32::from_bits(bits + 1);
        let mut rng = PcgRng::seeded(seed);

        for _ in 0..16 {
            prop_assert_eq!(rng.next_float_in(min, max), min);
        }
    }
}

#[test]
fn test_seed_zero_first_uint_is_golden() {
    let mut rng = PcgRng::seeded(0);

    assert_eq!(rng.next_uint(), 3_894_649_422);
}

#[test]
fn test_hundred_thousand_ranged_draws_stay_contained() {
    let mut rng = PcgRng::seeded(0xC0FFEE);

    for _ in 0..100_000 {
        let value = rng.next_int_in(-1_000, 1_000);
        assert!((-1_000..1_000).contains(&value));
    }
    for _ in 0..100_000 {
        assert_eq!(rng.next_int_in(1_000, -1_000), 0);
    }
}

#[test]
fn test_ten_unique_from_five_candidates_is_an_error() {
    let mut rng = PcgRng::seeded(0);
    let candidates = ["a", "b", "c", "d", "e"];

    let result = rng.next_choices(&candidates, 10, Sampling::Unique);

    assert_eq!(
        result,
        Err(GeneratorError::InsufficientDistinctValues {
            requested: 10,
            available: 5,
        })
    );
}

#[test]
fn test_unique_floats_from_a_single_value_range_is_an_error() {
    let mut rng = PcgRng::seeded(0);

    let result = rng.next_floats_in(2, 0.0, f32::from_bits(1), Sampling::Unique);

    assert_eq!(
        result,
        Err(GeneratorError::InsufficientDistinctValues {
            requested: 2,
            available: 1,
        })
    );
}

#[test]
fn test_large_magnitude_float_ranges_stay_contained() {
    let mut rng = PcgRng::seeded(1);

    for _ in 0..10_000 {
        let value = rng.next_float_in(16_777_216.0, 16_777_218.0);
        assert!(value < 16_777_218.0, "{value} reached max");

        let value = rng.next_double_in(1.0e15, 1.0e15 + 0.25);
        assert!((1.0e15..1.0e15 + 0.25).contains(&value), "{value} outside range");
    }
}

#[test]
fn test_checkpoint_round_trip_resumes_stream() {
    let mut rng = PcgRng::seeded(2026);
    rng.skip_by(10_000);

    let json = serde_json::to_string(&rng).unwrap();
    let mut restored: PcgRng = serde_json::from_str(&json).unwrap();

    assert_eq!(json, format!("{{\"state\":{}}}", rng.state()));
    assert_eq!(restored.next_uints(16), rng.next_uints(16));
}

#[test]
fn test_preview_then_commit_pattern() {
    let mut rng = PcgRng::seeded(314);

    // Look three draws ahead, then decide to consume them.
    let preview: Vec<u32> = (1..=3).map(|steps| rng.peek_uint(steps)).collect();
    let committed = rng.next_uints(3);
    assert_eq!(preview, committed);

    // Undo the commit and replay.
    rng.back_by(3);
    assert_eq!(rng.next_uints(3), committed);
}
