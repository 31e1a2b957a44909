//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use lodestone_core::rng::DeterministicRng;

/// A no-op RNG whose every draw is `0`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn peek_u32(&self, _steps: u32) -> u32 {
        0
    }

    fn jump(&mut self, _steps: i64) {}
}

/// An RNG that replays a predetermined sequence of raw values. Jumps move a
/// cursor over the sequence, so peeks and rewinds behave like a real
/// generator. Panics if a draw lands outside the sequence.
///
/// Used in tests that need specific, repeatable raw outputs (e.g., exact
/// noise values).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    position: i64,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Create a `SequenceRng` whose draws map onto the given unit-interval
    /// values (each scaled by 2^32 and truncated).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_units(units: &[f64]) -> Self {
        Self::new(
            units
                .iter()
                .map(|unit| (unit * 4_294_967_296.0) as u32)
                .collect(),
        )
    }

    /// Index of the next value to be drawn.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    fn value_at(&self, position: i64) -> u32 {
        let index = usize::try_from(position).expect("SequenceRng rewound before its start");
        *self
            .values
            .get(index)
            .expect("SequenceRng sequence exhausted")
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.value_at(self.position);
        self.position += 1;
        value
    }

    fn peek_u32(&self, steps: u32) -> u32 {
        self.value_at(self.position + i64::from(steps) - 1)
    }

    fn jump(&mut self, steps: i64) {
        self.position += steps;
    }
}
