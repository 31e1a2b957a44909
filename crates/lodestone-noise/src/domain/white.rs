//! White noise: independent uniform values.

use lodestone_core::rng::DeterministicRng;
use lodestone_pcg::PcgRng;

use super::field::NoiseField;
use super::generator::NoiseGenerator;

/// Uncorrelated uniform noise; one draw per value.
#[derive(Debug, Clone)]
pub struct WhiteNoise<R = PcgRng> {
    rng: R,
}

impl<R: DeterministicRng> WhiteNoise<R> {
    /// Creates a generator over the given stream.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl WhiteNoise {
    #[must_use]
    pub fn seeded(seed: i64) -> Self {
        Self::with_rng(PcgRng::seeded_signed(seed))
    }
}

impl<R: DeterministicRng> NoiseGenerator for WhiteNoise<R> {
    fn next_value(&mut self) -> f32 {
        self.rng.next_f32()
    }

    fn field(&mut self, width: usize, height: usize) -> NoiseField {
        NoiseField::from_fn(width, height, |_, _| self.next_value())
    }

    fn skip_by(&mut self, steps: i64) {
        self.rng.skip_by(steps);
    }

    fn back_by(&mut self, steps: i64) {
        self.rng.back_by(steps);
    }
}
