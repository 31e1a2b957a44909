//! Blue noise: the distance between consecutive draws.

use lodestone_core::rng::DeterministicRng;
use lodestone_pcg::PcgRng;

use super::field::NoiseField;
use super::generator::NoiseGenerator;

/// High-frequency noise: `|draw - upcoming draw|`. Each value consumes one
/// draw and peeks the next.
#[derive(Debug, Clone)]
pub struct BlueNoise<R = PcgRng> {
    rng: R,
}

impl<R: DeterministicRng> BlueNoise<R> {
    /// Creates a generator over the given stream.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl BlueNoise {
    #[must_use]
    pub fn seeded(seed: i64) -> Self {
        Self::with_rng(PcgRng::seeded_signed(seed))
    }
}

impl<R: DeterministicRng> NoiseGenerator for BlueNoise<R> {
    fn next_value(&mut self) -> f32 {
        let current = self.rng.next_f32();
        (current - self.rng.peek_f32(1)).abs()
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
