//! Red noise: low-frequency, smoothed values.

use lodestone_core::rng::DeterministicRng;
use lodestone_pcg::PcgRng;

use super::field::NoiseField;
use super::generator::NoiseGenerator;

/// Low-frequency noise. Each value averages the current draw, the upcoming
/// draw, and the previous draw; fields average each cell with its four
/// neighbours.
#[derive(Debug, Clone)]
pub struct RedNoise<R = PcgRng> {
    rng: R,
    last: Option<f32>,
}

impl<R: DeterministicRng> RedNoise<R> {
    /// Creates a generator over the given stream.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, last: None }
    }
}

impl RedNoise {
    #[must_use]
    pub fn seeded(seed: i64) -> Self {
        Self::with_rng(PcgRng::seeded_signed(seed))
    }
}

impl<R: DeterministicRng> NoiseGenerator for RedNoise<R> {
    fn next_value(&mut self) -> f32 {
        let current = self.rng.next_f32();
        let sum = current + self.rng.peek_f32(1);
        let value = match self.last {
            None => sum / 2.0,
            Some(last) => (sum + last) / 3.0,
        };
        self.last = Some(current);
        value
    }

    /// Fills a field with raw draws, then replaces each cell with the mean of
    /// itself and its four (wrapping) neighbours, read from the raw grid.
    #[allow(clippy::cast_possible_wrap)]
    fn field(&mut self, width: usize, height: usize) -> NoiseField {
        let raw = NoiseField::from_fn(width, height, |_, _| self.rng.next_f32());
        NoiseField::from_fn(width, height, |x, y| {
            let (x, y) = (x as i64, y as i64);
            let sum = raw.sample_wrapped(x, y)
                + raw.sample_wrapped(x - 1, y)
                + raw.sample_wrapped(x + 1, y)
                + raw.sample_wrapped(x, y - 1)
                + raw.sample_wrapped(x, y + 1);
            sum / 5.0
        })
    }

    /// Seeks the stream. The remembered previous draw is kept as is.
    fn skip_by(&mut self, steps: i64) {
        self.rng.skip_by(steps);
    }

    fn back_by(&mut self, steps: i64) {
        self.rng.back_by(steps);
    }
}
