//! Sine wave: a deterministic periodic signal with the noise capability.

use std::f64::consts::PI;

use lodestone_core::error::GeneratorError;

use super::field::NoiseField;
use super::generator::NoiseGenerator;

/// A sine wave remapped to `[0, 1]`, sampled at integer phases. One full
/// period spans `frequency` phases. The phase wraps at the ends of `i64`.
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    frequency: u32,
    phase: i64,
}

impl SineWave {
    /// Creates a wave starting at `phase`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Validation` if `frequency` is zero.
    pub fn new(frequency: u32, phase: i64) -> Result<Self, GeneratorError> {
        if frequency == 0 {
            return Err(GeneratorError::Validation(
                "sine wave frequency must be positive".to_owned(),
            ));
        }
        Ok(Self { frequency, phase })
    }

    #[must_use]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    #[must_use]
    pub fn phase(&self) -> i64 {
        self.phase
    }

    pub fn set_phase(&mut self, phase: i64) {
        self.phase = phase;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn sample(&self, phase: i64) -> f32 {
        let angular = 1.0 / (f64::from(self.frequency) / 2.0) * PI * phase as f64;
        (angular.sin() / 2.0 + 0.5) as f32
    }
}

impl NoiseGenerator for SineWave {
    fn next_value(&mut self) -> f32 {
        let value = self.sample(self.phase);
        self.phase = self.phase.wrapping_add(1);
        value
    }

    /// Every column restarts from the current phase, so the wave runs along
    /// `y`. Afterwards the phase has advanced by `height`.
    #[allow(clippy::cast_possible_wrap)]
    fn field(&mut self, width: usize, height: usize) -> NoiseField {
        let start = self.phase;
        let field =
            NoiseField::from_fn(width, height, |_, y| self.sample(start.wrapping_add(y as i64)));
        if width > 0 {
            self.phase = start.wrapping_add(height as i64);
        }
        field
    }

    fn skip_by(&mut self, steps: i64) {
        self.phase = self.phase.wrapping_add(steps);
    }

    fn back_by(&mut self, steps: i64) {
        self.phase = self.phase.wrapping_sub(steps);
    }
}
