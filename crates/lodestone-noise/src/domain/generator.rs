//! The capability every noise generator provides.

use super::field::NoiseField;

/// A seekable source of noise values in `[0, 1]`.
///
/// Implementations own their random stream; combining generators is done by
/// composition (see [`WeightedCompound`](super::compound::WeightedCompound)).
pub trait NoiseGenerator: Send {
    /// Produce the next scalar value.
    fn next_value(&mut self) -> f32;

    /// Produce a `width × height` field.
    fn field(&mut self, width: usize, height: usize) -> NoiseField;

    /// Move the underlying stream `steps` positions forward.
    fn skip_by(&mut self, steps: i64);

    /// Move the underlying stream `steps` positions backward.
    fn back_by(&mut self, steps: i64);

    fn skip(&mut self) {
        self.skip_by(1);
    }

    fn back(&mut self) {
        self.back_by(1);
    }
}
