//! Random number generator abstraction for determinism.
//!
//! Generators implement [`DeterministicRng`]; consumers such as noise
//! generators depend only on this capability. In tests, a scripted
//! implementation is injected instead.

/// Scale factor mapping a 32-bit output onto the half-open unit interval.
pub const INT_TO_UNIT_INTERVAL: f64 = 1.0 / 4_294_967_296.0;

/// Largest `f32` strictly below `1.0`.
const F32_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Maps a raw 32-bit output onto `[0, 1)` in double precision.
#[must_use]
pub fn unit_f64(raw: u32) -> f64 {
    f64::from(raw) * INT_TO_UNIT_INTERVAL
}

/// Maps a raw 32-bit output onto `[0, 1)` in single precision.
///
/// The value is computed in double precision and narrowed; outputs close to
/// `2^32` would round up to `1.0`, so they are clamped below it.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn unit_f32(raw: u32) -> f32 {
    let narrowed = unit_f64(raw) as f32;
    if narrowed < 1.0 { narrowed } else { F32_BELOW_ONE }
}

/// Abstraction over a seekable, deterministic random number stream.
pub trait DeterministicRng: Send + Sync {
    /// Consume and return the next raw 32-bit output.
    fn next_u32(&mut self) -> u32;

    /// Return the raw output `steps` draws ahead without consuming it.
    ///
    /// `steps == 1` is the value the next [`next_u32`](Self::next_u32) call
    /// will return.
    fn peek_u32(&self, steps: u32) -> u32;

    /// Move the stream `steps` draws forward (or backward when negative).
    fn jump(&mut self, steps: i64);

    /// Generate a random `f32` in `[0.0, 1.0)`.
    fn next_f32(&mut self) -> f32 {
        unit_f32(self.next_u32())
    }

    /// Peek the unit-interval `f32` that `steps` draws ahead would produce.
    fn peek_f32(&self, steps: u32) -> f32 {
        unit_f32(self.peek_u32(steps))
    }

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u32())
    }

    /// Generate a random `u32` in the range `[min, max]` inclusive.
    ///
    /// Returns `min` when `max < min`.
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if max < min {
            return min;
        }
        let width = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % width) as u32
    }

    /// Advance the stream by `steps` draws.
    fn skip_by(&mut self, steps: i64) {
        self.jump(steps);
    }

    /// Rewind the stream by `steps` draws.
    fn back_by(&mut self, steps: i64) {
        self.jump(steps.wrapping_neg());
    }
}

/// A type with a fixed, ordered set of candidate values (typically a
/// fieldless enum) that generators can pick from.
pub trait Enumerable: Copy + PartialEq + 'static {
    /// All candidate values, in declaration order.
    const VARIANTS: &'static [Self];
}

/// Whether a batch draw may repeat values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Values may repeat within the batch.
    #[default]
    Repeat,
    /// Every value in the batch is distinct.
    Unique,
}
