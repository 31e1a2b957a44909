//! PCG-XSH-RR generator: state, seeding, and the two primitives every
//! other draw is built from (advance-and-permute, and jump).
//!
//! # Determinism
//!
//! Same seed → same sequence. All arithmetic is modulo 2^64, so the stream
//! is bit-identical on every platform.

use lodestone_core::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// LCG multiplier.
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment. Odd by construction, which gives the recurrence its full
/// 2^64 period.
pub const INCREMENT: u64 = (721_347_520_444_481_703 << 1) | 1;

/// Advances a state by one LCG step.
const fn step(state: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}

/// XSH-RR output permutation of a pre-advance state.
#[allow(clippy::cast_possible_truncation)]
const fn permute(state: u64) -> u32 {
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rotation = (state >> 59) as u32;
    xorshifted.rotate_right(rotation)
}

/// An affine map `state -> mult * state + incr` over 2^64 residues.
///
/// Composing `n` copies of the LCG step yields another affine map, which is
/// what makes O(log n) jumps possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AffineStep {
    mult: u64,
    incr: u64,
}

impl AffineStep {
    /// The map equivalent to applying the LCG step `steps` times.
    ///
    /// Negative counts are taken as their two's-complement residue: since the
    /// recurrence has period 2^64, stepping `2^64 - k` times is exactly
    /// stepping back `k` times. At most 64 rounds run.
    #[allow(clippy::cast_sign_loss)]
    pub(crate) const fn for_steps(steps: i64) -> Self {
        let mut remaining = steps as u64;
        let mut cur_mult = MULTIPLIER;
        let mut cur_incr = INCREMENT;
        let mut acc_mult = 1_u64;
        let mut acc_incr = 0_u64;

        while remaining > 0 {
            if remaining & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_incr = acc_incr.wrapping_mul(cur_mult).wrapping_add(cur_incr);
            }
            cur_incr = cur_mult.wrapping_add(1).wrapping_mul(cur_incr);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            remaining >>= 1;
        }

        Self {
            mult: acc_mult,
            incr: acc_incr,
        }
    }

    pub(crate) const fn apply(self, state: u64) -> u64 {
        self.mult.wrapping_mul(state).wrapping_add(self.incr)
    }
}

/// Deterministic permuted congruential generator with O(log n) seeking.
///
/// # Example
/// ```
/// use lodestone_pcg::PcgRng;
///
/// let mut rng = PcgRng::seeded(12345);
/// let preview = rng.check_next_uint();
/// assert_eq!(rng.next_uint(), preview);
///
/// rng.back();
/// assert_eq!(rng.next_uint(), preview);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcgRng {
    /// Internal 64-bit LCG state.
    state: u64,
}

impl PcgRng {
    /// Create a generator seeded from the system clock.
    ///
    /// Two generators created within the same millisecond share a stream;
    /// use [`seeded`](Self::seeded) when reproducibility matters.
    #[must_use]
    pub fn new() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Create a generator seeded from the tick count of `clock`.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::seeded_signed(clock.ticks())
    }

    /// Create a generator from an explicit seed. Every seed is valid,
    /// including zero.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        // Mix twice around the seed so that small seeds do not produce
        // correlated early outputs.
        let mut rng = Self { state: 0 };
        rng.next_uint();
        rng.state = rng.state.wrapping_add(seed);
        rng.next_uint();

        debug!(seed, state = rng.state, "seeded pcg generator");
        rng
    }

    /// Create a generator from a signed seed, sign-extended to 64 bits.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn seeded_signed(seed: i64) -> Self {
        Self::seeded(seed as u64)
    }

    /// Resume a generator from a state previously returned by
    /// [`state`](Self::state). No seeding is applied.
    #[must_use]
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Current internal state (for checkpointing/replay).
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw 32-bit value, in `[0, 2^32)`.
    ///
    /// This is the only operation that both advances the state and produces
    /// output; every typed draw derives from it.
    pub fn next_uint(&mut self) -> u32 {
        let old = self.state;
        self.state = step(old);
        permute(old)
    }

    /// Raw value `steps` draws ahead, without touching the state.
    pub(crate) fn peek_raw(&self, steps: u32) -> u32 {
        let ahead = AffineStep::for_steps(i64::from(steps) - 1).apply(self.state);
        permute(ahead)
    }

    /// Move the stream `steps` draws forward, or backward when negative, in
    /// O(log |steps|) time.
    pub fn jump(&mut self, steps: i64) {
        trace!(steps, "jumping pcg generator");
        self.state = AffineStep::for_steps(steps).apply(self.state);
    }

    /// Skip a single draw.
    pub fn skip(&mut self) {
        self.jump(1);
    }

    /// Skip `steps` draws.
    pub fn skip_by(&mut self, steps: i64) {
        self.jump(steps);
    }

    /// Rewind a single draw.
    pub fn back(&mut self) {
        self.jump(-1);
    }

    /// Rewind `steps` draws.
    pub fn back_by(&mut self, steps: i64) {
        self.jump(steps.wrapping_neg());
    }

    /// Split off an independent stream.
    ///
    /// The returned generator starts at the current position; `self` jumps
    /// `stride` draws ahead. As long as the returned generator consumes fewer
    /// than `stride` draws, the two streams never overlap.
    #[must_use]
    pub fn split_off(&mut self, stride: i64) -> Self {
        let child = self.clone();
        self.jump(stride);
        child
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new()
    }
}
