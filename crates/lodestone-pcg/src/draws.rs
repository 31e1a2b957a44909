//! Typed, bounded, and ranged draws, plus their non-consuming peeks.
//!
//! Every draw consumes exactly one raw value. Ranged draws answer a
//! degenerate range (`max <= min`) with zero rather than failing; callers
//! that need to distinguish it must check the bounds themselves.

use lodestone_core::rng::{Enumerable, unit_f32, unit_f64};

use crate::generator::PcgRng;

/// Index into a candidate set of `len` values, `len > 0`.
#[allow(clippy::cast_possible_truncation)]
fn candidate_index(raw: u32, len: usize) -> usize {
    (u64::from(raw) % len as u64) as usize
}

#[allow(clippy::cast_possible_truncation)]
const fn as_byte(raw: u32) -> u8 {
    (raw % 256) as u8
}

#[allow(clippy::cast_possible_wrap)]
const fn as_int(raw: u32) -> i32 {
    (raw >> 1) as i32
}

const fn as_bool(raw: u32) -> bool {
    raw % 2 == 1
}

/// Largest `f32` strictly below `x`.
fn f32_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        -f32::from_bits(1)
    }
}

/// Largest `f64` strictly below `x`.
fn f64_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

/// Maps a raw value onto `[min, max)`, or `0.0` when `max <= min`.
///
/// Scaling happens in double precision; a result that rounds up to `max`
/// is pulled back to the largest `f32` below it. Non-decreasing in `raw`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn float_in(raw: u32, min: f32, max: f32) -> f32 {
    if max > min {
        let (low, high) = (f64::from(min), f64::from(max));
        let scaled = (low + unit_f64(raw) * (high - low)) as f32;
        if scaled.is_nan() || scaled < min {
            min
        } else if scaled >= max {
            f32_below(max)
        } else {
            scaled
        }
    } else {
        0.0
    }
}

/// Maps a raw value onto `[min, max)`, or `0.0` when `max <= min`.
///
/// A width that overflows `f64` is scaled in halves. Non-decreasing in `raw`.
pub(crate) fn double_in(raw: u32, min: f64, max: f64) -> f64 {
    if max > min {
        let unit = unit_f64(raw);
        let width = max - min;
        let offset = if width.is_finite() {
            unit * width
        } else {
            unit * (max / 2.0 - min / 2.0) * 2.0
        };
        let scaled = min + offset;
        if scaled.is_nan() || scaled < min {
            min
        } else if scaled >= max {
            f64_below(max)
        } else {
            scaled
        }
    } else {
        0.0
    }
}

impl PcgRng {
    // --- unbounded ---

    /// Returns a value in `[0, 2^31)`. The low bit is dropped.
    pub fn next_int(&mut self) -> i32 {
        as_int(self.next_uint())
    }

    /// Returns a value in `[0.0, 1.0)`.
    pub fn next_float(&mut self) -> f32 {
        unit_f32(self.next_uint())
    }

    /// Returns a value in `[0.0, 1.0)`.
    pub fn next_double(&mut self) -> f64 {
        unit_f64(self.next_uint())
    }

    /// Returns a value in `[0, 256)`.
    pub fn next_byte(&mut self) -> u8 {
        as_byte(self.next_uint())
    }

    /// Returns `true` when the raw value is odd.
    pub fn next_bool(&mut self) -> bool {
        as_bool(self.next_uint())
    }

    /// Picks one element of `candidates`, or `None` when it is empty (no
    /// draw is consumed in that case).
    pub fn next_choice<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        if candidates.is_empty() {
            return None;
        }
        Some(&candidates[candidate_index(self.next_uint(), candidates.len())])
    }

    /// Picks one variant of `E`, or `None` when `E` has none.
    pub fn next_variant<E: Enumerable>(&mut self) -> Option<E> {
        self.next_choice(E::VARIANTS).copied()
    }

    // --- [0, max) ---

    /// Returns a value in `[0, max)`, or `0` when `max == 0`.
    pub fn next_uint_below(&mut self, max: u32) -> u32 {
        self.next_uint_in(0, max)
    }

    /// Returns a value in `[0, max)`, or `0` when `max <= 0`.
    pub fn next_int_below(&mut self, max: i32) -> i32 {
        self.next_int_in(0, max)
    }

    /// Returns a value in `[0.0, max)`, or `0.0` when `max <= 0.0`.
    pub fn next_float_below(&mut self, max: f32) -> f32 {
        self.next_float_in(0.0, max)
    }

    /// Returns a value in `[0.0, max)`, or `0.0` when `max <= 0.0`.
    pub fn next_double_below(&mut self, max: f64) -> f64 {
        self.next_double_in(0.0, max)
    }

    /// Returns a value in `[0, max)`, or `0` when `max == 0`.
    pub fn next_byte_below(&mut self, max: u8) -> u8 {
        self.next_byte_in(0, max)
    }

    // --- [min, max) ---

    /// Returns a value in `[min, max)`, or `0` when `max <= min`.
    ///
    /// A draw is consumed either way.
    pub fn next_uint_in(&mut self, min: u32, max: u32) -> u32 {
        let raw = self.next_uint();
        if max > min { raw % (max - min) + min } else { 0 }
    }

    /// Returns a value in `[min, max)`, or `0` when `max <= min`.
    ///
    /// The width is computed in 64 bits, so `i32::MIN..i32::MAX` is a valid
    /// range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_int_in(&mut self, min: i32, max: i32) -> i32 {
        let raw = self.next_uint();
        if max <= min {
            return 0;
        }
        let width = i64::from(max) - i64::from(min);
        (i64::from(as_int(raw)) % width + i64::from(min)) as i32
    }

    /// Returns a value in `[min, max)`, or `0.0` when `max <= min` (or either
    /// bound is NaN).
    pub fn next_float_in(&mut self, min: f32, max: f32) -> f32 {
        float_in(self.next_uint(), min, max)
    }

    /// Returns a value in `[min, max)`, or `0.0` when `max <= min` (or either
    /// bound is NaN).
    pub fn next_double_in(&mut self, min: f64, max: f64) -> f64 {
        double_in(self.next_uint(), min, max)
    }

    /// Returns a value in `[min, max)`, or `0` when `max <= min`.
    pub fn next_byte_in(&mut self, min: u8, max: u8) -> u8 {
        let raw = self.next_uint();
        if max > min { as_byte(raw) % (max - min) + min } else { 0 }
    }

    // --- peeks ---

    /// The raw value `steps` draws ahead; `steps == 0` is the value most
    /// recently consumed. The state is left untouched.
    #[must_use]
    pub fn peek_uint(&self, steps: u32) -> u32 {
        self.peek_raw(steps)
    }

    /// [`next_int`](Self::next_int) `steps` draws ahead.
    #[must_use]
    pub fn peek_int(&self, steps: u32) -> i32 {
        as_int(self.peek_raw(steps))
    }

    /// [`next_float`](Self::next_float) `steps` draws ahead.
    #[must_use]
    pub fn peek_float(&self, steps: u32) -> f32 {
        unit_f32(self.peek_raw(steps))
    }

    /// [`next_double`](Self::next_double) `steps` draws ahead.
    #[must_use]
    pub fn peek_double(&self, steps: u32) -> f64 {
        unit_f64(self.peek_raw(steps))
    }

    /// [`next_byte`](Self::next_byte) `steps` draws ahead.
    #[must_use]
    pub fn peek_byte(&self, steps: u32) -> u8 {
        as_byte(self.peek_raw(steps))
    }

    /// [`next_bool`](Self::next_bool) `steps` draws ahead.
    #[must_use]
    pub fn peek_bool(&self, steps: u32) -> bool {
        as_bool(self.peek_raw(steps))
    }

    /// The value the next [`next_uint`](Self::next_uint) will return.
    #[must_use]
    pub fn check_next_uint(&self) -> u32 {
        self.peek_uint(1)
    }

    /// The value the next [`next_int`](Self::next_int) will return.
    #[must_use]
    pub fn check_next_int(&self) -> i32 {
        self.peek_int(1)
    }

    /// The value the next [`next_float`](Self::next_float) will return.
    #[must_use]
    pub fn check_next_float(&self) -> f32 {
        self.peek_float(1)
    }

    /// The value the next [`next_double`](Self::next_double) will return.
    #[must_use]
    pub fn check_next_double(&self) -> f64 {
        self.peek_double(1)
    }

    /// The value the next [`next_byte`](Self::next_byte) will return.
    #[must_use]
    pub fn check_next_byte(&self) -> u8 {
        self.peek_byte(1)
    }

    /// The value the next [`next_bool`](Self::next_bool) will return.
    #[must_use]
    pub fn check_next_bool(&self) -> bool {
        self.peek_bool(1)
    }
}
