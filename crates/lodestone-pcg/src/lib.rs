//! Lodestone PCG — deterministic, seekable random number generation.
//!
//! [`PcgRng`] is a PCG-XSH-RR generator (64-bit state, 32-bit output) that
//! can jump forward or backward any number of draws in O(log n) and preview
//! upcoming values without consuming them. All typed, ranged, and batch
//! draws are derived from a single advance-and-permute step.

mod batch;
mod draws;
mod generator;
mod interop;

pub use generator::{INCREMENT, MULTIPLIER, PcgRng};
pub use lodestone_core::error::GeneratorError;
pub use lodestone_core::rng::{DeterministicRng, Enumerable, INT_TO_UNIT_INTERVAL, Sampling};
