//! Lodestone Core — shared abstractions.
//!
//! This crate defines the traits and types that generators and their
//! consumers depend on. It contains no generator algorithms.

pub mod clock;
pub mod error;
pub mod rng;
