//! Lodestone Noise — procedural noise over a deterministic RNG.
//!
//! Each generator owns its own random stream and exposes the same
//! capability: draw the next scalar, fill a 2D field, and seek forward or
//! backward. Generators are selected and combined by composition, either in
//! code or from a declarative [`application::config::NoiseConfig`].

pub mod application;
pub mod domain;
