//! Declarative noise configuration.
//!
//! A [`NoiseConfig`] describes a generator tree in YAML or JSON and builds it
//! into a boxed [`NoiseGenerator`]. RNG-backed generators take an optional
//! seed; generators without one draw disjoint streams from a single
//! clock-seeded source, so two unseeded layers never share values.
//!
//! ```yaml
//! kind: compound
//! layers:
//!   - weight: 2.0
//!     generator: { kind: red, seed: 7 }
//!   - weight: 1.0
//!     generator: { kind: sine, frequency: 16, phase: 0 }
//! ```

use lodestone_core::clock::Clock;
use lodestone_core::error::GeneratorError;
use lodestone_pcg::PcgRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::blue::BlueNoise;
use crate::domain::compound::{NoiseLayer, WeightedCompound};
use crate::domain::generator::NoiseGenerator;
use crate::domain::red::RedNoise;
use crate::domain::sine::SineWave;
use crate::domain::white::WhiteNoise;

/// Draws reserved for each unseeded generator built from one config.
pub const UNSEEDED_STREAM_STRIDE: i64 = 1 << 40;

/// A noise generator description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseConfig {
    /// Uniform, uncorrelated noise.
    White {
        /// Stream seed; clock-derived when absent.
        #[serde(default)]
        seed: Option<i64>,
    },
    /// High-frequency noise.
    Blue {
        /// Stream seed; clock-derived when absent.
        #[serde(default)]
        seed: Option<i64>,
    },
    /// Low-frequency, smoothed noise.
    Red {
        /// Stream seed; clock-derived when absent.
        #[serde(default)]
        seed: Option<i64>,
    },
    /// A sine wave with a period of `frequency` steps.
    Sine {
        /// Period length in steps; must be positive.
        frequency: u32,
        /// Starting phase.
        #[serde(default)]
        phase: i64,
    },
    /// Weighted mean of nested generators.
    Compound {
        /// The layers to combine.
        layers: Vec<LayerConfig>,
    },
}

/// One weighted layer of a compound generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Relative contribution; must be finite and non-negative.
    pub weight: f32,
    /// The layer's generator.
    pub generator: NoiseConfig,
}

/// An explicitly seeded stream, or the next disjoint slice of `entropy`.
fn stream(seed: Option<i64>, entropy: &mut PcgRng) -> PcgRng {
    match seed {
        Some(seed) => PcgRng::seeded_signed(seed),
        None => entropy.split_off(UNSEEDED_STREAM_STRIDE),
    }
}

impl NoiseConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self, GeneratorError> {
        serde_yaml::from_str(source)
            .map_err(|e| GeneratorError::Configuration(format!("invalid noise YAML: {e}")))
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(source)
            .map_err(|e| GeneratorError::Configuration(format!("invalid noise JSON: {e}")))
    }

    /// Builds the described generator. Unseeded generators take disjoint
    /// streams split from a generator seeded by `clock`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Validation` if any parameter is invalid
    /// (zero sine frequency, bad layer weights, empty compound).
    pub fn build(&self, clock: &dyn Clock) -> Result<Box<dyn NoiseGenerator>, GeneratorError> {
        let mut entropy = PcgRng::from_clock(clock);
        self.build_with(&mut entropy)
    }

    fn build_with(
        &self,
        entropy: &mut PcgRng,
    ) -> Result<Box<dyn NoiseGenerator>, GeneratorError> {
        let generator: Box<dyn NoiseGenerator> = match self {
            Self::White { seed } => Box::new(WhiteNoise::with_rng(stream(*seed, entropy))),
            Self::Blue { seed } => Box::new(BlueNoise::with_rng(stream(*seed, entropy))),
            Self::Red { seed } => Box::new(RedNoise::with_rng(stream(*seed, entropy))),
            Self::Sine { frequency, phase } => Box::new(SineWave::new(*frequency, *phase)?),
            Self::Compound { layers } => {
                let layers = layers
                    .iter()
                    .map(|layer| {
                        layer
                            .generator
                            .build_with(entropy)
                            .map(|generator| NoiseLayer::boxed(generator, layer.weight))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(WeightedCompound::new(layers)?)
            }
        };

        debug!(kind = self.kind(), "built noise generator");
        Ok(generator)
    }

    /// The `kind` tag of this configuration.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::White { .. } => "white",
            Self::Blue { .. } => "blue",
            Self::Red { .. } => "red",
            Self::Sine { .. } => "sine",
            Self::Compound { .. } => "compound",
        }
    }
}
