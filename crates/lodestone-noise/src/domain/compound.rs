//! Weighted combination of several noise generators.

use std::fmt;

use lodestone_core::error::GeneratorError;

use super::field::NoiseField;
use super::generator::NoiseGenerator;

/// One generator and its contribution to a [`WeightedCompound`].
pub struct NoiseLayer {
    generator: Box<dyn NoiseGenerator>,
    weight: f32,
}

impl NoiseLayer {
    pub fn new(generator: impl NoiseGenerator + 'static, weight: f32) -> Self {
        Self::boxed(Box::new(generator), weight)
    }

    #[must_use]
    pub fn boxed(generator: Box<dyn NoiseGenerator>, weight: f32) -> Self {
        Self { generator, weight }
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl fmt::Debug for NoiseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseLayer")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// The weighted mean of its layers. Seeking moves every layer.
#[derive(Debug)]
pub struct WeightedCompound {
    layers: Vec<NoiseLayer>,
    total_weight: f32,
}

impl WeightedCompound {
    /// Combines `layers`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Validation` if there are no layers, a weight
    /// is negative or not finite, or the weights sum to zero.
    pub fn new(layers: Vec<NoiseLayer>) -> Result<Self, GeneratorError> {
        if layers.is_empty() {
            return Err(GeneratorError::Validation(
                "compound noise needs at least one layer".to_owned(),
            ));
        }
        if let Some(layer) = layers
            .iter()
            .find(|layer| !layer.weight.is_finite() || layer.weight < 0.0)
        {
            return Err(GeneratorError::Validation(format!(
                "layer weight must be finite and non-negative, got {}",
                layer.weight
            )));
        }
        let total_weight: f32 = layers.iter().map(|layer| layer.weight).sum();
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return Err(GeneratorError::Validation(format!(
                "layer weights must sum to a positive finite value, got {total_weight}"
            )));
        }
        Ok(Self {
            layers,
            total_weight,
        })
    }

    #[must_use]
    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }
}

impl NoiseGenerator for WeightedCompound {
    fn next_value(&mut self) -> f32 {
        let weighted: f32 = self
            .layers
            .iter_mut()
            .map(|layer| layer.generator.next_value() * layer.weight)
            .sum();
        weighted / self.total_weight
    }

    /// Each layer fills its own field in turn; cells are then combined.
    fn field(&mut self, width: usize, height: usize) -> NoiseField {
        let fields: Vec<(NoiseField, f32)> = self
            .layers
            .iter_mut()
            .map(|layer| (layer.generator.field(width, height), layer.weight))
            .collect();

        let total_weight = self.total_weight;
        NoiseField::from_fn(width, height, |x, y| {
            let weighted: f32 = fields
                .iter()
                .filter_map(|(field, weight)| field.get(x, y).map(|value| value * weight))
                .sum();
            weighted / total_weight
        })
    }

    fn skip_by(&mut self, steps: i64) {
        for layer in &mut self.layers {
            layer.generator.skip_by(steps);
        }
    }

    fn back_by(&mut self, steps: i64) {
        for layer in &mut self.layers {
            layer.generator.back_by(steps);
        }
    }
}
