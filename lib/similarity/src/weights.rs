//! Similarity weight configuration
//!
//! Defines how much each dimension (category, allergens, safety status,
//! name tokens) contributes to the overall similarity score. Weights are
//! validated and normalized to sum to 1.0 so the total score stays in
//! [0, 1].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-dimension weights for the similarity metric.
///
/// The defaults are the product policy: category 0.4, allergens 0.2,
/// safety 0.2, name 0.2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimilarityWeights {
    #[serde(default = "default_category_weight")]
    pub category: f64,

    #[serde(default = "default_allergen_weight")]
    pub allergens: f64,

    #[serde(default = "default_safety_weight")]
    pub safety: f64,

    #[serde(default = "default_name_weight")]
    pub name: f64,
}

fn default_category_weight() -> f64 {
    0.4
}

fn default_allergen_weight() -> f64 {
    0.2
}

fn default_safety_weight() -> f64 {
    0.2
}

fn default_name_weight() -> f64 {
    0.2
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category: default_category_weight(),
            allergens: default_allergen_weight(),
            safety: default_safety_weight(),
            name: default_name_weight(),
        }
    }
}

impl SimilarityWeights {
    /// Validate the weights
    /// - Checks that weights are non-negative
    /// - Normalizes weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), WeightsError> {
        for (dimension, weight) in [
            ("category", self.category),
            ("allergens", self.allergens),
            ("safety", self.safety),
            ("name", self.name),
        ] {
            if weight < 0.0 {
                return Err(WeightsError::NegativeWeight(dimension));
            }
        }

        let sum = self.sum();
        if sum <= 0.0 {
            return Err(WeightsError::ZeroTotalWeight);
        }

        if (sum - 1.0).abs() > 0.001 {
            self.category /= sum;
            self.allergens /= sum;
            self.safety /= sum;
            self.name /= sum;
        }

        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.category + self.allergens + self.safety + self.name
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, Error)]
pub enum WeightsError {
    #[error("Dimension '{0}' has negative weight")]
    NegativeWeight(&'static str),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,
}
