//! Public configuration and output types for ranking.
#![forbid(unsafe_code)]

use getaway_core::{Destination, DistanceTier};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScoreWeightsError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to the three normalized signals.
///
/// Proximity and rating carry equal weight; popularity breaks near-ties.
///
/// # Examples
/// ```
/// use getaway_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.proximity, 0.4);
/// assert!(ScoreWeights::new(0.5, 0.5, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Multiplier applied to the proximity signal.
    pub proximity: f64,
    /// Multiplier applied to the rating signal.
    pub rating: f64,
    /// Multiplier applied to the popularity signal.
    pub popularity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            proximity: 0.4,
            rating: 0.4,
            popularity: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Validate and construct a set of weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is not finite, is
    /// negative, or when the weights do not sum to `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights and measures the deviation from one"
    )]
    pub fn new(proximity: f64, rating: f64, popularity: f64) -> Result<Self, ScoreWeightsError> {
        for (signal, value) in [
            ("proximity", proximity),
            ("rating", rating),
            ("popularity", popularity),
        ] {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { signal });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { signal, value });
            }
        }
        let sum = proximity + rating + popularity;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreWeightsError::SumNotOne { sum });
        }
        Ok(Self {
            proximity,
            rating,
            popularity,
        })
    }
}

/// One ranked destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Display name of the destination.
    pub name: String,
    /// Canonical city.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Proximity tier relative to the query's source city.
    pub distance_tier: DistanceTier,
    /// Review rating after coercion.
    pub rating: f64,
    /// Weighted ranking score.
    pub score: f64,
}

impl Recommendation {
    /// Capture the output fields of `destination` alongside its tier and
    /// score.
    #[must_use]
    pub fn new(destination: &Destination, distance_tier: DistanceTier, score: f64) -> Self {
        Self {
            name: destination.name.clone(),
            city: destination.city.clone(),
            state: destination.state.clone(),
            distance_tier,
            rating: destination.rating,
            score,
        }
    }
}
