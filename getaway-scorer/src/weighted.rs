//! The weighted linear combination of proximity, rating and popularity.

use getaway_core::{Destination, DistanceTier, Scorer, SourceContext};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScoreWeights;

/// Upper bound of the review rating scale.
pub const MAX_RATING: f64 = 5.0;

/// The three signals of a destination, each nominally in `0.0..=1.0`.
///
/// Ratings above [`MAX_RATING`] are not clamped and push the rating signal
/// past one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalBreakdown {
    /// `1 - tier / 2000`.
    pub proximity: f64,
    /// `rating / 5`.
    pub rating: f64,
    /// `log_popularity / max_log_popularity`, or `0.0` when the maximum is
    /// zero.
    pub popularity: f64,
}

impl SignalBreakdown {
    /// Normalize the signals of `destination` for a query from `source`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "signals are ratios of the raw values"
    )]
    pub fn compute(
        destination: &Destination,
        source: &SourceContext,
        max_log_popularity: f64,
    ) -> Self {
        Self {
            proximity: DistanceTier::classify(destination, source).proximity(),
            rating: destination.rating / MAX_RATING,
            popularity: normalise_popularity(destination.log_popularity, max_log_popularity),
        }
    }

    /// Combine the signals with `weights`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a weighted sum of the signals"
    )]
    pub fn weighted_sum(&self, weights: ScoreWeights) -> f64 {
        weights.proximity * self.proximity
            + weights.rating * self.rating
            + weights.popularity * self.popularity
    }
}

/// Divide by the cached maximum, guarding the all-zero-reviews dataset.
#[expect(
    clippy::float_arithmetic,
    reason = "normalizing popularity divides by the maximum"
)]
pub(crate) fn normalise_popularity(log_popularity: f64, max_log_popularity: f64) -> f64 {
    if max_log_popularity > 0.0 && max_log_popularity.is_finite() {
        log_popularity / max_log_popularity
    } else {
        0.0
    }
}

/// Scores destinations with [`ScoreWeights`].
///
/// # Examples
/// ```
/// use getaway_core::{Destination, Scorer, SourceContext};
/// use getaway_scorer::WeightedScorer;
///
/// let source = SourceContext::new("Kolkata", "West Bengal", "Eastern");
/// let here = Destination::new("Park Street", "Kolkata", "West Bengal", "Eastern", 4.5, 0.0);
/// let score = WeightedScorer::default().score(&here, &source, 1.0);
/// assert!((score - (0.4 * 0.995 + 0.4 * 0.9)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Build a scorer from validated weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl Scorer for WeightedScorer {
    fn score(
        &self,
        destination: &Destination,
        source: &SourceContext,
        max_log_popularity: f64,
    ) -> f64 {
        SignalBreakdown::compute(destination, source, max_log_popularity).weighted_sum(self.weights)
    }
}
