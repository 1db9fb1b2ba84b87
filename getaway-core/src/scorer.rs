//! Score destinations relative to a resolved source city.
//!
//! The `Scorer` trait assigns a score to a
//! [`Destination`](crate::Destination) given the [`SourceContext`] of a
//! query and the dataset-wide popularity denominator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Destination;

/// The resolved source city of a ranking query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceContext {
    /// Canonical source city.
    pub city: String,
    /// State of the first dataset row in the source city.
    pub state: String,
    /// Zone of the first dataset row in the source city.
    pub zone: String,
}

impl SourceContext {
    /// Build a context from its parts.
    #[must_use]
    pub fn new(city: impl Into<String>, state: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zone: zone.into(),
        }
    }
}

/// Calculate a ranking score for a destination.
///
/// Higher scores rank earlier. Implementations must be thread-safe
/// (`Send` + `Sync`) so a shared ranker can serve concurrent queries, and
/// must return a finite value for every input so that ordering is total.
///
/// # Examples
///
/// ```rust
/// use getaway_core::{Destination, DistanceTier, Scorer, SourceContext};
///
/// struct ProximityOnly;
///
/// impl Scorer for ProximityOnly {
///     fn score(&self, destination: &Destination, source: &SourceContext, _max: f64) -> f64 {
///         DistanceTier::classify(destination, source).proximity()
///     }
/// }
///
/// let source = SourceContext::new("Kolkata", "West Bengal", "Eastern");
/// let here = Destination::new("Park Street", "Kolkata", "West Bengal", "Eastern", 4.0, 0.5);
/// let score = ProximityOnly.score(&here, &source, 1.0);
/// assert!((score - 0.995).abs() < 1e-12);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `destination` relative to `source`.
    ///
    /// `max_log_popularity` is the dataset-wide maximum captured at load
    /// time and may be `0.0`.
    fn score(
        &self,
        destination: &Destination,
        source: &SourceContext,
        max_log_popularity: f64,
    ) -> f64;
}
