//! Destination records before and after normalization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A destination row exactly as it was ingested.
///
/// Numeric columns stay textual; turning them into numbers is the
/// [`Normalizer`](crate::Normalizer)'s job so that bad values degrade to
/// "no signal" instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawDestination {
    /// Display name of the destination. Not unique.
    pub name: String,
    /// City as written in the source data.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Multi-state zone such as `"East"` or `"Northern"`.
    pub zone: String,
    /// Review rating text, expected to hold a number in `0..=5`.
    pub rating: String,
    /// Review count text, in lakhs.
    pub review_count: String,
}

/// A normalized destination held by a [`Dataset`](crate::Dataset).
///
/// # Examples
/// ```
/// use getaway_core::Destination;
///
/// let fort = Destination::new("Fort", "Jaipur", "Rajasthan", "Northern", 4.5, 0.0);
/// assert_eq!(fort.log_popularity, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Destination {
    /// Display name of the destination. Not unique.
    pub name: String,
    /// Canonical city name.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Multi-state zone.
    pub zone: String,
    /// Review rating, nominally `0.0..=5.0`. Missing values are `0.0`.
    pub rating: f64,
    /// Review count in lakhs. Missing values are `0.0`.
    pub review_count: f64,
    /// `ln(1 + review_count)`.
    pub log_popularity: f64,
}

impl Destination {
    /// Build a destination from already-coerced values, deriving
    /// [`Destination::log_popularity`].
    ///
    /// A review count that is negative or not finite is stored as `0.0`, so
    /// `log_popularity` is always finite and non-negative.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zone: impl Into<String>,
        rating: f64,
        review_count: f64,
    ) -> Self {
        let reviews = if review_count.is_finite() && review_count > 0.0 {
            review_count
        } else {
            0.0
        };
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            zone: zone.into(),
            rating,
            review_count: reviews,
            log_popularity: reviews.ln_1p(),
        }
    }
}
