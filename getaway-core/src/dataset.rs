//! Immutable, load-once collection of normalized destinations.

use crate::{Destination, SourceContext};

/// Normalized destinations in their native load order.
///
/// The maximum `log_popularity` is captured once at construction and serves
/// as the popularity denominator for every later query. A dataset never
/// changes after it is built, so the cached value cannot go stale.
///
/// # Examples
/// ```
/// use getaway_core::{Dataset, Destination};
///
/// let dataset = Dataset::new(vec![
///     Destination::new("Victoria Memorial", "Kolkata", "West Bengal", "Eastern", 4.6, 1.2),
///     Destination::new("Howrah Bridge", "Kolkata", "West Bengal", "Eastern", 4.4, 0.4),
/// ]);
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.max_log_popularity(), 1.2_f64.ln_1p());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    destinations: Vec<Destination>,
    max_log_popularity: f64,
}

impl Dataset {
    /// Wrap `destinations` and cache their maximum `log_popularity`.
    ///
    /// Non-finite popularity values are ignored when computing the maximum
    /// and an empty dataset caches `0.0`.
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        let max_log_popularity = destinations
            .iter()
            .map(|destination| destination.log_popularity)
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);
        Self {
            destinations,
            max_log_popularity,
        }
    }

    /// The popularity normalization denominator captured at load time.
    #[must_use]
    pub const fn max_log_popularity(&self) -> f64 {
        self.max_log_popularity
    }

    /// Number of destinations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the dataset holds no destinations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate over destinations in native order.
    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    /// Borrow the destinations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }

    /// Return the first destination, in native order, whose city equals
    /// `city` exactly.
    #[must_use]
    pub fn find_city(&self, city: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.city == city)
    }

    /// Build the query context for `city` from its first occurrence.
    #[must_use]
    pub fn source_context(&self, city: &str) -> Option<SourceContext> {
        self.find_city(city)
            .map(|destination| SourceContext::new(city, &destination.state, &destination.zone))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Destination> for Dataset {
    fn from_iter<I: IntoIterator<Item = Destination>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
