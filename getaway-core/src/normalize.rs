//! Load-time normalization of raw destination rows.
//!
//! Normalization canonicalizes city spellings, coerces the numeric columns
//! and derives `log_popularity`. Bad numeric input never aborts a load: a
//! value that cannot be read as a number is treated as "no signal" (`0.0`).

use log::debug;

use crate::{AliasTable, CANONICAL_DELHI, Dataset, Destination, LEGACY_DELHI, RawDestination};

/// Turns [`RawDestination`] rows into an immutable [`Dataset`].
///
/// # Examples
/// ```
/// use getaway_core::{Normalizer, RawDestination};
///
/// let raw = RawDestination {
///     name: "Marine Drive".into(),
///     city: "Bombay".into(),
///     state: "Maharashtra".into(),
///     zone: "Western".into(),
///     rating: "4.6".into(),
///     review_count: "n/a".into(),
/// };
/// let dataset = Normalizer::default().normalize([raw]);
/// let first = &dataset.as_slice()[0];
/// assert_eq!(first.city, "Mumbai");
/// assert_eq!(first.review_count, 0.0);
/// assert_eq!(dataset.max_log_popularity(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    aliases: AliasTable,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(AliasTable::dataset())
    }
}

impl Normalizer {
    /// Build a normalizer that canonicalizes cities with `aliases`.
    #[must_use]
    pub const fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// The alias table applied to dataset cities.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize every row and capture the popularity maximum.
    pub fn normalize<I>(&self, rows: I) -> Dataset
    where
        I: IntoIterator<Item = RawDestination>,
    {
        rows.into_iter()
            .map(|row| self.normalize_row(row))
            .collect()
    }

    /// Normalize a single row.
    #[must_use]
    pub fn normalize_row(&self, row: RawDestination) -> Destination {
        let RawDestination {
            name,
            city,
            state,
            zone,
            rating,
            review_count,
        } = row;
        let canonical = self.canonical_city(&city);
        let rating_value = coerce_field(&name, "rating", &rating);
        let reviews = non_negative_reviews(&name, coerce_field(&name, "review count", &review_count));
        Destination::new(name, canonical, state, zone, rating_value, reviews)
    }

    /// Canonicalize a city spelling.
    ///
    /// The alias table is applied first; the legacy `"Delhi"` spelling is
    /// then forced to `"New Delhi"` in a separate pass, so the result is
    /// canonical even when a custom table omits that entry. Applying the
    /// function to its own output returns the same value.
    #[must_use]
    pub fn canonical_city(&self, city: &str) -> String {
        let aliased = self.aliases.resolve(city);
        if aliased == LEGACY_DELHI {
            CANONICAL_DELHI.to_owned()
        } else {
            aliased.to_owned()
        }
    }
}

/// Read `text` as a number, treating anything unusable as `0.0`.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// inputs (`"NaN"`, `"inf"`) all coerce to `0.0`.
///
/// # Examples
/// ```
/// use getaway_core::coerce_number;
///
/// assert_eq!(coerce_number(" 4.5 "), 4.5);
/// assert_eq!(coerce_number("four"), 0.0);
/// assert_eq!(coerce_number(""), 0.0);
/// ```
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn coerce_field(name: &str, field: &str, text: &str) -> f64 {
    parse_number(text).unwrap_or_else(|| {
        debug!("{name}: {field} {text:?} is not a number; using 0");
        0.0
    })
}

fn non_negative_reviews(name: &str, reviews: f64) -> f64 {
    if reviews < 0.0 {
        debug!("{name}: negative review count {reviews}; using 0");
        0.0
    } else {
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn raw(city: &str, rating: &str, reviews: &str) -> RawDestination {
        RawDestination {
            name: format!("{city} sight"),
            city: city.to_owned(),
            state: "State".to_owned(),
            zone: "Zone".to_owned(),
            rating: rating.to_owned(),
            review_count: reviews.to_owned(),
        }
    }

    #[fixture]
    fn normalizer() -> Normalizer {
        Normalizer::default()
    }

    #[rstest]
    #[case("Delhi", "New Delhi")]
    #[case("Bangalore", "Bengaluru")]
    #[case("Calcutta", "Kolkata")]
    #[case("New Delhi", "New Delhi")]
    #[case("Hampi", "Hampi")]
    #[case("delhi", "delhi")]
    fn canonicalizes_cities(normalizer: Normalizer, #[case] city: &str, #[case] expected: &str) {
        assert_eq!(normalizer.canonical_city(city), expected);
    }

    #[rstest]
    fn legacy_delhi_pass_runs_without_the_alias() {
        let normalizer = Normalizer::new(AliasTable::new().with_alias("Madras", "Chennai"));
        assert_eq!(normalizer.canonical_city("Delhi"), "New Delhi");
        assert_eq!(normalizer.canonical_city("Madras"), "Chennai");
    }

    #[rstest]
    fn legacy_delhi_pass_catches_aliases_that_produce_delhi() {
        let normalizer = Normalizer::new(AliasTable::new().with_alias("Dilli", "Delhi"));
        assert_eq!(normalizer.canonical_city("Dilli"), "New Delhi");
    }

    #[rstest]
    #[case("Delhi")]
    #[case("Bombay")]
    #[case("Puri")]
    fn canonicalization_is_idempotent(normalizer: Normalizer, #[case] city: &str) {
        let once = normalizer.canonical_city(city);
        assert_eq!(normalizer.canonical_city(&once), once);
    }

    #[rstest]
    #[case("4.5", 4.5)]
    #[case(" 3 ", 3.0)]
    #[case("", 0.0)]
    #[case("N/A", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    #[case("-1.5", -1.5)]
    #[case("1e-1", 0.1)]
    #[expect(clippy::float_cmp, reason = "coercion returns exact parsed values")]
    fn coerces_numbers(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(coerce_number(text), expected);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "coercion returns exact parsed values")]
    fn invalid_numbers_become_zero_signal(normalizer: Normalizer) {
        let destination = normalizer.normalize_row(raw("Puri", "excellent", ""));
        assert_eq!(destination.rating, 0.0);
        assert_eq!(destination.review_count, 0.0);
        assert_eq!(destination.log_popularity, 0.0);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "coercion returns exact parsed values")]
    fn negative_review_counts_become_zero(normalizer: Normalizer) {
        let destination = normalizer.normalize_row(raw("Puri", "4.0", "-3"));
        assert_eq!(destination.review_count, 0.0);
        assert!(destination.log_popularity.is_finite());
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "ratings pass through unchanged")]
    fn ratings_are_not_clamped(normalizer: Normalizer) {
        let destination = normalizer.normalize_row(raw("Puri", "7.5", "1"));
        assert_eq!(destination.rating, 7.5);
    }

    #[rstest]
    fn normalize_preserves_order_and_caches_maximum(normalizer: Normalizer) {
        let dataset = normalizer.normalize(vec![
            raw("Calcutta", "4.1", "0.5"),
            raw("Delhi", "4.3", "3.0"),
            raw("Madras", "oops", "1.0"),
        ]);
        let cities: Vec<&str> = dataset.iter().map(|d| d.city.as_str()).collect();
        assert_eq!(cities, ["Kolkata", "New Delhi", "Chennai"]);
        assert_eq!(dataset.max_log_popularity(), 3.0_f64.ln_1p());
    }

    #[rstest]
    fn all_zero_reviews_cache_a_zero_maximum(normalizer: Normalizer) {
        let dataset = normalizer.normalize(vec![raw("Goa", "4", "0"), raw("Ooty", "4", "x")]);
        assert_eq!(dataset.max_log_popularity(), 0.0);
    }
}
