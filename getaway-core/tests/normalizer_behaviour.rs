//! Behavioural coverage for load-time normalization.

use std::cell::RefCell;

use getaway_core::{Dataset, Normalizer, RawDestination};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared by the normalization steps.
#[derive(Debug, Default)]
struct NormalizerWorld {
    rows: RefCell<Vec<RawDestination>>,
    dataset: RefCell<Option<Dataset>>,
}

impl NormalizerWorld {
    fn push(&self, city: &str, rating: &str, reviews: &str) {
        self.rows.borrow_mut().push(RawDestination {
            name: format!("{city} sight"),
            city: city.to_owned(),
            state: "State".to_owned(),
            zone: "Zone".to_owned(),
            rating: rating.to_owned(),
            review_count: reviews.to_owned(),
        });
    }

    fn dataset(&self) -> Dataset {
        self.dataset
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("rows must be normalized first"))
    }
}

#[fixture]
fn world() -> NormalizerWorld {
    NormalizerWorld::default()
}

#[given("raw rows for Calcutta, Bangalore and Delhi")]
fn legacy_rows(world: &NormalizerWorld) {
    world.push("Calcutta", "4.5", "1");
    world.push("Bangalore", "4.2", "1");
    world.push("Delhi", "4.4", "1");
}

#[given("a raw row with rating \"excellent\" and an empty review count")]
fn unparsable_row(world: &NormalizerWorld) {
    world.push("Puri", "excellent", "");
}

#[given("raw rows with review counts 0.5, 3 and 1")]
fn rows_with_reviews(world: &NormalizerWorld) {
    world.push("Puri", "4", "0.5");
    world.push("Agra", "4", "3");
    world.push("Goa", "4", "1");
}

#[when("I normalize the rows")]
fn normalize_rows(world: &NormalizerWorld) {
    let rows = world.rows.borrow().clone();
    let dataset = Normalizer::default().normalize(rows);
    world.dataset.replace(Some(dataset));
}

#[then("the cities are Kolkata, Bengaluru and New Delhi")]
fn canonical_cities(world: &NormalizerWorld) {
    let dataset = world.dataset();
    let cities: Vec<&str> = dataset.iter().map(|d| d.city.as_str()).collect();
    assert_eq!(cities, ["Kolkata", "Bengaluru", "New Delhi"]);
}

#[then("the normalized rating is 0")]
#[expect(clippy::float_cmp, reason = "coerced values are exact zeros")]
fn zero_rating(world: &NormalizerWorld) {
    let dataset = world.dataset();
    assert!(dataset.iter().all(|d| d.rating == 0.0));
}

#[then("the normalized popularity is 0")]
#[expect(clippy::float_cmp, reason = "coerced values are exact zeros")]
fn zero_popularity(world: &NormalizerWorld) {
    let dataset = world.dataset();
    assert!(dataset.iter().all(|d| d.log_popularity == 0.0));
    assert_eq!(dataset.max_log_popularity(), 0.0);
}

#[then("the cached maximum popularity is the natural log of 4")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point values"
)]
fn cached_maximum(world: &NormalizerWorld) {
    let dataset = world.dataset();
    assert!((dataset.max_log_popularity() - 4.0_f64.ln()).abs() < 1e-12);
}

#[scenario(path = "tests/features/normalizer.feature", index = 0)]
fn legacy_spellings(world: NormalizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/normalizer.feature", index = 1)]
fn unparsable_numbers(world: NormalizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/normalizer.feature", index = 2)]
fn cached_popularity_maximum(world: NormalizerWorld) {
    let _ = world;
}
