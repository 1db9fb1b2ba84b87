//! Behavioural coverage for ranking queries.

use std::cell::RefCell;

use getaway_core::Dataset;
use getaway_core::test_support::{sample_dataset, zero_popularity_dataset};
use getaway_scorer::{RankError, Ranker, Recommendation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type Outcome = Result<Vec<Recommendation>, RankError>;

/// Scenario state for ranking queries.
#[derive(Debug, Default)]
struct RankingWorld {
    dataset: RefCell<Option<Dataset>>,
    outcome: RefCell<Option<Outcome>>,
    second_outcome: RefCell<Option<Outcome>>,
}

impl RankingWorld {
    fn ranker(&self) -> Ranker {
        let dataset = self
            .dataset
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("dataset must be loaded"));
        Ranker::new(dataset)
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        match self.outcome.borrow().as_ref() {
            Some(Ok(recommendations)) => recommendations.clone(),
            Some(Err(err)) => panic!("ranking should succeed, got {err}"),
            None => panic!("a ranking must be requested first"),
        }
    }
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld::default()
}

#[given("the sample destination dataset")]
fn sample(world: &RankingWorld) {
    world.dataset.replace(Some(sample_dataset()));
}

#[given("a dataset in which no destination has reviews")]
fn without_reviews(world: &RankingWorld) {
    world.dataset.replace(Some(zero_popularity_dataset()));
}

#[when("I request {limit} recommendations from {city}")]
fn request(world: &RankingWorld, limit: usize, city: String) {
    let outcome = world.ranker().rank(&city, limit);
    world.outcome.replace(Some(outcome));
}

#[when("I also request {limit} recommendations from {city}")]
fn request_again(world: &RankingWorld, limit: usize, city: String) {
    let outcome = world.ranker().rank(&city, limit);
    world.second_outcome.replace(Some(outcome));
}

#[then("the recommendations are Victoria Memorial, Howrah Bridge and Jagannath Temple")]
fn kolkata_top_three(world: &RankingWorld) {
    let names: Vec<String> = world
        .recommendations()
        .into_iter()
        .map(|recommendation| recommendation.name)
        .collect();
    assert_eq!(
        names,
        ["Victoria Memorial", "Howrah Bridge", "Jagannath Temple"]
    );
}

#[then("every recommendation from the source city has tier 10")]
fn source_city_tier(world: &RankingWorld) {
    for recommendation in world.recommendations() {
        if recommendation.city == "Kolkata" {
            assert_eq!(recommendation.distance_tier.value(), 10);
        }
    }
}

#[then("both rankings are identical")]
fn identical_rankings(world: &RankingWorld) {
    let first = world.outcome.borrow().clone();
    let second = world.second_outcome.borrow().clone();
    assert!(matches!(first, Some(Ok(_))), "first ranking should succeed");
    assert_eq!(first, second);
}

#[then("the error message names {city}")]
fn error_names_city(world: &RankingWorld, city: String) {
    match world.outcome.borrow().as_ref() {
        Some(Err(err)) => {
            assert_eq!(
                err.to_string(),
                format!("Source City '{city}' not found in the dataset.")
            );
        }
        Some(Ok(_)) => panic!("expected {city} to be unknown"),
        None => panic!("a ranking must be requested first"),
    }
}

#[then("every score is finite")]
fn scores_are_finite(world: &RankingWorld) {
    assert!(
        world
            .recommendations()
            .iter()
            .all(|recommendation| recommendation.score.is_finite())
    );
}

#[then("{count} recommendations are returned")]
fn count_returned(world: &RankingWorld, count: usize) {
    assert_eq!(world.recommendations().len(), count);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn same_city_leads(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn aliases_resolve_identically(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn unknown_city_is_reported(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 3)]
fn zero_review_dataset_ranks(world: RankingWorld) {
    let _ = world;
}
