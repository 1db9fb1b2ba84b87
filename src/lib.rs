//! Facade crate for the weekend getaway ranker.
//!
//! This crate re-exports the destination model, the ranking engine and,
//! behind the `data` feature, the CSV dataset loader.

#![forbid(unsafe_code)]

pub use getaway_core::{
    AliasTable, Dataset, Destination, DistanceTier, Normalizer, RawDestination, Scorer,
    SourceContext,
};
pub use getaway_scorer::{
    DEFAULT_LIMIT, RankError, Ranker, Recommendation, ScoreWeights, ScoreWeightsError,
    WeightedScorer,
};

#[cfg(feature = "data")]
pub use getaway_data::{LoadError, load_dataset};
