//! Per-query ranking over an immutable dataset.
//!
//! A [`Ranker`] never mutates its [`Dataset`]. Every query classifies and
//! scores all destinations afresh and returns a new result vector, so one
//! ranker can be shared between threads without locking.

#![forbid(unsafe_code)]

use std::sync::Arc;

use getaway_core::{AliasTable, Dataset, DistanceTier, Scorer, SourceContext, title_case};
use log::{debug, info};

use crate::{RankError, Recommendation, WeightedScorer};

/// Number of recommendations returned by [`Ranker::get_recommendations`].
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks destinations for a source city.
///
/// # Examples
/// ```
/// use getaway_core::{Dataset, Destination, DistanceTier};
/// use getaway_scorer::Ranker;
///
/// let dataset = Dataset::new(vec![
///     Destination::new("Konark", "Puri", "Odisha", "Eastern", 4.0, 0.1),
///     Destination::new("Park Street", "Kolkata", "West Bengal", "Eastern", 4.2, 0.5),
/// ]);
/// let ranker = Ranker::new(dataset);
/// let top = ranker.rank("kolkata", 1)?;
/// assert_eq!(top[0].name, "Park Street");
/// assert_eq!(top[0].distance_tier, DistanceTier::SameCity);
/// # Ok::<(), getaway_scorer::RankError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = WeightedScorer> {
    dataset: Arc<Dataset>,
    aliases: AliasTable,
    scorer: S,
}

impl Ranker {
    /// Build a ranker with the query alias table and default weights.
    #[must_use]
    pub fn new(dataset: impl Into<Arc<Dataset>>) -> Self {
        Self {
            dataset: dataset.into(),
            aliases: AliasTable::query(),
            scorer: WeightedScorer::default(),
        }
    }
}

impl<S: Scorer> Ranker<S> {
    /// Replace the scorer.
    #[must_use]
    pub fn with_scorer<T: Scorer>(self, scorer: T) -> Ranker<T> {
        Ranker {
            dataset: self.dataset,
            aliases: self.aliases,
            scorer,
        }
    }

    /// Replace the alias table applied to source-city input.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// The dataset being ranked.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Resolve caller input to the source context of a query.
    ///
    /// The input is title-cased, passed through the query alias table and
    /// matched exactly against dataset cities. The first matching row, in
    /// dataset order, supplies the state and zone.
    ///
    /// # Errors
    /// Returns [`RankError::SourceCityNotFound`] carrying the original
    /// input when no row matches.
    pub fn resolve_source(&self, source_city: &str) -> Result<SourceContext, RankError> {
        let titled = title_case(source_city);
        let resolved = self.aliases.resolve(&titled);
        let Some(context) = self.dataset.source_context(resolved) else {
            info!("source city {source_city:?} (resolved to {resolved:?}) is not in the dataset");
            return Err(RankError::SourceCityNotFound {
                input: source_city.to_owned(),
            });
        };
        debug!(
            "resolved {source_city:?} to {} ({}, {})",
            context.city, context.state, context.zone
        );
        Ok(context)
    }

    /// Return the `limit` best destinations for `source_city`, best first.
    ///
    /// Equal scores keep their dataset order. The result holds
    /// `min(limit, dataset.len())` entries.
    ///
    /// # Errors
    /// Returns [`RankError::ZeroLimit`] when `limit` is zero and
    /// [`RankError::SourceCityNotFound`] when the city cannot be resolved.
    pub fn rank(&self, source_city: &str, limit: usize) -> Result<Vec<Recommendation>, RankError> {
        if limit == 0 {
            return Err(RankError::ZeroLimit);
        }
        let source = self.resolve_source(source_city)?;
        let max_log_popularity = self.dataset.max_log_popularity();
        let mut ranked: Vec<Recommendation> = self
            .dataset
            .iter()
            .map(|destination| {
                Recommendation::new(
                    destination,
                    DistanceTier::classify(destination, &source),
                    self.scorer.score(destination, &source, max_log_popularity),
                )
            })
            .collect();
        // `sort_by` is stable, so ties stay in dataset order.
        ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
        ranked.truncate(limit);
        debug!("ranked {} destinations for {}", ranked.len(), source.city);
        Ok(ranked)
    }

    /// Rank with the default limit of [`DEFAULT_LIMIT`].
    ///
    /// # Errors
    /// Propagates errors from [`Ranker::rank`].
    pub fn get_recommendations(&self, source_city: &str) -> Result<Vec<Recommendation>, RankError> {
        self.rank(source_city, DEFAULT_LIMIT)
    }
}
