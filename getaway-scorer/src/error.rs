//! Error types raised while configuring weights or answering queries.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`ScoreWeights::new`](crate::ScoreWeights::new).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("{signal} weight must be finite")]
    NonFinite {
        /// Signal whose weight was rejected.
        signal: &'static str,
    },
    /// A weight was below zero.
    #[error("{signal} weight {value} must not be negative")]
    Negative {
        /// Signal whose weight was rejected.
        signal: &'static str,
        /// The rejected weight.
        value: f64,
    },
    /// The weights do not add up to one.
    #[error("weights must sum to 1.0 (got {sum})")]
    SumNotOne {
        /// Sum of the supplied weights.
        sum: f64,
    },
}

/// Recoverable, per-query ranking failures.
///
/// These never abort the process; callers decide how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// No dataset row matches the resolved source city.
    ///
    /// The message echoes the caller's original input rather than its
    /// resolved form.
    #[error("Source City '{input}' not found in the dataset.")]
    SourceCityNotFound {
        /// Source city exactly as the caller supplied it.
        input: String,
    },
    /// A query asked for zero recommendations.
    #[error("the number of recommendations must be at least 1")]
    ZeroLimit,
}
