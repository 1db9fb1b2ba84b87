//! Scoring and ranking of weekend getaway destinations.
//!
//! Given a normalized [`Dataset`](getaway_core::Dataset), a [`Ranker`]
//! resolves the caller's source city, classifies every destination into a
//! [`DistanceTier`](getaway_core::DistanceTier), normalizes proximity,
//! rating and popularity onto a common scale and orders destinations by a
//! weighted sum of the three:
//!
//! `score = 0.4 * proximity + 0.4 * rating + 0.2 * popularity`
//!
//! # Examples
//!
//! ```
//! use getaway_core::{Normalizer, RawDestination};
//! use getaway_scorer::{RankError, Ranker};
//!
//! let rows = vec![RawDestination {
//!     name: "Lalbagh".into(),
//!     city: "Bangalore".into(),
//!     state: "Karnataka".into(),
//!     zone: "Southern".into(),
//!     rating: "4.4".into(),
//!     review_count: "0.7".into(),
//! }];
//! let ranker = Ranker::new(Normalizer::default().normalize(rows));
//! assert_eq!(ranker.get_recommendations("bangalore")?.len(), 1);
//! assert!(matches!(
//!     ranker.get_recommendations("Atlantis"),
//!     Err(RankError::SourceCityNotFound { .. })
//! ));
//! # Ok::<(), RankError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod ranker;
mod types;
mod weighted;

pub use error::{RankError, ScoreWeightsError};
pub use ranker::{DEFAULT_LIMIT, Ranker};
pub use types::{Recommendation, ScoreWeights};
pub use weighted::{MAX_RATING, SignalBreakdown, WeightedScorer};
