//! Core domain types for the weekend getaway ranker.
//!
//! The crate holds everything that is independent of how destinations are
//! stored or presented:
//! - [`RawDestination`] rows are turned into an immutable [`Dataset`] by the
//!   [`Normalizer`], which canonicalizes city spellings through an
//!   [`AliasTable`], coerces numeric columns and captures the popularity
//!   denominator once.
//! - [`DistanceTier`] approximates proximity from the city, state and zone
//!   hierarchy because no coordinates are available.
//! - The [`Scorer`] trait is the seam through which rankers turn a
//!   destination and a [`SourceContext`] into a score.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alias;
mod dataset;
mod destination;
mod normalize;
mod scorer;
mod tier;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use alias::{AliasTable, CANONICAL_DELHI, LEGACY_DELHI, title_case};
pub use dataset::Dataset;
pub use destination::{Destination, RawDestination};
pub use normalize::{Normalizer, coerce_number};
pub use scorer::{Scorer, SourceContext};
pub use tier::{DistanceTier, PROXIMITY_SCALE, UnknownDistanceTier};
