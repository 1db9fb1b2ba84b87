//! Categorical proximity derived from the administrative hierarchy.
//!
//! No coordinates are available, so distance is approximated by whether a
//! destination shares the source's city, state or zone. The tier values are
//! fixed magnitudes calibrated against [`PROXIMITY_SCALE`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Destination, SourceContext};

/// Denominator mapping a tier value onto the proximity signal.
pub const PROXIMITY_SCALE: f64 = 2000.0;

/// Proximity tier of a destination relative to a source city.
///
/// Tiers serialize as their numeric value.
///
/// # Examples
/// ```
/// use getaway_core::{Destination, DistanceTier, SourceContext};
///
/// let source = SourceContext::new("Kolkata", "West Bengal", "Eastern");
/// let puri = Destination::new("Jagannath Temple", "Puri", "Odisha", "Eastern", 4.7, 1.0);
/// let tier = DistanceTier::classify(&puri, &source);
/// assert_eq!(tier, DistanceTier::SameZone);
/// assert_eq!(tier.value(), 500);
/// assert_eq!(tier.proximity(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "u32", try_from = "u32")
)]
pub enum DistanceTier {
    /// Same city as the source.
    SameCity,
    /// Same state, different city.
    SameState,
    /// Same zone, different state.
    SameZone,
    /// Anywhere else.
    Elsewhere,
}

impl DistanceTier {
    /// Every tier, nearest first.
    pub const ALL: [Self; 4] = [
        Self::SameCity,
        Self::SameState,
        Self::SameZone,
        Self::Elsewhere,
    ];

    /// The categorical distance value of the tier.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::SameCity => 10,
            Self::SameState => 150,
            Self::SameZone => 500,
            Self::Elsewhere => 1500,
        }
    }

    /// Classify `destination` against `source`.
    ///
    /// The first matching rule wins: city, then state, then zone.
    #[must_use]
    pub fn classify(destination: &Destination, source: &SourceContext) -> Self {
        if destination.city == source.city {
            Self::SameCity
        } else if destination.state == source.state {
            Self::SameState
        } else if destination.zone == source.zone {
            Self::SameZone
        } else {
            Self::Elsewhere
        }
    }

    /// Proximity signal `1 - value / 2000`.
    ///
    /// Yields `0.995`, `0.925`, `0.75` and `0.25` for the four tiers; no
    /// clamping is needed because every tier value is below the scale.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "proximity is a linear transform of the tier value"
    )]
    pub fn proximity(self) -> f64 {
        1.0 - f64::from(self.value()) / PROXIMITY_SCALE
    }
}

impl fmt::Display for DistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<DistanceTier> for u32 {
    fn from(tier: DistanceTier) -> Self {
        tier.value()
    }
}

/// Returned when a number does not name a [`DistanceTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not a distance tier (expected 10, 150, 500 or 1500)")]
pub struct UnknownDistanceTier {
    /// The rejected value.
    pub value: u32,
}

impl TryFrom<u32> for DistanceTier {
    type Error = UnknownDistanceTier;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.value() == value)
            .ok_or(UnknownDistanceTier { value })
    }
}
