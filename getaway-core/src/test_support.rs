//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use crate::{Dataset, Destination, Normalizer, RawDestination};

/// Build a raw row with textual numeric columns.
#[must_use]
pub fn raw_destination(
    name: &str,
    city: &str,
    state: &str,
    zone: &str,
    rating: &str,
    review_count: &str,
) -> RawDestination {
    RawDestination {
        name: name.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        zone: zone.to_owned(),
        rating: rating.to_owned(),
        review_count: review_count.to_owned(),
    }
}

/// A small dataset of Indian getaways in raw, pre-normalization form.
///
/// It contains legacy spellings (`Calcutta`, `Bangalore`, `Delhi`), a
/// non-numeric rating and an empty review count so that normalization has
/// something to do.
#[must_use]
pub fn sample_rows() -> Vec<RawDestination> {
    vec![
        raw_destination("Victoria Memorial", "Kolkata", "West Bengal", "Eastern", "4.6", "1.5"),
        raw_destination("Tiger Hill", "Darjeeling", "West Bengal", "Eastern", "4.5", "0.4"),
        raw_destination("Jagannath Temple", "Puri", "Odisha", "Eastern", "4.7", "1.1"),
        raw_destination("Howrah Bridge", "Calcutta", "West Bengal", "Eastern", "4.4", "0.9"),
        raw_destination("India Gate", "Delhi", "Delhi", "Northern", "4.6", "2.6"),
        raw_destination("Taj Mahal", "Agra", "Uttar Pradesh", "Northern", "4.6", "2.9"),
        raw_destination("Lalbagh", "Bangalore", "Karnataka", "Southern", "4.4", "0.7"),
        raw_destination("Mysore Palace", "Mysuru", "Karnataka", "Southern", "4.6", "1.8"),
        raw_destination("Calangute Beach", "Goa", "Goa", "Western", "not rated", ""),
        raw_destination("Gateway of India", "Mumbai", "Maharashtra", "Western", "4.6", "1.4"),
    ]
}

/// [`sample_rows`] after default normalization.
#[must_use]
pub fn sample_dataset() -> Dataset {
    Normalizer::default().normalize(sample_rows())
}

/// A dataset in which every destination has zero reviews.
#[must_use]
pub fn zero_popularity_dataset() -> Dataset {
    Dataset::new(vec![
        Destination::new("Park Street", "Kolkata", "West Bengal", "Eastern", 4.2, 0.0),
        Destination::new("Tiger Hill", "Darjeeling", "West Bengal", "Eastern", 4.5, 0.0),
        Destination::new("Konark", "Puri", "Odisha", "Eastern", 4.6, 0.0),
        Destination::new("Charminar", "Hyderabad", "Telangana", "Southern", 4.5, 0.0),
    ])
}
