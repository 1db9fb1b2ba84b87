//! CSV decoding of destination rows.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use getaway_core::RawDestination;

use crate::LoadError;

/// Header of the display-name column.
pub const NAME_COLUMN: &str = "Name";
/// Header of the city column.
pub const CITY_COLUMN: &str = "City";
/// Header of the state column.
pub const STATE_COLUMN: &str = "State";
/// Header of the zone column.
pub const ZONE_COLUMN: &str = "Zone";
/// Header of the review rating column.
pub const RATING_COLUMN: &str = "Google review rating";
/// Header of the review count column (in lakhs).
pub const REVIEW_COUNT_COLUMN: &str = "Number of google review in lakhs";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    name: usize,
    city: usize,
    state: usize,
    zone: usize,
    rating: usize,
    review_count: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(LoadError::MissingColumn { column })
        };
        Ok(Self {
            name: find(NAME_COLUMN)?,
            city: find(CITY_COLUMN)?,
            state: find(STATE_COLUMN)?,
            zone: find(ZONE_COLUMN)?,
            rating: find(RATING_COLUMN)?,
            review_count: find(REVIEW_COUNT_COLUMN)?,
        })
    }

    fn extract(self, record: &StringRecord) -> RawDestination {
        // Short rows are tolerated; absent cells read as empty.
        let field = |index: usize| record.get(index).unwrap_or_default().to_owned();
        RawDestination {
            name: field(self.name),
            city: field(self.city),
            state: field(self.state),
            zone: field(self.zone),
            rating: field(self.rating),
            review_count: field(self.review_count),
        }
    }
}

/// Decode destination rows from CSV with a header row.
///
/// Columns are located by header name, so their order does not matter and
/// extra columns are ignored. Cells are trimmed of surrounding whitespace.
///
/// # Errors
/// Returns [`LoadError::MissingColumn`] when a required header is absent,
/// and [`LoadError::ReadHeaders`] or [`LoadError::ReadRecord`] for
/// malformed CSV.
///
/// # Examples
/// ```
/// use getaway_data::read_destinations;
///
/// let csv = "Zone,Name,City,State,Google review rating,Number of google review in lakhs\n\
///            Eastern,Victoria Memorial,Kolkata,West Bengal,4.6,1.5\n";
/// let rows = read_destinations(csv.as_bytes())?;
/// assert_eq!(rows[0].city, "Kolkata");
/// assert_eq!(rows[0].rating, "4.6");
/// # Ok::<(), getaway_data::LoadError>(())
/// ```
pub fn read_destinations<R: Read>(reader: R) -> Result<Vec<RawDestination>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| LoadError::ReadHeaders { source })?;
    let columns = ColumnIndex::locate(headers)?;
    csv_reader
        .records()
        .map(|record| {
            record
                .map(|row| columns.extract(&row))
                .map_err(|source| LoadError::ReadRecord {
                    line: source.position().map(csv::Position::line),
                    source,
                })
        })
        .collect()
}
