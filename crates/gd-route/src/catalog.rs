//! CSV segment catalog loader.
//!
//! A catalog is the pool of segments a caller picks from when building a
//! route.  The route types place no constraint on where segments come from;
//! this loader is one convenient source.
//!
//! # CSV format
//!
//! One row per directed segment, coordinates in decimal degrees:
//!
//! ```csv
//! name,lat1,lon1,lat2,lon2
//! Main St,32.780000,35.010000,32.785000,35.010000
//! Main St,32.785000,35.010000,32.790000,35.010000
//! Oak Ave,32.790000,35.010000,32.790000,35.020000
//! ```
//!
//! Catalog order is preserved.  A two-way street needs one row per
//! direction, or callers can use [`GeoSegment::reverse`].

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use gd_core::GeoPoint;

use crate::{GeoSegment, Route, RouteError, RouteResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    name: String,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
}

impl SegmentRecord {
    fn into_segment(self) -> RouteResult<GeoSegment> {
        let p1 = GeoPoint::from_degrees(self.lat1, self.lon1)?;
        let p2 = GeoPoint::from_degrees(self.lat2, self.lon2)?;
        Ok(GeoSegment::new(self.name, p1, p2))
    }
}

/// Map a CSV error to `Io` when the underlying source failed, `Parse`
/// otherwise.  `row` is `None` for the header.
fn csv_error(err: csv::Error, row: Option<usize>) -> RouteError {
    let msg = match row {
        Some(row) => format!("row {row}: {err}"),
        None => format!("header: {err}"),
    };
    match err.into_kind() {
        csv::ErrorKind::Io(io) => RouteError::Io(io),
        _ => RouteError::Parse(msg),
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a segment catalog from a CSV file.
pub fn load_segments_csv(path: &Path) -> RouteResult<Vec<GeoSegment>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    let segments = load_segments_reader(file)?;
    debug!("catalog: loaded {} segments from {}", segments.len(), path.display());
    Ok(segments)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded in
/// a binary.
pub fn load_segments_reader<R: Read>(reader: R) -> RouteResult<Vec<GeoSegment>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // `deserialize` swallows a failed header read and yields no records, so
    // read the header explicitly first.
    csv_reader.headers().map_err(|e| csv_error(e, None))?;

    csv_reader
        .deserialize::<SegmentRecord>()
        .enumerate()
        .map(|(i, result)| {
            // Row 1 is the header.
            let row = i + 2;
            let record = result.map_err(|e| csv_error(e, Some(row)))?;
            record
                .into_segment()
                .map_err(|e| RouteError::Parse(format!("row {row}: {e}")))
        })
        .collect()
}

/// Catalog entries that can be appended to `route`, in catalog order.
pub fn appendable<'a>(
    route: &Route,
    catalog: &'a [GeoSegment],
) -> impl Iterator<Item = &'a GeoSegment> + use<'a> {
    let end = route.end();
    catalog.iter().filter(move |s| s.p1() == end)
}
