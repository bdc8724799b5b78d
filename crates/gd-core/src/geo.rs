//! Geographic coordinate type and flat-surface geometry.
//!
//! `GeoPoint` stores latitude/longitude as integer millionths of a degree.
//! Integer storage makes equality exact, which matters because segments are
//! chained by comparing endpoints.
//!
//! Distances and headings use a flat-surface approximation: one degree of
//! latitude and one degree of longitude are treated as fixed lengths.  This
//! is accurate to well under 1 % for paths spanning a few kilometres around
//! the reference latitude (~32.8° N) and is what the directions output is
//! calibrated against.

use std::fmt;

use crate::{CoreError, CoreResult, normalize_heading};

/// Kilometres per degree of latitude under the flat-surface approximation.
pub const KM_PER_DEGREE_LATITUDE: f64 = 110.901;

/// Kilometres per degree of longitude under the flat-surface approximation.
pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

const MIN_LAT_E6: i32 = -90_000_000;
const MAX_LAT_E6: i32 = 90_000_000;
const MIN_LON_E6: i32 = -180_000_000;
const MAX_LON_E6: i32 = 180_000_000;

/// A geographic coordinate in millionths of a degree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    lat_e6: i32,
    lon_e6: i32,
}

impl GeoPoint {
    /// Build a point from millionths of a degree.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]` degrees.
    pub fn new(lat_e6: i32, lon_e6: i32) -> CoreResult<Self> {
        if !(MIN_LAT_E6..=MAX_LAT_E6).contains(&lat_e6)
            || !(MIN_LON_E6..=MAX_LON_E6).contains(&lon_e6)
        {
            return Err(CoreError::OutOfRange {
                lat_e6: lat_e6 as i64,
                lon_e6: lon_e6 as i64,
            });
        }
        Ok(Self { lat_e6, lon_e6 })
    }

    /// Build a point from decimal degrees, rounding to the nearest millionth.
    pub fn from_degrees(lat: f64, lon: f64) -> CoreResult<Self> {
        let lat_e6 = (lat * 1e6).round();
        let lon_e6 = (lon * 1e6).round();
        if !lat_e6.is_finite()
            || !lon_e6.is_finite()
            || lat_e6.abs() > MAX_LAT_E6 as f64
            || lon_e6.abs() > MAX_LON_E6 as f64
        {
            return Err(CoreError::OutOfRange {
                lat_e6: lat_e6 as i64,
                lon_e6: lon_e6 as i64,
            });
        }
        Self::new(lat_e6 as i32, lon_e6 as i32)
    }

    #[inline]
    pub fn lat_e6(self) -> i32 {
        self.lat_e6
    }

    #[inline]
    pub fn lon_e6(self) -> i32 {
        self.lon_e6
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub fn lat(self) -> f64 {
        self.lat_e6 as f64 / 1e6
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn lon(self) -> f64 {
        self.lon_e6 as f64 / 1e6
    }

    /// North/east offset to `other` in kilometres.
    #[inline]
    fn offset_km(self, other: GeoPoint) -> (f64, f64) {
        let d_lat = (other.lat_e6 as f64 - self.lat_e6 as f64) / 1e6;
        let d_lon = (other.lon_e6 as f64 - self.lon_e6 as f64) / 1e6;
        (d_lat * KM_PER_DEGREE_LATITUDE, d_lon * KM_PER_DEGREE_LONGITUDE)
    }

    /// Straight-line distance to `other` in kilometres.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        let (north, east) = self.offset_km(other);
        north.hypot(east)
    }

    /// Compass heading from `self` to `other`, in `[0, 360)` degrees.
    ///
    /// Undefined when `self == other`; this returns `0.0` in that case and
    /// callers that care (see `GeoSegment`) check equality first.
    pub fn heading_to(self, other: GeoPoint) -> f64 {
        let (north, east) = self.offset_km(other);
        if north == 0.0 && east == 0.0 {
            return 0.0;
        }
        normalize_heading(east.atan2(north).to_degrees())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat(), self.lon())
    }
}
