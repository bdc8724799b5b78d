//! Runs of same-named, endpoint-chained segments.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::Arc;

use gd_core::GeoPoint;

use crate::{GeoSegment, RouteError, RouteResult};

/// Travel along a single named geographic feature, such as a winding river
/// or a road that passes through several intersections.
///
/// Invariants:
///
/// - `segments` is non-empty and every element carries `name`;
/// - `segments[i].p2() == segments[i + 1].p1()`;
/// - `start`, `start_heading` come from the first segment and `end`,
///   `end_heading` from the last;
/// - `length` is the sum of segment lengths (path length, not the
///   straight-line distance between `start` and `end`).
///
/// Features are immutable.  [`add_segment`][Self::add_segment] returns a new
/// feature and leaves `self` usable.  The segment slice is shared through an
/// `Arc`, so cloning a feature is cheap.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoFeature {
    name:          Arc<str>,
    start:         GeoPoint,
    end:           GeoPoint,
    start_heading: f64,
    end_heading:   f64,
    length:        f64,
    segments:      Arc<[GeoSegment]>,
}

impl GeoFeature {
    /// A feature consisting of `segment` alone.
    pub fn new(segment: GeoSegment) -> Self {
        Self {
            name:          Arc::clone(segment.name_arc()),
            start:         segment.p1(),
            end:           segment.p2(),
            start_heading: segment.raw_heading(),
            end_heading:   segment.raw_heading(),
            length:        segment.length(),
            segments:      Arc::from([segment]),
        }
    }

    /// A new feature equal to `self` with `segment` appended.
    ///
    /// Fails with [`RouteError::InvalidArgument`] unless `segment.p1()`
    /// equals [`end`][Self::end] and `segment.name()` equals
    /// [`name`][Self::name].
    pub fn add_segment(&self, segment: GeoSegment) -> RouteResult<GeoFeature> {
        if segment.p1() != self.end {
            return Err(RouteError::InvalidArgument(format!(
                "segment {segment} does not start at feature end {}",
                self.end
            )));
        }
        if segment.name() != self.name() {
            return Err(RouteError::InvalidArgument(format!(
                "segment {segment} does not belong to feature {:?}",
                &*self.name
            )));
        }

        Ok(GeoFeature {
            name:          Arc::clone(&self.name),
            start:         self.start,
            end:           segment.p2(),
            start_heading: self.start_heading,
            end_heading:   segment.raw_heading(),
            length:        self.length + segment.length(),
            segments:      self.segments.iter().cloned().chain(iter::once(segment)).collect(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.end
    }

    /// Direction of travel at the start, in degrees.
    #[inline]
    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    /// Direction of travel at the end, in degrees.
    #[inline]
    pub fn end_heading(&self) -> f64 {
        self.end_heading
    }

    /// Total path length in kilometres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The segments of this feature, in travel order.
    #[inline]
    pub fn segments(&self) -> &[GeoSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl PartialEq for GeoFeature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.segments == other.segments
    }
}

impl Eq for GeoFeature {}

impl Hash for GeoFeature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.segments.hash(state);
    }
}

impl fmt::Display for GeoFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoFeature[{:?}, {} -> {}, {} segments, {:.3} km]",
            &*self.name,
            self.start,
            self.end,
            self.segments.len(),
            self.length,
        )
    }
}
