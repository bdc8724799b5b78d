//! Routes: ordered paths over arbitrary segments, partitioned into features.
//!
//! # Partition maintenance
//!
//! A route keeps two views of the same path: the flat segment sequence and
//! its run-length partition by name into [`GeoFeature`]s.  Appending a
//! segment only ever touches the tail of the partition:
//!
//! ```text
//! segment.name == last feature name  →  Merge:      replace last feature
//! otherwise                          →  NewFeature: push singleton feature
//! ```
//!
//! Both sequences live behind `Arc<[_]>`.  An append copies the handles of
//! the unaffected prefix (features and segments are cheap to clone), so the
//! receiver and every earlier route built from it remain valid.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::Arc;

use log::trace;

use gd_core::GeoPoint;

use crate::{GeoFeature, GeoSegment, RouteError, RouteResult};

// ── Tail decision ─────────────────────────────────────────────────────────────

/// What an appended segment does to the feature partition.
enum Tail {
    /// The segment extends the last feature; this is its replacement.
    Merge(GeoFeature),
    /// The segment starts a new trailing feature.
    NewFeature(GeoFeature),
}

fn next_tail(last: &GeoFeature, segment: &GeoSegment) -> RouteResult<Tail> {
    if segment.name() == last.name() {
        last.add_segment(segment.clone()).map(Tail::Merge)
    } else {
        Ok(Tail::NewFeature(GeoFeature::new(segment.clone())))
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A path that traverses arbitrary segments, regardless of their names.
///
/// Because a route is not necessarily straight, its [`length`][Self::length]
/// is the distance travelled along the path, not the distance between its
/// endpoints.
///
/// Equality and hashing consider the flat segment sequence only; the
/// feature partition is a deterministic function of it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    start:         GeoPoint,
    end:           GeoPoint,
    start_heading: f64,
    end_heading:   f64,
    length:        f64,
    segments:      Arc<[GeoSegment]>,
    features:      Arc<[GeoFeature]>,
}

impl Route {
    /// A route of one segment, containing one single-segment feature.
    pub fn new(segment: GeoSegment) -> Self {
        Self {
            start:         segment.p1(),
            end:           segment.p2(),
            start_heading: segment.raw_heading(),
            end_heading:   segment.raw_heading(),
            length:        segment.length(),
            features:      Arc::from([GeoFeature::new(segment.clone())]),
            segments:      Arc::from([segment]),
        }
    }

    /// Fold `segments` into a route by repeated [`add_segment`][Self::add_segment].
    ///
    /// Fails with [`RouteError::InvalidArgument`] if `segments` is empty or
    /// any segment does not start where the previous one ended.
    pub fn from_segments<I>(segments: I) -> RouteResult<Route>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        let mut iter = segments.into_iter();
        let first = iter.next().ok_or_else(|| {
            RouteError::InvalidArgument("a route needs at least one segment".to_owned())
        })?;
        iter.try_fold(Route::new(first), |route, segment| route.add_segment(segment))
    }

    /// A new route equal to `self` with `segment` appended.
    ///
    /// Fails with [`RouteError::InvalidArgument`] unless `segment.p1()`
    /// equals [`end`][Self::end].  Names are unconstrained: a segment with a
    /// new name starts a new feature, one matching the last feature's name
    /// extends it.
    pub fn add_segment(&self, segment: GeoSegment) -> RouteResult<Route> {
        if segment.p1() != self.end {
            return Err(RouteError::InvalidArgument(format!(
                "segment {segment} does not start at route end {}",
                self.end
            )));
        }

        let (prefix, last) = self
            .features
            .split_last()
            .map(|(last, prefix)| (prefix, last))
            .ok_or_else(|| RouteError::InvalidState("route has no features".to_owned()))?;

        let features: Arc<[GeoFeature]> = match next_tail(last, &segment)? {
            Tail::Merge(merged) => {
                trace!(
                    "route: merging {segment} into feature #{} {:?}",
                    prefix.len(),
                    merged.name()
                );
                prefix.iter().cloned().chain(iter::once(merged)).collect()
            }
            Tail::NewFeature(fresh) => {
                trace!(
                    "route: starting feature #{} {:?}",
                    self.features.len(),
                    fresh.name()
                );
                self.features.iter().cloned().chain(iter::once(fresh)).collect()
            }
        };

        Ok(Route {
            start:         self.start,
            end:           segment.p2(),
            start_heading: self.start_heading,
            end_heading:   segment.raw_heading(),
            length:        self.length + segment.length(),
            features,
            segments:      self.segments.iter().cloned().chain(iter::once(segment)).collect(),
        })
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

    /// The segments of this route, in travel order.
    #[inline]
    pub fn segments(&self) -> &[GeoSegment] {
        &self.segments
    }

    /// The features of this route, in travel order.
    ///
    /// Concatenating their segments reproduces [`segments`][Self::segments];
    /// no two adjacent features share a name.
    #[inline]
    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// The feature the route currently ends on.
    pub fn last_feature(&self) -> &GeoFeature {
        // Non-empty by construction.
        &self.features[self.features.len() - 1]
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route[{} -> {}, {:.3} km:", self.start, self.end, self.length)?;
        for (i, feature) in self.features.iter().enumerate() {
            let sep = if i == 0 { " " } else { " / " };
            write!(f, "{sep}{:?} x{}", feature.name(), feature.segment_count())?;
        }
        f.write_str("]")
    }
}
