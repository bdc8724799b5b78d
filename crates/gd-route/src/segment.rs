//! Directed, named straight-line segments.
//!
//! A `GeoSegment` might represent one block of a street, one reach of a
//! river, or one edge of a boundary.  Two segments with the same endpoints
//! are told apart by name.  For example this map
//!
//! ```text
//!  Trumpeldor   a
//!  Avenue       |
//!               i--j--k  Hanita
//!               |
//!               z
//! ```
//!
//! is represented by `("Trumpeldor Avenue", a, i)`, `("Trumpeldor Avenue", z, i)`,
//! `("Hanita", i, j)` and `("Hanita", j, k)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use gd_core::GeoPoint;

use crate::{RouteError, RouteResult};

/// An immutable directed segment from `p1` to `p2`.
///
/// `length` and `heading` are derived once at construction.  A zero-length
/// segment (`p1 == p2`) stores a heading of `0.0`, but [`heading`][Self::heading]
/// refuses to report it.
///
/// Equality and hashing consider `(name, p1, p2)` only; a reversed segment
/// is a different segment.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoSegment {
    name:    Arc<str>,
    p1:      GeoPoint,
    p2:      GeoPoint,
    length:  f64,
    heading: f64,
}

impl GeoSegment {
    /// Construct a segment named `name` running from `p1` to `p2`.
    ///
    /// Any string is a valid name, including the empty one.
    pub fn new(name: impl Into<Arc<str>>, p1: GeoPoint, p2: GeoPoint) -> Self {
        let name = name.into();
        let heading = if p1 == p2 { 0.0 } else { p1.heading_to(p2) };
        Self {
            name,
            p1,
            p2,
            length: p1.distance_to(p2),
            heading,
        }
    }

    /// The same-named segment traversed in the opposite direction.
    pub fn reverse(&self) -> GeoSegment {
        Self::new(Arc::clone(&self.name), self.p2, self.p1)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name, for building features without copying it.
    #[inline]
    pub(crate) fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    #[inline]
    pub fn p1(&self) -> GeoPoint {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> GeoPoint {
        self.p2
    }

    /// Straight-line length in kilometres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `true` if `p1 == p2`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Compass heading from `p1` to `p2`, in degrees.
    ///
    /// Fails with [`RouteError::InvalidState`] for a zero-length segment,
    /// which has no direction.
    pub fn heading(&self) -> RouteResult<f64> {
        if self.is_degenerate() {
            return Err(RouteError::InvalidState(format!(
                "segment {self} has zero length and no heading"
            )));
        }
        Ok(self.heading)
    }

    /// The stored heading, `0.0` for a zero-length segment.
    ///
    /// Feature and route start/end headings derive from this value.
    #[inline]
    pub fn raw_heading(&self) -> f64 {
        self.heading
    }
}

impl PartialEq for GeoSegment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Eq for GeoSegment {}

impl Hash for GeoSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.p1.hash(state);
        self.p2.hash(state);
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {}, {})", &*self.name, self.p1, self.p2)
    }
}
