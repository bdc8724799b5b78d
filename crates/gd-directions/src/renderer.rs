//! The `LineRenderer` trait — the per-feature extension point.

use gd_route::GeoFeature;

use crate::DirectionsResult;

/// Renders the directions line for one feature.
///
/// [`RouteFormatter`][crate::RouteFormatter] owns the walk over a route and
/// calls `compute_line` once per feature, in route order, passing the
/// heading the traveller arrives with (the previous feature's end heading,
/// or the caller's initial heading for the first feature).
///
/// Lines should end with `'\n'`; the formatter appends one if missing.
///
/// # Example
///
/// ```rust,ignore
/// struct NamesOnly;
///
/// impl LineRenderer for NamesOnly {
///     fn compute_line(&self, feature: &GeoFeature, _heading: f64) -> DirectionsResult<String> {
///         Ok(format!("{}\n", feature.name()))
///     }
/// }
/// ```
pub trait LineRenderer {
    fn compute_line(
        &self,
        feature:            &GeoFeature,
        heading_on_arrival: f64,
    ) -> DirectionsResult<String>;
}

/// Closures are renderers, which keeps one-off formats and tests short.
impl<F> LineRenderer for F
where
    F: Fn(&GeoFeature, f64) -> DirectionsResult<String>,
{
    fn compute_line(
        &self,
        feature:            &GeoFeature,
        heading_on_arrival: f64,
    ) -> DirectionsResult<String> {
        self(feature, heading_on_arrival)
    }
}
