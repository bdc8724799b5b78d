//! Compass headings.
//!
//! A heading is a bearing in degrees in the half-open range `[0, 360)`:
//! north = 0, east = 90, south = 180, west = 270.  Headings are plain `f64`
//! values; these helpers keep range checks in one place.

use crate::{CoreError, CoreResult};

/// `true` if `h` is a finite angle in `[0, 360)`.
#[inline]
pub fn is_valid_heading(h: f64) -> bool {
    h.is_finite() && (0.0..360.0).contains(&h)
}

/// Return `h` unchanged if it is a valid heading.
pub fn check_heading(h: f64) -> CoreResult<f64> {
    if is_valid_heading(h) {
        Ok(h)
    } else {
        Err(CoreError::InvalidHeading(h))
    }
}

/// Fold any finite angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`, which
/// is mapped back to `0.0`.
pub fn normalize_heading(h: f64) -> f64 {
    let r = h.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
