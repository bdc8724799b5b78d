//! Turn classification between two compass headings.
//!
//! The angle used is the plain difference `a = |new - orig|`, not the
//! shortest way round the circle.  Values above 180 therefore read as left
//! turns:
//!
//! | `a`              | Turn                 |
//! |------------------|----------------------|
//! | `[0, 10)`        | Continue             |
//! | `[10, 60)`       | Turn slight right    |
//! | `[60, 120)`      | Turn right           |
//! | `[120, 179)`     | Turn sharp right     |
//! | `[179, 181)`     | U-turn               |
//! | `[181, 240)`     | Turn sharp left      |
//! | `[240, 300)`     | Turn left            |
//! | `[300, 350)`     | Turn slight left     |
//! | `[350, 360)`     | Continue             |
//!
//! The band widths are deliberately uneven (a two-degree U-turn band, a
//! final band closing at 350) and must not be "evened out".

use std::fmt;

use gd_core::check_heading;

use crate::{DirectionsError, DirectionsResult};

/// The manoeuvre needed to go from one heading to another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Continue,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
    SharpLeft,
    Left,
    SlightLeft,
}

impl Turn {
    /// Classify the change from `orig_heading` to `new_heading`.
    ///
    /// Fails with [`DirectionsError::InvalidArgument`] if either heading is
    /// outside `[0, 360)`.
    pub fn classify(orig_heading: f64, new_heading: f64) -> DirectionsResult<Turn> {
        let orig_heading =
            check_heading(orig_heading).map_err(|e| DirectionsError::heading("orig_heading", e))?;
        let new_heading =
            check_heading(new_heading).map_err(|e| DirectionsError::heading("new_heading", e))?;

        let a = (new_heading - orig_heading).abs();
        let turn = if a < 10.0 {
            Turn::Continue
        } else if a < 60.0 {
            Turn::SlightRight
        } else if a < 120.0 {
            Turn::Right
        } else if a < 179.0 {
            Turn::SharpRight
        } else if a < 181.0 {
            Turn::UTurn
        } else if a < 240.0 {
            Turn::SharpLeft
        } else if a < 300.0 {
            Turn::Left
        } else if a < 350.0 {
            Turn::SlightLeft
        } else {
            Turn::Continue
        };
        Ok(turn)
    }

    /// The English instruction, e.g. `"Turn slight right"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Turn::Continue    => "Continue",
            Turn::SlightRight => "Turn slight right",
            Turn::Right       => "Turn right",
            Turn::SharpRight  => "Turn sharp right",
            Turn::UTurn       => "U-turn",
            Turn::SharpLeft   => "Turn sharp left",
            Turn::Left        => "Turn left",
            Turn::SlightLeft  => "Turn slight left",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for `Turn::classify(orig, new)?.as_str()`.
pub fn turn_string(orig_heading: f64, new_heading: f64) -> DirectionsResult<&'static str> {
    Turn::classify(orig_heading, new_heading).map(Turn::as_str)
}
