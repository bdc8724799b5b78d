//! Directions configuration.

use crate::{DirectionsError, DirectionsResult};

/// Tunables for the bundled renderers.
///
/// Typically built with `Default` and adjusted, or loaded from a TOML/JSON
/// file by the application when the `serde` feature is on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirectionsConfig {
    /// Walking pace in minutes per kilometre.  Default: 20 (3 km/h).
    pub walking_minutes_per_km: f64,

    /// Decimal places for kilometre figures in driving directions.  Default: 1.
    pub distance_decimals: usize,
}

impl DirectionsConfig {
    /// Most decimal places accepted by [`validate`][Self::validate];
    /// coordinates only carry micro-degree precision.
    pub const MAX_DISTANCE_DECIMALS: usize = 6;

    pub fn validate(&self) -> DirectionsResult<()> {
        if !self.walking_minutes_per_km.is_finite() || self.walking_minutes_per_km <= 0.0 {
            return Err(DirectionsError::Config(format!(
                "walking_minutes_per_km must be positive, got {}",
                self.walking_minutes_per_km
            )));
        }
        if self.distance_decimals > Self::MAX_DISTANCE_DECIMALS {
            return Err(DirectionsError::Config(format!(
                "distance_decimals must be at most {}, got {}",
                Self::MAX_DISTANCE_DECIMALS,
                self.distance_decimals
            )));
        }
        Ok(())
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            walking_minutes_per_km: 20.0,
            distance_decimals:      1,
        }
    }
}
