//! Walking directions: turn, street, time.

use gd_route::GeoFeature;

use crate::{DirectionsConfig, DirectionsResult, LineRenderer, Turn};

/// Renders `"<turn> onto <name> and walk for <n> minutes.\n"`.
///
/// `n` is the feature length times `config.walking_minutes_per_km`, rounded
/// to the nearest whole minute.
#[derive(Clone, Debug, Default)]
pub struct WalkingRenderer {
    config: DirectionsConfig,
}

impl WalkingRenderer {
    pub fn new(config: DirectionsConfig) -> DirectionsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// Whole minutes needed to walk `length_km`.
    #[inline]
    pub fn minutes_for(&self, length_km: f64) -> u64 {
        (length_km * self.config.walking_minutes_per_km).round() as u64
    }
}

impl LineRenderer for WalkingRenderer {
    fn compute_line(
        &self,
        feature:            &GeoFeature,
        heading_on_arrival: f64,
    ) -> DirectionsResult<String> {
        let turn = Turn::classify(heading_on_arrival, feature.start_heading())?;
        Ok(format!(
            "{turn} onto {} and walk for {} minutes.\n",
            feature.name(),
            self.minutes_for(feature.length()),
        ))
    }
}
