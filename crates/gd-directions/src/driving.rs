//! Driving directions: turn, street, distance.

use gd_route::GeoFeature;

use crate::{DirectionsConfig, DirectionsResult, LineRenderer, Turn};

/// Renders `"<turn> onto <name> and go <km> kilometers.\n"`.
///
/// The turn is measured from the arrival heading to the feature's start
/// heading.  Kilometres are printed with `config.distance_decimals` places.
#[derive(Clone, Debug, Default)]
pub struct DrivingRenderer {
    config: DirectionsConfig,
}

impl DrivingRenderer {
    pub fn new(config: DirectionsConfig) -> DirectionsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl LineRenderer for DrivingRenderer {
    fn compute_line(
        &self,
        feature:            &GeoFeature,
        heading_on_arrival: f64,
    ) -> DirectionsResult<String> {
        let turn = Turn::classify(heading_on_arrival, feature.start_heading())?;
        Ok(format!(
            "{turn} onto {} and go {:.*} kilometers.\n",
            feature.name(),
            self.config.distance_decimals,
            feature.length(),
        ))
    }
}
