//! `RouteFormatter` — folds a route's features into directions text.

use log::debug;

use gd_core::check_heading;
use gd_route::Route;

use crate::{DirectionsError, DirectionsResult, LineRenderer};

/// Builds directions for a [`Route`] from a pluggable [`LineRenderer`].
///
/// The formatter owns the walk and the running heading; the renderer owns
/// the wording.
///
/// ```rust,ignore
/// let formatter = RouteFormatter::new(DrivingRenderer::default());
/// let text = formatter.compute_directions(&route, 0.0)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteFormatter<R> {
    renderer: R,
}

impl<R: LineRenderer> RouteFormatter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Directions for following `route` from its start, initially facing
    /// `initial_heading`.
    ///
    /// Emits one newline-terminated line per feature.  Each line is rendered
    /// relative to the heading the traveller arrives with: the end heading
    /// of the previous feature.
    ///
    /// Fails with [`DirectionsError::InvalidArgument`] if `initial_heading`
    /// is outside `[0, 360)`, and with whatever the renderer returns.
    pub fn compute_directions(&self, route: &Route, initial_heading: f64) -> DirectionsResult<String> {
        let initial_heading = check_heading(initial_heading)
            .map_err(|e| DirectionsError::heading("initial heading", e))?;

        let (directions, _) = route.features().iter().try_fold(
            (String::new(), initial_heading),
            |(mut out, heading), feature| {
                let line = self.renderer.compute_line(feature, heading)?;
                debug!("directions: {:?} from heading {heading:.1}: {}", feature.name(), line.trim_end());
                out.push_str(&line);
                if !line.ends_with('\n') {
                    out.push('\n');
                }
                Ok::<_, DirectionsError>((out, feature.end_heading()))
            },
        )?;
        Ok(directions)
    }
}
