//! Unit tests for gd-directions.

#[cfg(test)]
mod helpers {
    use gd_core::GeoPoint;
    use gd_route::{GeoSegment, Route};

    pub fn p(lat_e6: i32, lon_e6: i32) -> GeoPoint {
        GeoPoint::new(lat_e6, lon_e6).unwrap()
    }

    pub fn seg(name: &str, p1: GeoPoint, p2: GeoPoint) -> GeoSegment {
        GeoSegment::new(name, p1, p2)
    }

    /// Main St north A→B→C (2 × 0.5545 km), then Oak Ave east C→D (0.93681 km).
    pub fn main_then_oak() -> Route {
        let a = p(32_780_000, 35_010_000);
        let b = p(32_785_000, 35_010_000);
        let c = p(32_790_000, 35_010_000);
        let d = p(32_790_000, 35_020_000);
        Route::from_segments([seg("Main St", a, b), seg("Main St", b, c), seg("Oak Ave", c, d)])
            .unwrap()
    }
}

// ── Turn classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod turn {
    use crate::{DirectionsError, Turn, turn_string};

    #[test]
    fn boundary_scenarios() {
        assert_eq!(turn_string(0.0, 5.0).unwrap(), "Continue");
        assert_eq!(turn_string(0.0, 15.0).unwrap(), "Turn slight right");
        assert_eq!(turn_string(0.0, 179.0).unwrap(), "U-turn");
        assert_eq!(turn_string(0.0, 180.0).unwrap(), "U-turn");
        assert_eq!(turn_string(0.0, 181.0).unwrap(), "Turn sharp left");
        assert_eq!(turn_string(0.0, 355.0).unwrap(), "Continue");
    }

    #[test]
    fn every_band_edge() {
        let table = [
            (9.999, Turn::Continue),
            (10.0, Turn::SlightRight),
            (59.999, Turn::SlightRight),
            (60.0, Turn::Right),
            (119.999, Turn::Right),
            (120.0, Turn::SharpRight),
            (178.999, Turn::SharpRight),
            (179.0, Turn::UTurn),
            (180.999, Turn::UTurn),
            (181.0, Turn::SharpLeft),
            (239.999, Turn::SharpLeft),
            (240.0, Turn::Left),
            (299.999, Turn::Left),
            (300.0, Turn::SlightLeft),
            (349.999, Turn::SlightLeft),
            (350.0, Turn::Continue),
            (359.999, Turn::Continue),
        ];
        for (new, expected) in table {
            assert_eq!(Turn::classify(0.0, new).unwrap(), expected, "a = {new}");
        }
    }

    #[test]
    fn difference_is_not_circular() {
        // 90 → 0 is a left turn on a compass, but |0 - 90| = 90 reads as right.
        assert_eq!(Turn::classify(90.0, 0.0).unwrap(), Turn::Right);
        // 350 → 10 crosses north: |10 - 350| = 340.
        assert_eq!(Turn::classify(350.0, 10.0).unwrap(), Turn::SlightLeft);
    }

    #[test]
    fn rejects_out_of_range_headings() {
        for (orig, new) in [(-1.0, 0.0), (0.0, 360.0), (360.0, 0.0), (f64::NAN, 0.0)] {
            assert!(
                matches!(Turn::classify(orig, new), Err(DirectionsError::InvalidArgument(_))),
                "({orig}, {new})"
            );
        }
    }

    #[test]
    fn heading_error_names_parameter() {
        match Turn::classify(0.0, 360.0) {
            Err(DirectionsError::InvalidArgument(msg)) => {
                assert!(msg.starts_with("new_heading:"), "{msg}");
                assert!(msg.contains("outside [0, 360)"), "{msg}");
            }
            other => panic!("unexpected {other:?}"),
        }
        match Turn::classify(-5.0, 0.0) {
            Err(DirectionsError::InvalidArgument(msg)) => assert!(msg.starts_with("orig_heading:"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Turn::UTurn.to_string(), "U-turn");
        assert_eq!(Turn::SlightLeft.to_string(), "Turn slight left");
    }
}

// ── RouteFormatter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod formatter {
    use std::cell::RefCell;

    use gd_route::{GeoFeature, Route};

    use super::helpers::*;
    use crate::{DirectionsError, DirectionsResult, RouteFormatter};

    #[test]
    fn one_line_per_feature_with_running_heading() {
        let route = main_then_oak();
        let calls: RefCell<Vec<(String, f64)>> = RefCell::new(Vec::new());
        let renderer = |f: &GeoFeature, heading: f64| -> DirectionsResult<String> {
            calls.borrow_mut().push((f.name().to_owned(), heading));
            Ok(format!("{}\n", f.name()))
        };

        let text = RouteFormatter::new(renderer).compute_directions(&route, 45.0).unwrap();

        assert_eq!(text, "Main St\nOak Ave\n");
        let calls = calls.into_inner();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("Main St".to_owned(), 45.0));
        // Second feature sees the end heading of Main St, not the initial heading.
        assert_eq!(calls[1], ("Oak Ave".to_owned(), route.features()[0].end_heading()));
    }

    #[test]
    fn missing_newline_is_appended() {
        let route = main_then_oak();
        let renderer = |f: &GeoFeature, _: f64| -> DirectionsResult<String> { Ok(f.name().to_owned()) };
        let text = RouteFormatter::new(renderer).compute_directions(&route, 0.0).unwrap();
        assert_eq!(text, "Main St\nOak Ave\n");
    }

    #[test]
    fn rejects_bad_initial_heading() {
        let route = main_then_oak();
        let renderer = |_: &GeoFeature, _: f64| -> DirectionsResult<String> { Ok(String::new()) };
        let formatter = RouteFormatter::new(renderer);
        assert!(matches!(
            formatter.compute_directions(&route, 360.0),
            Err(DirectionsError::InvalidArgument(_))
        ));
        match formatter.compute_directions(&route, -0.5) {
            Err(DirectionsError::InvalidArgument(msg)) => assert!(msg.starts_with("initial heading:"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn renderer_error_propagates() {
        let route = main_then_oak();
        let renderer = |f: &GeoFeature, _: f64| -> DirectionsResult<String> {
            if f.name() == "Oak Ave" {
                Err(DirectionsError::InvalidArgument("no oaks".to_owned()))
            } else {
                Ok("ok\n".to_owned())
            }
        };
        assert!(RouteFormatter::new(renderer).compute_directions(&route, 0.0).is_err());
    }

    #[test]
    fn single_feature_route() {
        let a = p(32_780_000, 35_010_000);
        let b = p(32_785_000, 35_010_000);
        let route = Route::new(seg("Main St", a, b));
        let renderer = |f: &GeoFeature, _: f64| -> DirectionsResult<String> { Ok(format!("{}\n", f.name())) };
        let text = RouteFormatter::new(renderer).compute_directions(&route, 0.0).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

// ── Bundled renderers ─────────────────────────────────────────────────────────

#[cfg(test)]
mod renderers {
    use approx::assert_abs_diff_eq;

    use super::helpers::*;
    use crate::{
        DirectionsConfig, DirectionsError, DrivingRenderer, LineRenderer, RouteFormatter,
        WalkingRenderer,
    };

    #[test]
    fn driving_directions() {
        let route = main_then_oak();
        let text = RouteFormatter::new(DrivingRenderer::default())
            .compute_directions(&route, 0.0)
            .unwrap();
        assert_eq!(
            text,
            "Continue onto Main St and go 1.1 kilometers.\n\
             Turn right onto Oak Ave and go 0.9 kilometers.\n"
        );
    }

    #[test]
    fn driving_from_opposite_heading() {
        let route = main_then_oak();
        let text = RouteFormatter::new(DrivingRenderer::default())
            .compute_directions(&route, 180.0)
            .unwrap();
        assert!(text.starts_with("U-turn onto Main St"), "{text}");
    }

    #[test]
    fn driving_precision_from_config() {
        let route = main_then_oak();
        let config = DirectionsConfig { distance_decimals: 3, ..DirectionsConfig::default() };
        let line = DrivingRenderer::new(config)
            .unwrap()
            .compute_line(&route.features()[1], 0.0)
            .unwrap();
        assert_eq!(line, "Turn right onto Oak Ave and go 0.937 kilometers.\n");
    }

    #[test]
    fn walking_directions() {
        let route = main_then_oak();
        let text = RouteFormatter::new(WalkingRenderer::default())
            .compute_directions(&route, 0.0)
            .unwrap();
        // 1.10901 km × 20 = 22.2 min; 0.93681 km × 20 = 18.7 min.
        assert_eq!(
            text,
            "Continue onto Main St and walk for 22 minutes.\n\
             Turn right onto Oak Ave and walk for 19 minutes.\n"
        );
    }

    #[test]
    fn walking_pace() {
        let config = DirectionsConfig { walking_minutes_per_km: 12.0, ..DirectionsConfig::default() };
        let walker = WalkingRenderer::new(config).unwrap();
        assert_eq!(walker.minutes_for(1.0), 12);
        assert_eq!(walker.minutes_for(0.0), 0);
        assert_abs_diff_eq!(walker.config().walking_minutes_per_km, 12.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let zero_pace = DirectionsConfig { walking_minutes_per_km: 0.0, ..DirectionsConfig::default() };
        assert!(matches!(WalkingRenderer::new(zero_pace), Err(DirectionsError::Config(_))));

        let nan_pace = DirectionsConfig { walking_minutes_per_km: f64::NAN, ..DirectionsConfig::default() };
        assert!(nan_pace.validate().is_err());

        let too_precise = DirectionsConfig { distance_decimals: 7, ..DirectionsConfig::default() };
        assert!(matches!(DrivingRenderer::new(too_precise), Err(DirectionsError::Config(_))));

        assert!(DirectionsConfig::default().validate().is_ok());
    }
}
