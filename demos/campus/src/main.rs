//! campus — smallest end-to-end example for the geo_directions workspace.
//!
//! Loads a small segment catalog around a university campus, builds a route
//! by always taking the first catalog segment that continues from the
//! current end, and prints driving and walking directions for it.
//!
//! Pass a CSV path as the first argument to use a different catalog; the
//! route then starts at that catalog's first row.  `RUST_LOG=trace` shows
//! every merge-or-new-feature decision.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use gd_directions::{DirectionsConfig, DrivingRenderer, RouteFormatter, WalkingRenderer};
use gd_route::{GeoSegment, Route, appendable, load_segments_csv, load_segments_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_SEGMENTS:    usize = 16;
const INITIAL_HEADING: f64   = 0.0; // facing north at the gate

// ── Catalog CSV ───────────────────────────────────────────────────────────────

// Gate → up Main St → Oak Ave east → Library Walk south → Elm St west.
const CATALOG_CSV: &str = "\
name,lat1,lon1,lat2,lon2\n\
Main St,32.774000,35.021000,32.778000,35.021000\n\
Main St,32.778000,35.021000,32.782000,35.021500\n\
Oak Ave,32.782000,35.021500,32.782500,35.026000\n\
Oak Ave,32.782500,35.026000,32.782500,35.030000\n\
Library Walk,32.782500,35.030000,32.779000,35.030500\n\
Elm St,32.779000,35.030500,32.778500,35.025000\n\
";

// ── Route building ────────────────────────────────────────────────────────────

/// Greedy walk over the catalog: extend with the first appendable segment
/// that is not already on the route, stopping at a dead end.
fn build_route(catalog: &[GeoSegment]) -> Result<Route> {
    let Some(first) = catalog.first() else {
        bail!("catalog is empty");
    };
    let mut route = Route::new(first.clone());

    while route.segment_count() < MAX_SEGMENTS {
        let next = appendable(&route, catalog)
            .find(|s| !route.segments().contains(s))
            .cloned();
        match next {
            Some(segment) => route = route.add_segment(segment)?,
            None => break,
        }
    }
    if route.segment_count() == MAX_SEGMENTS {
        warn!("stopped after {MAX_SEGMENTS} segments");
    }
    Ok(route)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = match std::env::args().nth(1) {
        Some(path) => load_segments_csv(Path::new(&path))
            .with_context(|| format!("loading catalog {path}"))?,
        None => load_segments_reader(Cursor::new(CATALOG_CSV))?,
    };
    info!("catalog has {} segments", catalog.len());

    let route = build_route(&catalog)?;
    info!("{route}");
    info!("route ends on {}", route.last_feature());

    let config = DirectionsConfig::default();
    let driving = RouteFormatter::new(DrivingRenderer::new(config.clone())?);
    let walking = RouteFormatter::new(WalkingRenderer::new(config)?);

    println!("=== campus — {:.2} km, {} features ===", route.length(), route.feature_count());
    println!();
    println!("Driving:");
    print!("{}", driving.compute_directions(&route, INITIAL_HEADING)?);
    println!();
    println!("Walking:");
    print!("{}", walking.compute_directions(&route, INITIAL_HEADING)?);

    Ok(())
}
