//! `gd-route` — immutable segments, features, and routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`segment`] | `GeoSegment`                                                |
//! | [`feature`] | `GeoFeature` — run of same-named chained segments           |
//! | [`route`]   | `Route` — segment path plus its feature partition           |
//! | [`catalog`] | `load_segments_csv`, `load_segments_reader`, `appendable`   |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! Data flows one way: segments fold into features, features and segments
//! fold into routes.  Every append returns a new value.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on segments, features and routes.        |

pub mod catalog;
pub mod error;
pub mod feature;
pub mod route;
pub mod segment;


pub use catalog::{appendable, load_segments_csv, load_segments_reader};
pub use error::{RouteError, RouteResult};
pub use feature::GeoFeature;
pub use route::Route;
pub use segment::GeoSegment;
