//! `gd-core` — foundational types for the `geo_directions` workspace.
//!
//! This crate is a dependency of every other `gd-*` crate.  It has no `gd-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, flat-surface distance and heading         |
//! | [`heading`]     | compass-heading range checks and normalisation        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod heading;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use heading::{check_heading, is_valid_heading, normalize_heading};
