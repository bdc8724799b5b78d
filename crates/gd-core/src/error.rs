//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `gd-core` value constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("coordinate out of range: lat {lat_e6}e-6, lon {lon_e6}e-6")]
    OutOfRange { lat_e6: i64, lon_e6: i64 },

    #[error("heading {0} is outside [0, 360)")]
    InvalidHeading(f64),
}

/// Shorthand result type for `gd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
