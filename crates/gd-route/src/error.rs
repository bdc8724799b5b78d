//! Route-subsystem error type.

use thiserror::Error;

use gd_core::CoreError;

/// Errors produced by `gd-route`.
///
/// Every failing operation leaves its receiver untouched: segments, features
/// and routes are immutable, so a rejected append simply returns the error.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A caller-supplied value violates the operation's contract
    /// (non-connecting endpoint, name mismatch on feature append, empty
    /// segment list).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The value cannot answer the query in its current state (heading of a
    /// zero-length segment).
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
