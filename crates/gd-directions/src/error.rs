use thiserror::Error;

use gd_core::CoreError;
use gd_route::RouteError;

#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Heading outside `[0, 360)` or another malformed caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("directions configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type DirectionsResult<T> = Result<T, DirectionsError>;

impl DirectionsError {
    /// Wrap a rejected heading as `InvalidArgument`, naming the parameter.
    pub(crate) fn heading(label: &str, err: CoreError) -> Self {
        DirectionsError::InvalidArgument(format!("{label}: {err}"))
    }
}
