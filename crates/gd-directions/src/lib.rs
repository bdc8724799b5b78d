//! `gd-directions` — human-readable directions for routes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`turn`]      | `Turn` classification, `turn_string`                          |
//! | [`renderer`]  | `LineRenderer` trait                                          |
//! | [`formatter`] | `RouteFormatter<R>` — walks features, tracks running heading  |
//! | [`driving`]   | `DrivingRenderer` — "… and go 1.2 kilometers."                |
//! | [`walking`]   | `WalkingRenderer` — "… and walk for 5 minutes."               |
//! | [`config`]    | `DirectionsConfig`                                            |
//! | [`error`]     | `DirectionsError`, `DirectionsResult<T>`                      |
//!
//! # Design notes
//!
//! Formatting is split in two: a fixed fold over the route's features
//! ([`RouteFormatter`]) and a per-feature [`LineRenderer`] supplied by the
//! caller.  Swapping the renderer changes the wording without touching the
//! heading bookkeeping.

pub mod config;
pub mod driving;
pub mod error;
pub mod formatter;
pub mod renderer;
pub mod turn;
pub mod walking;

#[cfg(test)]
mod tests;

pub use config::DirectionsConfig;
pub use driving::DrivingRenderer;
pub use error::{DirectionsError, DirectionsResult};
pub use formatter::RouteFormatter;
pub use renderer::LineRenderer;
pub use turn::{Turn, turn_string};
pub use walking::WalkingRenderer;
