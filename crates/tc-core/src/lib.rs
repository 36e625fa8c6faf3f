//! `tc-core` — foundational types for the transit catalogue engine.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `StopId`, `BusId`, `VertexId`, `EdgeId`                |
//! | [`geo`]      | `Coordinates`, great-circle distance                   |
//! | [`settings`] | `RoutingSettings`, `SerializationSettings`             |
//! | [`render`]   | `RenderSettings`, `Color`, `Point`                     |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to geo and settings types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod render;
pub mod settings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coordinates;
pub use ids::{BusId, EdgeId, StopId, VertexId};
pub use render::{Color, Point, RenderSettings};
pub use settings::{RoutingSettings, SerializationSettings};
